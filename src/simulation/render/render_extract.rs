use crate::domain::kinds::{KindClass, K_EMPTY};

use super::WorldCore;

/// One live cell, packed for the shell's draw pass
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderCell {
    pub x: u32,
    pub y: u32,
    pub kind: u32,
    pub color: u32,
}

/// Marker color for dormant fallers when the debug view is on
const DEBUG_DORMANT_COLOR: u32 = 0xFF00_00FF;

/// Rebuild the render buffer from the live grid; returns the cell count
pub(super) fn collect_render_cells(world: &mut WorldCore) -> usize {
    let debug_inactive = world.debug_draw_inactive;
    let grid = &world.grid;
    let active = &world.active;
    let kinds = &world.kinds;
    let cells = &mut world.render_cells;

    cells.clear();
    for idx in 0..grid.size() {
        let kind = grid.kinds[idx];
        if kind == K_EMPTY {
            continue;
        }
        let (x, y) = grid.coords(idx);
        let mut color = grid.colors[idx];
        if debug_inactive
            && kinds.class(kind) == KindClass::Faller
            && !active.is_active(x, y)
        {
            color = DEBUG_DORMANT_COLOR;
        }
        cells.push(RenderCell {
            x,
            y,
            kind: kind as u32,
            color,
        });
    }
    cells.len()
}
