use crate::domain::kinds::{KindClass, KindId, K_BLOCK, K_EMPTY, K_FIRE};
use crate::spatial::neighbors::resolve;

use super::WorldCore;

/// Brush half-width cap: radius 2 is a 5x5 footprint
pub const MAX_BRUSH_RADIUS: u32 = 2;

/// Paint one cell. An occupied slot is replaced only when painting Block
/// over a non-Block, or Fire over a flammable non-extinguishing non-Block
/// cell; everything else - including repainting the same kind - is a no-op.
pub(super) fn paint_cell(world: &mut WorldCore, x: u32, y: u32, kind: KindId) -> bool {
    if x >= world.grid.width() || y >= world.grid.height() {
        return false;
    }
    if kind == K_EMPTY || !world.kinds.is_valid_kind_id(kind) {
        return false;
    }

    let existing = world.grid.kinds[world.grid.index(x, y)];
    if existing == kind {
        return false;
    }
    if existing != K_EMPTY {
        let replaceable = match kind {
            K_BLOCK => existing != K_BLOCK,
            K_FIRE => {
                existing != K_BLOCK
                    && world
                        .kinds
                        .props(existing)
                        .map(|p| p.flammable && !p.extinguishes)
                        .unwrap_or(false)
            }
            _ => false,
        };
        if !replaceable {
            return false;
        }
        remove_cell(world, x, y);
    }

    place_cell(world, x, y, kind)
}

fn place_cell(world: &mut WorldCore, x: u32, y: u32, kind: KindId) -> bool {
    let seed = ((x * 7 + y * 13 + world.frame as u32) & 31) as u8;

    let Some(props) = world.kinds.props(kind) else {
        return false;
    };
    let life = props.life_span;
    let color = world
        .kinds
        .color_with_variation(kind, seed)
        .unwrap_or(props.color);

    if world.grid.put(x, y, kind, color, life).is_err() {
        return false;
    }

    world.active.clear_at(x, y);
    if world.kinds.class(kind) == KindClass::Faller {
        world.active.wake(x, y);
    }
    world.cell_count += 1;
    true
}

fn remove_cell(world: &mut WorldCore, x: u32, y: u32) -> bool {
    if world.grid.remove(x, y).is_none() {
        return false;
    }
    world.active.clear_at(x, y);
    if world.cell_count > 0 {
        world.cell_count -= 1;
    }
    true
}

/// Erase one cell; its neighbors wake so the hole can be filled
pub(super) fn erase_cell(world: &mut WorldCore, x: u32, y: u32) -> bool {
    if x >= world.grid.width() || y >= world.grid.height() {
        return false;
    }

    let hood = resolve(&world.grid, x, y, world.gravity_x, world.gravity_y);
    if !remove_cell(world, x, y) {
        return false;
    }

    for (slot, pos) in hood.slots() {
        if let Some(kind) = slot.kind() {
            if world.kinds.class(kind) == KindClass::Faller {
                world.active.wake(pos.0 as u32, pos.1 as u32);
            }
        }
    }
    true
}

/// Apply the brush around the cursor using the world's brush settings
pub(super) fn apply_brush(world: &mut WorldCore, cx: i32, cy: i32) {
    if world.erase_mode {
        erase_with_brush(world, cx, cy);
    } else {
        paint_with_brush(world, cx, cy, world.brush_kind);
    }
}

/// Paint the brush square: radius r covers (2r+1)^2 cells
pub(super) fn paint_with_brush(world: &mut WorldCore, cx: i32, cy: i32, kind: KindId) {
    let r = world.brush_radius as i32;
    for dy in -r..=r {
        for dx in -r..=r {
            let x = cx + dx;
            let y = cy + dy;
            if x >= 0 && y >= 0 {
                paint_cell(world, x as u32, y as u32, kind);
            }
        }
    }
}

/// Erase the brush square, then wake everything on the anti-gravity side of
/// the erase limit - those are the cells whose support may just have gone.
pub(super) fn erase_with_brush(world: &mut WorldCore, cx: i32, cy: i32) {
    let r = world.brush_radius as i32;
    for dy in -r..=r {
        for dx in -r..=r {
            let x = cx + dx;
            let y = cy + dy;
            if x >= 0 && y >= 0 {
                erase_cell(world, x as u32, y as u32);
            }
        }
    }

    let (gx, gy) = (world.gravity_x, world.gravity_y);
    let limit_x = (cx + gx * r).clamp(0, world.grid.width() as i32 - 1);
    let limit_y = (cy + gy * r).clamp(0, world.grid.height() as i32 - 1);

    for y in 0..world.grid.height() {
        for x in 0..world.grid.width() {
            let kind = world.grid.kinds[world.grid.index(x, y)];
            if kind == K_EMPTY || world.kinds.class(kind) != KindClass::Faller {
                continue;
            }
            let upstream = (gx == -1 && x as i32 >= limit_x)
                || (gx == 1 && x as i32 <= limit_x)
                || (gy == -1 && y as i32 >= limit_y)
                || (gy == 1 && y as i32 <= limit_y);
            if upstream {
                world.active.wake(x, y);
            }
        }
    }
}

/// Clear all cells and counters
pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.active.clear();
    world.cell_count = 0;
    world.frame = 0;
}
