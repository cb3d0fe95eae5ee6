use std::sync::Arc;

use crate::domain::kinds::{KindClass, K_EMPTY};
use crate::systems::behaviors::UpdateContext;

use super::WorldCore;

/// Update the cell at (x, y) if it needs simulating this tick.
///
/// Decaying cells always run while alive; fallers only while their
/// countdown is nonzero; blocks never. The visit marker guarantees a cell
/// relocated earlier in this pass is not processed again here.
pub(super) fn update_cell(world: &mut WorldCore, x: u32, y: u32) -> bool {
    let idx = world.grid.index(x, y);
    let kind = world.grid.kinds[idx];
    if kind == K_EMPTY {
        return false;
    }
    if world.grid.updated[idx] == 1 {
        return false;
    }

    let class = world.kinds.class(kind);
    match class {
        KindClass::Decay => {}
        KindClass::Faller => {
            if !world.active.is_active(x, y) {
                return false;
            }
        }
        _ => return false,
    }

    world.grid.updated[idx] = 1;

    let kinds = Arc::clone(&world.kinds);
    let mut ctx = UpdateContext {
        grid: &mut world.grid,
        active: &mut world.active,
        kinds: kinds.as_ref(),
        world_cell_count: &mut world.cell_count,
        x,
        y,
        frame: world.frame,
        gravity_x: world.gravity_x,
        gravity_y: world.gravity_y,
        rng: &mut world.rng_state,
    };
    world.behaviors.update(class, &mut ctx);
    true
}
