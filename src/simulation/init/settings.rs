use crate::domain::kinds::{KindClass, KindId, K_EMPTY};
use crate::spatial::neighbors::{is_cardinal, resolve, Slot};

use super::commands::MAX_BRUSH_RADIUS;
use super::frame_stats::TickClock;
use super::random;
use super::WorldCore;

pub(super) fn set_gravity(world: &mut WorldCore, gx: i32, gy: i32) -> bool {
    if !is_cardinal(gx, gy) {
        return false;
    }
    if gx == world.gravity_x && gy == world.gravity_y {
        return true;
    }

    world.gravity_x = gx;
    world.gravity_y = gy;

    // Mass reactivation, but only where it can matter: a faller with every
    // neighbor slot empty is either mid-air (already active) or will be
    // disturbed when something reaches it. Cells touching an occupant or a
    // world edge are the ones whose exposure just changed.
    let width = world.grid.width();
    let height = world.grid.height();
    for y in 0..height {
        for x in 0..width {
            let kind = world.grid.kinds[world.grid.index(x, y)];
            if kind == K_EMPTY || world.kinds.class(kind) != KindClass::Faller {
                continue;
            }
            let hood = resolve(&world.grid, x, y, gx, gy);
            let bordered = hood.slots().iter().any(|(slot, _)| *slot != Slot::Empty);
            if bordered {
                world.active.wake(x, y);
            }
        }
    }

    true
}

pub(super) fn set_seed(world: &mut WorldCore, seed: u32) {
    world.rng_state = random::normalize_seed(seed);
}

pub(super) fn set_brush_kind(world: &mut WorldCore, kind: KindId) -> bool {
    if kind == K_EMPTY || !world.kinds.is_valid_kind_id(kind) {
        return false;
    }
    world.brush_kind = kind;
    true
}

pub(super) fn set_brush_radius(world: &mut WorldCore, radius: u32) {
    world.brush_radius = radius.min(MAX_BRUSH_RADIUS);
}

pub(super) fn pause(world: &mut WorldCore) {
    world.running = false;
}

/// Restart stepping. Cells are untouched; only the observed tick-rate
/// window restarts so the first reading after a long pause is not skewed.
pub(super) fn resume(world: &mut WorldCore) {
    world.running = true;
    world.window_clock = TickClock::start();
    world.window_ticks = 0;
    world.frame_stats.reset_rate();
}
