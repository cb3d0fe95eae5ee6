use super::frame_stats::TickClock;
use super::WorldCore;

/// How often the observed tick rate is recomputed
const RATE_WINDOW_MS: f64 = 1000.0;

pub(super) fn step(world: &mut WorldCore) {
    let t0 = TickClock::start();

    // Fresh visit markers and wake/sleep counters for this pass
    world.grid.reset_updated();
    world.active.begin_frame();

    let width = world.grid.width();
    let height = world.grid.height();
    let go_right = (world.frame & 1) == 0;

    let mut processed: u32 = 0;

    // Walk the fall axis far side first, so a cell vacates its slot before
    // the cells stacked on it are visited. The other axis alternates
    // direction per frame to avoid a scan-order bias.
    if world.gravity_x == 0 && world.gravity_y >= 0 {
        for y in (0..height).rev() {
            processed += scan_row(world, y, width, go_right);
        }
    } else if world.gravity_x == 0 {
        for y in 0..height {
            processed += scan_row(world, y, width, go_right);
        }
    } else if world.gravity_x > 0 {
        for x in (0..width).rev() {
            processed += scan_col(world, x, height, go_right);
        }
    } else {
        for x in 0..width {
            processed += scan_col(world, x, height, go_right);
        }
    }

    world.frame += 1;
    world.window_ticks += 1;

    // Diagnostics snapshot
    world.frame_stats.step_ms = t0.elapsed_ms();
    world.frame_stats.cells_processed = processed;
    world.frame_stats.cell_count = world.cell_count;
    world.frame_stats.active_cells = world.active.active_cell_count() as u32;
    world.frame_stats.cells_woken = world.active.woke_this_frame;
    world.frame_stats.cells_slept = world.active.slept_this_frame;

    let elapsed = world.window_clock.elapsed_ms();
    if elapsed >= RATE_WINDOW_MS {
        world.frame_stats.observed_tps = world.window_ticks as f64 * 1000.0 / elapsed;
        world.window_ticks = 0;
        world.window_clock = TickClock::start();
    }
}

fn scan_row(world: &mut WorldCore, y: u32, width: u32, go_right: bool) -> u32 {
    let mut n = 0;
    if go_right {
        for x in 0..width {
            if world.update_cell(x, y) {
                n += 1;
            }
        }
    } else {
        for x in (0..width).rev() {
            if world.update_cell(x, y) {
                n += 1;
            }
        }
    }
    n
}

fn scan_col(world: &mut WorldCore, x: u32, height: u32, go_right: bool) -> u32 {
    let mut n = 0;
    if go_right {
        for y in 0..height {
            if world.update_cell(x, y) {
                n += 1;
            }
        }
    } else {
        for y in (0..height).rev() {
            if world.update_cell(x, y) {
                n += 1;
            }
        }
    }
    n
}
