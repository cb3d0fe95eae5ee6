use std::sync::Arc;

use crate::domain::content::KindRegistry;
use crate::domain::kinds::K_GRASS;
use crate::spatial::active::ActiveGrid;
use crate::spatial::grid::Grid;
use crate::systems::behaviors::BehaviorRegistry;

use super::frame_stats::{FrameStats, TickClock};
use super::random;
use super::WorldCore;

pub(super) fn create_world_core(width: u32, height: u32) -> WorldCore {
    WorldCore {
        kinds: Arc::new(KindRegistry::from_generated()),
        grid: Grid::new(width, height),
        active: ActiveGrid::new(width, height),
        behaviors: BehaviorRegistry::new(),

        gravity_x: 0,
        gravity_y: 1,
        brush_kind: K_GRASS,
        brush_radius: 0,
        erase_mode: false,
        debug_draw_inactive: false,

        cell_count: 0,
        frame: 0,
        rng_state: random::DEFAULT_SEED,
        running: true,

        frame_stats: FrameStats::default(),
        window_clock: TickClock::start(),
        window_ticks: 0,

        render_cells: Vec::with_capacity(1024),
    }
}
