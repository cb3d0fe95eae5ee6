//! World - the falling-sand simulation core
//!
//! `WorldCore` owns all mutable simulation state: the grid index, the
//! active-set scheduler, the gravity vector, brush settings and the seeded
//! random source. It is driven one `step` at a time by the embedding shell;
//! the `facade` module mirrors it 1:1 behind wasm-bindgen for the browser.

use std::sync::Arc;

use crate::domain::content::KindRegistry;
use crate::domain::kinds::KindId;
use crate::spatial::active::ActiveGrid;
use crate::spatial::grid::Grid;
use crate::systems::behaviors::BehaviorRegistry;

#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/update.rs"]
mod update;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
mod facade;

pub use facade::World;
pub use frame_stats::FrameStats;
pub use render_extract::RenderCell;

pub use commands::MAX_BRUSH_RADIUS;

use frame_stats::TickClock;

/// The simulation world
pub struct WorldCore {
    kinds: Arc<KindRegistry>,
    grid: Grid,
    active: ActiveGrid,
    behaviors: BehaviorRegistry,

    // Settings
    gravity_x: i32,
    gravity_y: i32,
    brush_kind: KindId,
    brush_radius: u32,
    erase_mode: bool,
    debug_draw_inactive: bool,

    // State
    cell_count: u32,
    frame: u64,
    rng_state: u32,
    running: bool,

    // Diagnostics
    frame_stats: FrameStats,
    window_clock: TickClock,
    window_ticks: u32,

    // Render extraction
    render_cells: Vec<RenderCell>,
}

impl WorldCore {
    /// Create a new world with given dimensions (in cells)
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width, height)
    }

    /// Replace the kind table from a JSON bundle; clears the grid
    pub fn load_kind_bundle_json(&mut self, json: &str) -> Result<(), String> {
        let registry = KindRegistry::from_bundle_json(json)?;
        self.kinds = Arc::new(registry);
        self.clear();
        Ok(())
    }

    pub fn kind_manifest_json(&self) -> String {
        self.kinds.manifest_json()
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn cell_count(&self) -> u32 {
        self.cell_count
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn gravity(&self) -> (i32, i32) {
        (self.gravity_x, self.gravity_y)
    }

    /// Kind occupying (x, y); empty out of bounds
    pub fn kind_at(&self, x: i32, y: i32) -> KindId {
        self.grid.kind_at(x, y)
    }

    /// Scheduler countdown of the cell at (x, y)
    pub fn countdown_at(&self, x: u32, y: u32) -> u16 {
        self.active.countdown_at(x, y)
    }

    pub fn reactivation_window(&self) -> u16 {
        self.active.window()
    }

    pub fn active_cell_count(&self) -> usize {
        self.active.active_cell_count()
    }

    /// Point the gravity vector at one of the four cardinal directions.
    /// Returns false (and changes nothing) for any other vector.
    pub fn set_gravity(&mut self, gx: i32, gy: i32) -> bool {
        settings::set_gravity(self, gx, gy)
    }

    /// Reseed the random source (tie-breaks, fire drift)
    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }

    pub fn set_brush_kind(&mut self, kind: KindId) -> bool {
        settings::set_brush_kind(self, kind)
    }

    pub fn brush_kind(&self) -> KindId {
        self.brush_kind
    }

    pub fn set_brush_radius(&mut self, radius: u32) {
        settings::set_brush_radius(self, radius);
    }

    pub fn brush_radius(&self) -> u32 {
        self.brush_radius
    }

    pub fn set_erase_mode(&mut self, erase: bool) {
        self.erase_mode = erase;
    }

    pub fn erase_mode(&self) -> bool {
        self.erase_mode
    }

    /// Debug view: dormant fallers are extracted in a marker color
    pub fn set_debug_draw_inactive(&mut self, enabled: bool) {
        self.debug_draw_inactive = enabled;
    }

    /// Paint a single cell, honoring the overwrite rules
    pub fn paint_cell(&mut self, x: u32, y: u32, kind: KindId) -> bool {
        commands::paint_cell(self, x, y, kind)
    }

    /// Erase a single cell and wake its neighbors
    pub fn erase_cell(&mut self, x: u32, y: u32) -> bool {
        commands::erase_cell(self, x, y)
    }

    /// Apply the brush (paint or erase per `erase_mode`) around the cursor
    pub fn apply_brush(&mut self, cx: i32, cy: i32) {
        commands::apply_brush(self, cx, cy)
    }

    pub fn paint_with_brush(&mut self, cx: i32, cy: i32, kind: KindId) {
        commands::paint_with_brush(self, cx, cy, kind)
    }

    pub fn erase_with_brush(&mut self, cx: i32, cy: i32) {
        commands::erase_with_brush(self, cx, cy)
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Stop stepping; cell state is preserved exactly
    pub fn pause(&mut self) {
        settings::pause(self);
    }

    /// Resume stepping; resets the tick-rate accounting only
    pub fn resume(&mut self) {
        settings::resume(self);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the simulation by one frame
    pub fn step(&mut self) {
        step::step(self);
    }

    /// One host animation frame: step if running, then extract the live
    /// cells for drawing
    pub fn tick(&mut self) -> &[RenderCell] {
        if self.running {
            self.step();
        }
        render_extract::collect_render_cells(self);
        &self.render_cells
    }

    /// Last tick's diagnostics snapshot
    pub fn frame_stats(&self) -> FrameStats {
        self.frame_stats.clone()
    }

    // === Raw buffers for the JS shell ===

    pub fn render_cells_ptr(&self) -> *const RenderCell {
        self.render_cells.as_ptr()
    }

    pub fn render_cells_len(&self) -> usize {
        self.render_cells.len()
    }

    pub fn kinds_ptr(&self) -> *const KindId {
        self.grid.kinds_ptr()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.grid.colors_ptr()
    }

    pub fn grid_len(&self) -> usize {
        self.grid.size()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

// Private simulation methods
impl WorldCore {
    /// Update one cell if it is scheduled; returns true if it was simulated
    fn update_cell(&mut self, x: u32, y: u32) -> bool {
        update::update_cell(self, x, y)
    }
}
