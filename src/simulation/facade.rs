use wasm_bindgen::prelude::*;

use crate::domain::kinds::KindId;

use super::frame_stats::FrameStats;
use super::render_extract::RenderCell;
use super::WorldCore;

/// The wasm-facing world. A thin 1:1 wrapper over `WorldCore`; the JS shell
/// decodes input, calls these methods, and draws from the render buffer.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions (in cells)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.core.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.core.height()
    }

    #[wasm_bindgen(getter)]
    pub fn cell_count(&self) -> u32 {
        self.core.cell_count()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    /// Replace the kind table from a JSON bundle; clears the grid
    pub fn load_kind_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_kind_bundle_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn kind_manifest_json(&self) -> String {
        self.core.kind_manifest_json()
    }

    /// Point gravity at a cardinal unit vector; rejects anything else
    pub fn set_gravity(&mut self, gx: i32, gy: i32) -> bool {
        self.core.set_gravity(gx, gy)
    }

    /// Reseed the random source (tie-breaks, fire drift)
    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    pub fn set_brush_kind(&mut self, kind: KindId) -> bool {
        self.core.set_brush_kind(kind)
    }

    #[wasm_bindgen(getter)]
    pub fn brush_kind(&self) -> KindId {
        self.core.brush_kind()
    }

    pub fn set_brush_radius(&mut self, radius: u32) {
        self.core.set_brush_radius(radius);
    }

    #[wasm_bindgen(getter)]
    pub fn brush_radius(&self) -> u32 {
        self.core.brush_radius()
    }

    pub fn set_erase_mode(&mut self, erase: bool) {
        self.core.set_erase_mode(erase);
    }

    #[wasm_bindgen(getter)]
    pub fn erase_mode(&self) -> bool {
        self.core.erase_mode()
    }

    /// Debug view: dormant cells are extracted in a marker color
    pub fn set_debug_draw_inactive(&mut self, enabled: bool) {
        self.core.set_debug_draw_inactive(enabled);
    }

    /// Paint a single cell, honoring the overwrite rules
    pub fn paint_cell(&mut self, x: u32, y: u32, kind: KindId) -> bool {
        self.core.paint_cell(x, y, kind)
    }

    /// Erase a single cell and wake its neighbors
    pub fn erase_cell(&mut self, x: u32, y: u32) -> bool {
        self.core.erase_cell(x, y)
    }

    /// Apply the brush (paint or erase per the stored mode) at the cursor
    pub fn apply_brush(&mut self, cx: i32, cy: i32) {
        self.core.apply_brush(cx, cy);
    }

    /// Paint the brush square with the selected kind
    pub fn paint_with_brush(&mut self, cx: i32, cy: i32) {
        let kind = self.core.brush_kind();
        self.core.paint_with_brush(cx, cy, kind);
    }

    /// Erase the brush square and wake everything upstream of it
    pub fn erase_with_brush(&mut self, cx: i32, cy: i32) {
        self.core.erase_with_brush(cx, cy);
    }

    /// Clear all cells
    pub fn reset_world(&mut self) {
        self.core.clear();
    }

    /// Stop stepping; cell state is preserved exactly
    pub fn pause(&mut self) {
        self.core.pause();
    }

    /// Resume stepping; resets only the tick-rate accounting
    pub fn resume(&mut self) {
        self.core.resume();
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.core.is_running()
    }

    /// One animation frame: step if running, rebuild the render buffer,
    /// return how many cells to draw
    pub fn tick(&mut self) -> usize {
        self.core.tick().len()
    }

    /// Advance exactly one simulation frame, even while paused
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Last step's diagnostics snapshot
    pub fn frame_stats(&self) -> FrameStats {
        self.core.frame_stats()
    }

    // === Raw buffers for the JS draw pass ===

    /// Pointer to the packed render cells (x, y, kind, color as u32 each)
    pub fn render_cells_ptr(&self) -> *const u32 {
        self.core.render_cells_ptr() as *const u32
    }

    pub fn render_cells_len(&self) -> usize {
        self.core.render_cells_len()
    }

    pub fn render_cells_byte_len(&self) -> usize {
        self.core.render_cells_len() * std::mem::size_of::<RenderCell>()
    }

    /// Pointer to the full kind grid (row-major, one byte per cell)
    pub fn kinds_ptr(&self) -> *const KindId {
        self.core.kinds_ptr()
    }

    /// Pointer to the full color grid (row-major, ABGR u32 per cell)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn grid_len(&self) -> usize {
        self.core.grid_len()
    }
}
