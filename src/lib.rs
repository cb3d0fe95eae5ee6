//! Tilefall Engine - falling-sand cellular simulation core
//!
//! Typed cells on a fixed grid, pulled toward a rotatable cardinal gravity
//! vector. The hot loop only touches cells the active-set scheduler still
//! considers worth simulating; everything else sleeps until a neighbor
//! disturbs it.
//!
//! Layout:
//! - domain/     - kind table and registry
//! - spatial/    - grid index, scheduler, neighbor resolution
//! - systems/    - per-kind update behaviors
//! - simulation/ - world orchestration and the wasm facade

pub mod domain;
pub mod simulation;
pub mod spatial;
pub mod systems;

pub use domain::content::KindRegistry;
pub use domain::kinds;
pub use simulation::{FrameStats, RenderCell, World, WorldCore, MAX_BRUSH_RADIUS};
pub use spatial::grid::OccupiedError;

use wasm_bindgen::prelude::*;

/// Suggested cell edge length in pixels for the shell's draw pass
pub const CELL_SIZE_PX: u32 = 10;

/// Default world dimensions in cells (a 1300x700 canvas at 10px cells)
pub const DEFAULT_COLS: u32 = 130;
pub const DEFAULT_ROWS: u32 = 70;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Tilefall engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Export kind constants for JS
#[wasm_bindgen]
pub fn k_empty() -> u8 {
    kinds::K_EMPTY
}
#[wasm_bindgen]
pub fn k_grass() -> u8 {
    kinds::K_GRASS
}
#[wasm_bindgen]
pub fn k_sand() -> u8 {
    kinds::K_SAND
}
#[wasm_bindgen]
pub fn k_stone() -> u8 {
    kinds::K_STONE
}
#[wasm_bindgen]
pub fn k_block() -> u8 {
    kinds::K_BLOCK
}
#[wasm_bindgen]
pub fn k_fire() -> u8 {
    kinds::K_FIRE
}
#[wasm_bindgen]
pub fn k_dynamite() -> u8 {
    kinds::K_DYNAMITE
}
