//! Frame diagnostics - step timing and the observed tick rate
//!
//! The observed rate is recomputed over a sliding one-second window and is
//! display-only; nothing in the simulation depends on the host frame rate.

use wasm_bindgen::prelude::*;

/// Wall clock: Date.now on wasm, Instant natively
#[derive(Clone, Copy)]
pub(crate) struct TickClock {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl TickClock {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            TickClock {
                start_ms: js_sys::Date::now(),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            TickClock {
                start: std::time::Instant::now(),
            }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }
}

/// Snapshot of the last step, cheap enough to copy out every frame
#[wasm_bindgen]
#[derive(Clone)]
pub struct FrameStats {
    pub(super) step_ms: f64,
    pub(super) observed_tps: f64,
    pub(super) cells_processed: u32,
    pub(super) cell_count: u32,
    pub(super) active_cells: u32,
    pub(super) cells_woken: u32,
    pub(super) cells_slept: u32,
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    /// Observed simulation ticks per second (diagnostic display only)
    #[wasm_bindgen(getter)]
    pub fn observed_tps(&self) -> f64 {
        self.observed_tps
    }

    #[wasm_bindgen(getter)]
    pub fn cells_processed(&self) -> u32 {
        self.cells_processed
    }

    #[wasm_bindgen(getter)]
    pub fn cell_count(&self) -> u32 {
        self.cell_count
    }

    #[wasm_bindgen(getter)]
    pub fn active_cells(&self) -> u32 {
        self.active_cells
    }

    #[wasm_bindgen(getter)]
    pub fn cells_woken(&self) -> u32 {
        self.cells_woken
    }

    #[wasm_bindgen(getter)]
    pub fn cells_slept(&self) -> u32 {
        self.cells_slept
    }
}

impl FrameStats {
    /// Forget the observed rate (pause/resume restarts the window)
    pub(super) fn reset_rate(&mut self) {
        self.observed_tps = 0.0;
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            step_ms: 0.0,
            observed_tps: 0.0,
            cells_processed: 0,
            cell_count: 0,
            active_cells: 0,
            cells_woken: 0,
            cells_slept: 0,
        }
    }
}
