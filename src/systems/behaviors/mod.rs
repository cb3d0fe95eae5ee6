//! Behaviors - per-kind update rules
//!
//! Each kind class gets one behavior: fallers settle/slide/fall, decaying
//! cells (fire) spread and burn out. Blocks have no behavior at all.

mod blaze;
mod faller;

pub use blaze::BlazeBehavior;
pub use faller::FallerBehavior;

use crate::domain::content::KindRegistry;
use crate::domain::kinds::{KindClass, KindId};
use crate::spatial::active::ActiveGrid;
use crate::spatial::grid::Grid;
use crate::spatial::neighbors::{resolve, Neighborhood, Slot};

/// Update context passed to behaviors for one cell of one tick
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub active: &'a mut ActiveGrid,
    pub kinds: &'a KindRegistry,
    pub world_cell_count: &'a mut u32,
    pub x: u32,
    pub y: u32,
    pub frame: u64,
    pub gravity_x: i32,
    pub gravity_y: i32,
    pub rng: &'a mut u32,
}

impl<'a> UpdateContext<'a> {
    #[inline]
    pub fn neighborhood(&self) -> Neighborhood {
        resolve(self.grid, self.x, self.y, self.gravity_x, self.gravity_y)
    }

    /// Reset the countdown of the faller at `pos`, if there is one
    #[inline]
    pub fn wake_slot(&mut self, slot: Slot, pos: (i32, i32)) {
        if let Slot::Occupied(kind) = slot {
            if self.kinds.class(kind) == KindClass::Faller {
                self.active.wake(pos.0 as u32, pos.1 as u32);
            }
        }
    }

    /// Wake every faller among the resolved neighbors
    pub fn wake_neighbors(&mut self, hood: &Neighborhood) {
        for (slot, pos) in hood.slots() {
            self.wake_slot(slot, pos);
        }
    }

    /// Place a new cell, keeping the count and scheduler in sync. The new
    /// cell is marked handled so it is not re-processed later this pass.
    pub fn spawn_cell(&mut self, x: u32, y: u32, kind: KindId, life: u16) {
        let seed = ((x * 7 + y * 13 + self.frame as u32) & 31) as u8;
        let Some(color) = self.kinds.color_with_variation(kind, seed) else {
            return;
        };
        if self.grid.put(x, y, kind, color, life).is_err() {
            return;
        }
        self.grid.set_updated(x, y, true);
        if self.kinds.class(kind) == KindClass::Faller {
            self.active.wake(x, y);
        }
        *self.world_cell_count += 1;
    }

    /// Remove the cell at (x, y), keeping the count and scheduler in sync
    pub fn remove_cell(&mut self, x: u32, y: u32) {
        if self.grid.remove(x, y).is_none() {
            return;
        }
        self.active.clear_at(x, y);
        *self.world_cell_count = self.world_cell_count.saturating_sub(1);
    }

    /// Move this cell to an empty destination slot
    pub fn move_self(&mut self, to_x: u32, to_y: u32) {
        self.grid.swap(self.x, self.y, to_x, to_y);
        self.grid.set_updated(to_x, to_y, true);
        self.active.clear_at(self.x, self.y);
        self.x = to_x;
        self.y = to_y;
    }
}

/// Behavior trait - one implementation per kind class
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// Xorshift32 random number generator - the world's seedable random source
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform coin flip: -1 or 1
#[inline]
pub fn rand_sign(state: &mut u32) -> i32 {
    if xorshift32(state) & 1 == 0 {
        1
    } else {
        -1
    }
}

/// Behavior registry - dispatch by kind class
pub struct BehaviorRegistry {
    faller: FallerBehavior,
    blaze: BlazeBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            faller: FallerBehavior::new(),
            blaze: BlazeBehavior::new(),
        }
    }

    /// Dispatch update to the appropriate behavior for the cell's class
    pub fn update(&self, class: KindClass, ctx: &mut UpdateContext) {
        match class {
            KindClass::Faller => self.faller.update(ctx),
            KindClass::Decay => self.blaze.update(ctx),
            // Static cells and empty slots have no update rule
            _ => {}
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
