//! Neighbor resolution relative to the gravity vector
//!
//! All axis math lives here. "floor" is the slot a cell falls toward,
//! "above" the opposite, and the lateral pair uses one fixed handedness:
//! left = (-gy, gx), right = (gy, -gx). In screen coordinates (y grows
//! downward) with gravity pointing down, `left` is screen-left.

use crate::domain::kinds::{KindId, K_EMPTY};
use crate::spatial::grid::Grid;

/// What occupies one neighbor slot. Out of bounds is a sentinel, not an
/// error - it reads as "cannot move there".
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Slot {
    OutOfBounds,
    Empty,
    Occupied(KindId),
}

impl Slot {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Slot::Empty
    }

    #[inline]
    pub fn kind(self) -> Option<KindId> {
        match self {
            Slot::Occupied(k) => Some(k),
            _ => None,
        }
    }
}

/// The four gravity-relative neighbor slots of one cell, with the
/// coordinates they resolved at
#[derive(Clone, Copy)]
pub struct Neighborhood {
    pub floor: Slot,
    pub above: Slot,
    pub left: Slot,
    pub right: Slot,
    pub floor_pos: (i32, i32),
    pub above_pos: (i32, i32),
    pub left_pos: (i32, i32),
    pub right_pos: (i32, i32),
}

impl Neighborhood {
    /// Slot/position pairs, for callers that wake every neighbor
    pub fn slots(&self) -> [(Slot, (i32, i32)); 4] {
        [
            (self.floor, self.floor_pos),
            (self.above, self.above_pos),
            (self.left, self.left_pos),
            (self.right, self.right_pos),
        ]
    }
}

/// True for the four cardinal unit vectors
#[inline]
pub fn is_cardinal(gx: i32, gy: i32) -> bool {
    (gx.abs() == 1 && gy == 0) || (gx == 0 && gy.abs() == 1)
}

#[inline]
pub fn left_dir(gx: i32, gy: i32) -> (i32, i32) {
    (-gy, gx)
}

#[inline]
pub fn right_dir(gx: i32, gy: i32) -> (i32, i32) {
    (gy, -gx)
}

/// Resolve a single coordinate to a slot
#[inline]
pub fn slot_at(grid: &Grid, x: i32, y: i32) -> Slot {
    if !grid.in_bounds(x, y) {
        return Slot::OutOfBounds;
    }
    let kind = grid.kinds[grid.index(x as u32, y as u32)];
    if kind == K_EMPTY {
        Slot::Empty
    } else {
        Slot::Occupied(kind)
    }
}

/// Resolve all four gravity-relative neighbors of (x, y)
pub fn resolve(grid: &Grid, x: u32, y: u32, gx: i32, gy: i32) -> Neighborhood {
    let xi = x as i32;
    let yi = y as i32;
    let (lx, ly) = left_dir(gx, gy);

    let floor_pos = (xi + gx, yi + gy);
    let above_pos = (xi - gx, yi - gy);
    let left_pos = (xi + lx, yi + ly);
    let right_pos = (xi - lx, yi - ly);

    Neighborhood {
        floor: slot_at(grid, floor_pos.0, floor_pos.1),
        above: slot_at(grid, above_pos.0, above_pos.1),
        left: slot_at(grid, left_pos.0, left_pos.1),
        right: slot_at(grid, right_pos.0, right_pos.1),
        floor_pos,
        above_pos,
        left_pos,
        right_pos,
    }
}

/// World-axis velocity -> (fall, lateral) components in the gravity frame
#[inline]
pub fn to_frame(vx: i32, vy: i32, gx: i32, gy: i32) -> (i32, i32) {
    let (rx, ry) = right_dir(gx, gy);
    (vx * gx + vy * gy, vx * rx + vy * ry)
}

/// (fall, lateral) components in the gravity frame -> world-axis velocity
#[inline]
pub fn from_frame(fall: i32, lateral: i32, gx: i32, gy: i32) -> (i32, i32) {
    let (rx, ry) = right_dir(gx, gy);
    (fall * gx + lateral * rx, fall * gy + lateral * ry)
}
