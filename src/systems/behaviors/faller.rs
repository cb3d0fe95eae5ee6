//! FallerBehavior - the gravity cell state machine
//!
//! A supported cell settles, scanning up to `slip` cells sideways along the
//! floor row for a lower resting spot and sliding one cell per tick toward
//! the nearest one. An unsupported cell falls straight along gravity.

use super::{rand_sign, Behavior, UpdateContext};
use crate::domain::kinds::K_FIRE;
use crate::spatial::neighbors::{from_frame, left_dir, slot_at, to_frame, Slot};

pub struct FallerBehavior;

impl FallerBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Distance (1..=slip) to the nearest empty floor-row slot in the given
    /// lateral direction, or None if the scan finds nothing open. Out of
    /// bounds reads as blocked.
    fn slope_distance(
        &self,
        ctx: &UpdateContext,
        dir: (i32, i32),
        slip: i32,
    ) -> Option<i32> {
        let xi = ctx.x as i32;
        let yi = ctx.y as i32;
        for k in 1..=slip {
            let px = xi + dir.0 * k + ctx.gravity_x;
            let py = yi + dir.1 * k + ctx.gravity_y;
            if slot_at(ctx.grid, px, py).is_empty() {
                return Some(k);
            }
        }
        None
    }
}

impl Behavior for FallerBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let kind = ctx.grid.kind_at(ctx.x as i32, ctx.y as i32);
        let Some(props) = ctx.kinds.props(kind).copied() else {
            return;
        };
        let (gx, gy) = (ctx.gravity_x, ctx.gravity_y);

        let mut hood = ctx.neighborhood();

        // Fire in the floor slot: a flammable cell is pushed back out of it
        // (positions swap), anything else snuffs the flame and drops into
        // the gap.
        if hood.floor == Slot::Occupied(K_FIRE) {
            let (fx, fy) = (hood.floor_pos.0 as u32, hood.floor_pos.1 as u32);
            if props.flammable {
                ctx.grid.swap(ctx.x, ctx.y, fx, fy);
                ctx.grid.set_updated(ctx.x, ctx.y, true);
                ctx.grid.set_updated(fx, fy, true);
                ctx.active.clear_at(ctx.x, ctx.y);
                ctx.x = fx;
                ctx.y = fy;
                ctx.active.wake(fx, fy);
                ctx.wake_neighbors(&hood);
                return;
            }
            ctx.remove_cell(fx, fy);
            hood = ctx.neighborhood();
        }

        match hood.floor {
            Slot::Empty => {
                // Free fall: one straight step along gravity. The lateral
                // intent is stored for the settle phase; fall itself does
                // not drift.
                let lateral = rand_sign(ctx.rng) * props.slip;
                let (vx, vy) = from_frame(1, lateral, gx, gy);
                ctx.grid.set_velocity(ctx.x, ctx.y, vx, vy);

                let (tx, ty) = (hood.floor_pos.0 as u32, hood.floor_pos.1 as u32);
                ctx.move_self(tx, ty);
                ctx.active.wake(tx, ty);
                ctx.wake_neighbors(&hood);
            }
            Slot::OutOfBounds | Slot::Occupied(_) => {
                let (vx0, vy0) = ctx.grid.velocity(ctx.x, ctx.y);
                let (_, mut lateral) = to_frame(vx0, vy0, gx, gy);

                let ldir = left_dir(gx, gy);
                let rdir = (-ldir.0, -ldir.1);
                let dist_left = self.slope_distance(ctx, ldir, props.slip);
                let dist_right = self.slope_distance(ctx, rdir, props.slip);

                let dir = match (dist_left, dist_right) {
                    (None, None) => 0,
                    (Some(_), None) => -1,
                    (None, Some(_)) => 1,
                    (Some(a), Some(b)) => {
                        if a < b {
                            -1
                        } else if b < a {
                            1
                        } else {
                            rand_sign(ctx.rng)
                        }
                    }
                };

                let (side, side_pos) = if dir < 0 {
                    (hood.left, hood.left_pos)
                } else {
                    (hood.right, hood.right_pos)
                };

                if dir != 0 && side.is_empty() {
                    // Slide one cell toward the opening
                    lateral = dir * props.slip;
                    let (vx, vy) = from_frame(0, lateral, gx, gy);
                    ctx.grid.set_velocity(ctx.x, ctx.y, vx, vy);

                    let (sx, sy) = (side_pos.0 as u32, side_pos.1 as u32);
                    ctx.move_self(sx, sy);
                    ctx.active.wake(sx, sy);
                    ctx.wake_neighbors(&hood);

                    // Diagonal descent when the slot below the new position
                    // is open
                    let below = (sx as i32 + gx, sy as i32 + gy);
                    if slot_at(ctx.grid, below.0, below.1).is_empty() {
                        let (bx, by) = (below.0 as u32, below.1 as u32);
                        ctx.move_self(bx, by);
                        ctx.active.wake(bx, by);
                    }
                } else {
                    // Resting. Zero velocity into a blocked side, otherwise
                    // damp leftover lateral intent toward zero.
                    if dir != 0 {
                        lateral = 0;
                    } else if lateral != 0 {
                        let into = if lateral < 0 { hood.left } else { hood.right };
                        if into.is_empty() {
                            lateral -= lateral.signum();
                        } else {
                            lateral = 0;
                        }
                    }
                    let (vx, vy) = from_frame(0, lateral, gx, gy);
                    ctx.grid.set_velocity(ctx.x, ctx.y, vx, vy);
                    ctx.active.tick_down(ctx.x, ctx.y);
                }
            }
        }
    }
}
