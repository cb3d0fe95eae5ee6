//! BlazeBehavior - fire: drift away from gravity, ignite, burn out
//!
//! Fire does not fall. Each tick it picks a biased random displacement,
//! spreads or ignites there, and ages by one. Propagated flames get one
//! tick less life per hop, so a blaze has finite reach.

use super::{xorshift32, Behavior, UpdateContext};
use crate::domain::kinds::K_FIRE;
use crate::spatial::neighbors::{from_frame, slot_at, Slot};

pub struct BlazeBehavior;

impl BlazeBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for BlazeBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let life = ctx.grid.life_at(ctx.x, ctx.y);
        if life == 0 {
            return;
        }

        // Fire disturbs its surroundings: nearby fallers resume simulating
        let hood = ctx.neighborhood();
        ctx.wake_neighbors(&hood);

        let (gx, gy) = (ctx.gravity_x, ctx.gravity_y);

        // Lateral axis: uniform three-way draw. Anti-gravity axis: drift
        // away or hold, never toward gravity.
        let lateral = (xorshift32(ctx.rng) % 3) as i32 - 1;
        let away = ((xorshift32(ctx.rng) % 6) as i32 - 1).clamp(0, 1);
        let (dx, dy) = from_frame(-away, lateral, gx, gy);

        let xi = ctx.x as i32;
        let yi = ctx.y as i32;
        let tx = (xi + dx).clamp(0, ctx.grid.width() as i32 - 1);
        let ty = (yi + dy).clamp(0, ctx.grid.height() as i32 - 1);

        // A zero or clamped-away displacement spreads nothing this tick
        if (tx, ty) != (xi, yi) {
            match slot_at(ctx.grid, tx, ty) {
                Slot::Occupied(target) => {
                    let (flammable, extinguishes) = ctx
                        .kinds
                        .props(target)
                        .map(|p| (p.flammable, p.extinguishes))
                        .unwrap_or((false, false));

                    if extinguishes {
                        let (x, y) = (ctx.x, ctx.y);
                        ctx.remove_cell(x, y);
                        return;
                    }
                    if flammable {
                        ctx.remove_cell(tx as u32, ty as u32);
                        if target != K_FIRE {
                            // Ignition: a fresh flame with its own lifespan,
                            // not this one's remainder
                            let span = ctx
                                .kinds
                                .props(K_FIRE)
                                .map(|p| p.life_span)
                                .unwrap_or(0);
                            ctx.spawn_cell(tx as u32, ty as u32, K_FIRE, span);
                        }
                    }
                    // Inert neighbors are unaffected
                }
                Slot::Empty => {
                    ctx.spawn_cell(tx as u32, ty as u32, K_FIRE, (life - 1).max(1));
                }
                Slot::OutOfBounds => {}
            }
        }

        let life = ctx.grid.life_at(ctx.x, ctx.y) - 1;
        if life == 0 {
            let (x, y) = (ctx.x, ctx.y);
            ctx.remove_cell(x, y);
        } else {
            ctx.grid.set_life(ctx.x, ctx.y, life);
        }
    }
}
