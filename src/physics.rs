//! Minimal kinematics used around collision handling.
//!
//! A frame runs: gravity, collision resolution, movement, friction.

use crate::api::Collidable;

/// `vy += gravity * dt` (+y is down).
pub fn apply_gravity<C: Collidable>(bodies: &mut [C], dt: f64) {
    for c in bodies {
        let body = c.body_mut();
        body.velocity.y += body.gravity * dt;
    }
}

/// Remove `friction` (per axis fraction) of each body's velocity.
pub fn apply_friction<C: Collidable>(bodies: &mut [C]) {
    for c in bodies {
        let body = c.body_mut();
        body.velocity *= 1.0 - body.friction;
    }
}

/// `position += velocity * dt`.
pub fn apply_movement<C: Collidable>(bodies: &mut [C], dt: f64) {
    for c in bodies {
        let body = c.body_mut();
        body.position += body.velocity * dt;
    }
}
