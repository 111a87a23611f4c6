//! Motion integration with toroidal wrap.
//!
//! Polygons move by their velocity once per tick and re-enter from the
//! opposite edge when they leave the world.  No friction is applied; the ship
//! applies its own damping in [`crate::ship`].

use crate::polygon::Polygon;
use bevy::prelude::*;

/// Floor-modulo wrap of `value` into `[0, bound)`.
///
/// `rem_euclid` keeps negative inputs non-negative, but a tiny negative value
/// such as `-1e-8` rounds up to `bound` itself in `f32`; that case maps to 0.
pub fn wrap_coordinate(value: f32, bound: f32) -> f32 {
    let wrapped = value.rem_euclid(bound);
    if wrapped >= bound {
        0.0
    } else {
        wrapped
    }
}

/// Wrap both components of `position` into the world rectangle.
pub fn wrap_position(position: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        wrap_coordinate(position.x, width),
        wrap_coordinate(position.y, height),
    )
}

/// Advance one tick: `position += velocity`, then wrap.
pub fn integrate(polygon: &mut Polygon, width: f32, height: f32) {
    polygon.position = wrap_position(polygon.position + polygon.velocity, width, height);
}
