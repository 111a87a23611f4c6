//! The free-floating polygon entity.
//!
//! Every body in the world is a regular convex polygon.  Its side count is
//! fixed at creation and doubles as its mass, so a triangle weighs 3 and an
//! octagon weighs 8.

use crate::geometry::polygon_vertices;
use bevy::prelude::*;

/// A regular convex polygon drifting through the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Side count in `[3, 8]`; also the body's mass.
    pub sides: u32,
    /// Centre in world coordinates, kept in `[0, width) × [0, height)` by integration.
    pub position: Vec2,
    /// World units per tick.
    pub velocity: Vec2,
    /// Degrees.  Fixed after creation; collisions never change it.
    pub rotation: f32,
}

impl Polygon {
    pub fn new(sides: u32, position: Vec2, velocity: Vec2, rotation: f32) -> Self {
        Self {
            sides,
            position,
            velocity,
            rotation,
        }
    }

    /// Mass used by the impulse solver.
    pub fn mass(&self) -> f32 {
        self.sides as f32
    }

    /// Geometric size proxy; equal to the side count, not the drawn radius.
    pub fn size(&self) -> u32 {
        self.sides
    }

    /// World-space vertices in drawing order.
    pub fn vertices(&self, base_edge_length: f32) -> Vec<Vec2> {
        polygon_vertices(self.position, self.sides, self.rotation, base_edge_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_equals_side_count() {
        let p = Polygon::new(5, Vec2::ZERO, Vec2::ZERO, 0.0);
        assert_eq!(p.mass(), 5.0);
        assert_eq!(p.size(), 5);
    }

    #[test]
    fn vertices_are_centred_on_position() {
        let p = Polygon::new(6, Vec2::new(300.0, 120.0), Vec2::ZERO, 12.0);
        let verts = p.vertices(20.0);
        let centroid = verts.iter().copied().sum::<Vec2>() / verts.len() as f32;
        assert!(
            centroid.distance(p.position) < 1e-3,
            "centroid {centroid:?} should match position {:?}",
            p.position
        );
    }
}
