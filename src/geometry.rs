//! Polygon geometry helpers: regular-polygon vertex generation and the
//! even–odd containment test.  Pure functions, no state.

use bevy::prelude::*;

/// Vertices of a regular polygon centred on `position`, in world space.
///
/// The radius is `base_edge_length / sin(π / sides)`, which gives every side
/// count the same edge length (`2 × base_edge_length`).  Vertex `i` sits at
/// `(360 / sides)·i + rotation_degrees` degrees from the centre.
pub fn polygon_vertices(
    position: Vec2,
    sides: u32,
    rotation_degrees: f32,
    base_edge_length: f32,
) -> Vec<Vec2> {
    let step = 360.0 / sides as f32;
    let radius = base_edge_length / (step / 2.0).to_radians().sin();
    (0..sides)
        .map(|i| {
            let angle = (step * i as f32 + rotation_degrees).to_radians();
            position + Vec2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Even–odd ray-casting containment test over an implicitly closed ring.
///
/// An edge toggles the verdict when the point's `y` is in `(min_y, max_y]`
/// and the point is left of the edge's x-extent and on or left of the
/// crossing.  The half-open y-interval keeps a shared vertex from being
/// counted twice, and makes the max-x and max-y boundaries of an
/// axis-aligned shape count as inside.  Horizontal edges never pass the
/// y-interval, so the x-intercept division is always well defined.
pub fn point_in_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut p1 = vertices[vertices.len() - 1];
    for &p2 in vertices {
        if point.y > p1.y.min(p2.y) && point.y <= p1.y.max(p2.y) && point.x <= p1.x.max(p2.x) {
            let crosses = if p1.x == p2.x {
                true
            } else {
                let x_intersect = (point.y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
                point.x <= x_intersect
            };
            if crosses {
                inside = !inside;
            }
        }
        p1 = p2;
    }
    inside
}
