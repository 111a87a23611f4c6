//! Containment-based collision detection and impulse collision response.
//!
//! ## Detection
//!
//! Two polygons collide when any vertex of one lies inside the other
//! ([`point_in_polygon`]).  This misses overlaps where edges cross without a
//! contained vertex; that is accepted.  Every unordered pair is tested each
//! tick with no broad phase, which is fine for a few dozen bodies.
//!
//! ## Response
//!
//! [`resolve_collision`] pushes the pair apart along the centre-to-centre
//! normal with a restitution impulse weighted by mass (= side count), then
//! separates the positions by a fixed distance.  A second, smaller nudge is
//! applied once if the pair still overlaps.
//!
//! Pairs are resolved one at a time against live state, so when three or
//! more bodies overlap at once the outcome depends on pair order.  The world
//! always visits pairs in index order, which keeps a run deterministic.

use crate::config::WorldConfig;
use crate::geometry::point_in_polygon;
use crate::polygon::Polygon;
use bevy::prelude::*;

/// Outcome of a single [`resolve_collision`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Centres coincide (or are non-finite); no normal exists, nothing changed.
    Degenerate,
    /// The bodies are already moving apart along the normal; nothing changed.
    Separating,
    /// Impulse and positional correction were applied.  `nudged` is true when
    /// the pair still overlapped and received the extra separation.
    Resolved { nudged: bool },
}

/// True when any vertex of `a` lies inside `b` or any vertex of `b` lies inside `a`.
pub fn check_collision(a: &Polygon, b: &Polygon, base_edge_length: f32) -> bool {
    let verts_a = a.vertices(base_edge_length);
    let verts_b = b.vertices(base_edge_length);
    verts_a.iter().any(|&v| point_in_polygon(v, &verts_b))
        || verts_b.iter().any(|&v| point_in_polygon(v, &verts_a))
}

/// Indices `(i, j)` with `i < j` of every colliding pair, in index order.
pub fn colliding_pairs(polygons: &[Polygon], base_edge_length: f32) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..polygons.len() {
        for j in (i + 1)..polygons.len() {
            if check_collision(&polygons[i], &polygons[j], base_edge_length) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Resolve one colliding pair in place.
///
/// The caller is expected to have seen `check_collision(a, b)` return true;
/// the resolver itself only re-checks overlap after the positional correction.
pub fn resolve_collision(a: &mut Polygon, b: &mut Polygon, config: &WorldConfig) -> Resolution {
    let Some(normal) = (b.position - a.position).try_normalize() else {
        debug!(
            "skipping collision with coincident centres at {:?}",
            a.position
        );
        return Resolution::Degenerate;
    };

    let relative_velocity = b.velocity - a.velocity;
    let vel_along_normal = relative_velocity.dot(normal);
    if vel_along_normal > 0.0 {
        return Resolution::Separating;
    }

    let inv_mass_a = 1.0 / a.mass();
    let inv_mass_b = 1.0 / b.mass();
    let impulse = -(1.0 + config.restitution) * vel_along_normal / (inv_mass_a + inv_mass_b);

    a.velocity -= normal * (impulse * inv_mass_a);
    b.velocity += normal * (impulse * inv_mass_b);

    separate(a, b, normal, config.correction_distance);

    let nudged = check_collision(a, b, config.base_edge_length);
    if nudged {
        separate(a, b, normal, config.nudge_distance);
    }

    Resolution::Resolved { nudged }
}

/// Move `a` backwards and `b` forwards along `normal` by `distance` each.
fn separate(a: &mut Polygon, b: &mut Polygon, normal: Vec2, distance: f32) {
    a.position -= normal * distance;
    b.position += normal * distance;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(x: f32, y: f32, vx: f32, vy: f32) -> Polygon {
        Polygon::new(3, Vec2::new(x, y), Vec2::new(vx, vy), 0.0)
    }

    // ── check_collision ───────────────────────────────────────────────────────

    #[test]
    fn overlapping_triangles_collide() {
        let a = triangle(100.0, 100.0, 0.0, 0.0);
        let b = triangle(105.0, 100.0, 0.0, 0.0);
        assert!(check_collision(&a, &b, 20.0));
        assert!(check_collision(&b, &a, 20.0), "detection must be symmetric");
    }

    #[test]
    fn distant_polygons_do_not_collide() {
        let a = Polygon::new(8, Vec2::new(100.0, 100.0), Vec2::ZERO, 0.0);
        let b = Polygon::new(8, Vec2::new(400.0, 100.0), Vec2::ZERO, 0.0);
        assert!(!check_collision(&a, &b, 20.0));
    }

    #[test]
    fn colliding_pairs_lists_each_pair_once_in_order() {
        let polys = vec![
            triangle(100.0, 100.0, 0.0, 0.0),
            triangle(500.0, 500.0, 0.0, 0.0),
            triangle(105.0, 100.0, 0.0, 0.0),
        ];
        assert_eq!(colliding_pairs(&polys, 20.0), vec![(0, 2)]);
    }

    // ── resolve_collision ─────────────────────────────────────────────────────

    #[test]
    fn separating_pair_is_left_untouched() {
        let cfg = WorldConfig::default();
        let mut a = triangle(100.0, 100.0, -1.0, 0.0);
        let mut b = triangle(105.0, 100.0, 1.0, 0.0);
        let (before_a, before_b) = (a.clone(), b.clone());

        assert_eq!(resolve_collision(&mut a, &mut b, &cfg), Resolution::Separating);
        assert_eq!(a, before_a);
        assert_eq!(b, before_b);
    }

    #[test]
    fn coincident_centres_are_skipped_without_nan() {
        let cfg = WorldConfig::default();
        let mut a = triangle(100.0, 100.0, 1.0, 0.0);
        let mut b = triangle(100.0, 100.0, -1.0, 0.0);

        assert_eq!(resolve_collision(&mut a, &mut b, &cfg), Resolution::Degenerate);
        assert!(a.velocity.is_finite() && b.velocity.is_finite());
        assert_eq!(a.velocity, Vec2::new(1.0, 0.0));
        assert_eq!(b.velocity, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn head_on_equal_masses_keep_ninety_percent_of_closing_speed() {
        let cfg = WorldConfig::default();
        let mut a = triangle(100.0, 100.0, 1.0, 0.0);
        let mut b = triangle(105.0, 100.0, -1.0, 0.0);
        let closing = (a.velocity - b.velocity).x;

        resolve_collision(&mut a, &mut b, &cfg);

        let separating = (b.velocity - a.velocity).x;
        assert!(
            (separating - 0.9 * closing).abs() < 1e-5,
            "separating speed {separating}, expected {}",
            0.9 * closing
        );
        assert!((a.velocity.x + 0.9).abs() < 1e-5, "a.vx = {}", a.velocity.x);
        assert!((b.velocity.x - 0.9).abs() < 1e-5, "b.vx = {}", b.velocity.x);
    }

    #[test]
    fn two_triangle_scenario_reverses_and_nudges() {
        let cfg = WorldConfig::default();
        let mut a = triangle(100.0, 100.0, 1.0, 0.0);
        let mut b = triangle(105.0, 100.0, -1.0, 0.0);

        let outcome = resolve_collision(&mut a, &mut b, &cfg);

        assert!(a.velocity.x < 0.0, "a should now move left, vx = {}", a.velocity.x);
        assert!(b.velocity.x > 0.0, "b should now move right, vx = {}", b.velocity.x);
        // Centres 5 apart with a ~23 unit radius still overlap after 0.5 each way.
        assert_eq!(outcome, Resolution::Resolved { nudged: true });
        assert!((a.position.x - 99.4).abs() < 1e-4, "a.x = {}", a.position.x);
        assert!((b.position.x - 105.6).abs() < 1e-4, "b.x = {}", b.position.x);
        assert_eq!(a.position.y, 100.0);
        assert_eq!(b.position.y, 100.0);
    }

    #[test]
    fn unequal_masses_conserve_momentum() {
        let cfg = WorldConfig::default();
        let mut a = triangle(100.0, 100.0, 2.0, 0.5);
        let mut b = Polygon::new(8, Vec2::new(110.0, 104.0), Vec2::new(-1.0, 0.0), 45.0);
        let before = a.velocity * a.mass() + b.velocity * b.mass();

        resolve_collision(&mut a, &mut b, &cfg);

        let after = a.velocity * a.mass() + b.velocity * b.mass();
        assert!(
            before.distance(after) < 1e-4,
            "momentum changed from {before:?} to {after:?}"
        );
    }

    #[test]
    fn restitution_is_read_from_config() {
        let cfg = WorldConfig {
            restitution: 1.0,
            ..Default::default()
        };
        let mut a = triangle(100.0, 100.0, 1.0, 0.0);
        let mut b = triangle(105.0, 100.0, -1.0, 0.0);

        resolve_collision(&mut a, &mut b, &cfg);

        assert!((a.velocity.x + 1.0).abs() < 1e-5);
        assert!((b.velocity.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn no_nudge_when_correction_clears_the_overlap() {
        let cfg = WorldConfig {
            correction_distance: 50.0,
            ..Default::default()
        };
        let mut a = triangle(100.0, 100.0, 1.0, 0.0);
        let mut b = triangle(105.0, 100.0, -1.0, 0.0);

        let outcome = resolve_collision(&mut a, &mut b, &cfg);

        assert_eq!(outcome, Resolution::Resolved { nudged: false });
        assert!((b.position.x - a.position.x - 105.0).abs() < 1e-3);
    }
}
