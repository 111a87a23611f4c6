//! Randomized, non-overlapping polygon placement.
//!
//! A new polygon draws its side count, velocity and rotation once, then
//! resamples only its position until no vertex of it lies inside any existing
//! polygon and no existing vertex lies inside it.  This is the same vertex
//! containment test the collision detector uses, not an exact intersection.
//!
//! By default placement retries without limit, which can spin forever in a
//! saturated world.  Set `max_placement_attempts` to give up with
//! [`SimError::PlacementExhausted`] instead.  Either way a warning is logged
//! every `placement_warn_interval` rejected positions.

use crate::collision::check_collision;
use crate::config::WorldConfig;
use crate::error::{SimError, SimResult};
use crate::motion::wrap_position;
use crate::polygon::Polygon;
use bevy::prelude::*;
use rand::Rng;

/// A freshly placed polygon and the number of positions sampled to find it.
#[derive(Debug, Clone)]
pub struct Placement {
    pub polygon: Polygon,
    /// Always ≥ 1; the accepted position counts as an attempt.
    pub attempts: u32,
}

/// Uniform position in `[0, width) × [0, height)`.
fn random_position<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Vec2 {
    Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height))
}

/// Draw side count, velocity and rotation for a polygon centred on `position`.
fn random_polygon_at<R: Rng + ?Sized>(
    rng: &mut R,
    position: Vec2,
    config: &WorldConfig,
) -> Polygon {
    let sides = rng.gen_range(config.min_sides..=config.max_sides);
    let velocity = Vec2::new(
        rng.gen_range(-config.velocity_range..=config.velocity_range),
        rng.gen_range(-config.velocity_range..=config.velocity_range),
    );
    let rotation = rng.gen_range(0.0..360.0);
    Polygon::new(sides, position, velocity, rotation)
}

/// True when `candidate` overlaps any polygon in `existing`.
pub fn overlaps_any(candidate: &Polygon, existing: &[Polygon], base_edge_length: f32) -> bool {
    existing
        .iter()
        .any(|other| check_collision(candidate, other, base_edge_length))
}

/// Produce one polygon that does not overlap anything in `existing`.
///
/// An invalid `config` is rejected before any sampling.
pub fn place_polygon<R: Rng + ?Sized>(
    rng: &mut R,
    existing: &[Polygon],
    config: &WorldConfig,
) -> SimResult<Placement> {
    config.validate()?;
    let position = random_position(rng, config.width, config.height);
    let mut polygon = random_polygon_at(rng, position, config);
    let sides = polygon.sides;

    let mut attempts: u32 = 1;
    while overlaps_any(&polygon, existing, config.base_edge_length) {
        if config
            .max_placement_attempts
            .is_some_and(|cap| attempts >= cap)
        {
            return Err(SimError::PlacementExhausted {
                attempts,
                placed: existing.len(),
            });
        }
        if config.placement_warn_interval > 0 && attempts % config.placement_warn_interval == 0 {
            warn!(
                "placement of a {}-gon rejected {} positions so far ({} polygons placed)",
                sides,
                attempts,
                existing.len()
            );
        }

        polygon.position = random_position(rng, config.width, config.height);
        attempts = attempts.saturating_add(1);
    }

    Ok(Placement { polygon, attempts })
}

/// Single-shot placement at a caller-chosen position (e.g. the cursor).
///
/// Returns `None` instead of resampling when the spot is occupied or
/// `config` is invalid.  The position is wrapped into the world first.
pub fn place_polygon_at<R: Rng + ?Sized>(
    rng: &mut R,
    position: Vec2,
    existing: &[Polygon],
    config: &WorldConfig,
) -> Option<Polygon> {
    config.validate().ok()?;
    let position = wrap_position(position, config.width, config.height);
    let polygon = random_polygon_at(rng, position, config);
    (!overlaps_any(&polygon, existing, config.base_edge_length)).then_some(polygon)
}
