//! The polygon world: owns every body and drives one simulation tick.
//!
//! ## Tick order
//!
//! 1. Integrate every polygon (move + wrap) in index order.
//! 2. Visit every unordered pair `(i, j)`, `i < j`, in index order; if the
//!    pair collides *with the state left by earlier pairs*, resolve it.
//!
//! Step 2 mutates as it goes, so a body pushed by pair `(0, 1)` is tested at
//! its new position by pair `(1, 2)`.  Positional correction can leave a
//! body fractionally outside the bounds until the next integration wraps it.

use crate::collision::{check_collision, resolve_collision, Resolution};
use crate::config::WorldConfig;
use crate::error::{SimError, SimResult};
use crate::placement::{place_polygon, place_polygon_at};
use crate::polygon::Polygon;
use bevy::prelude::*;
use rand::Rng;

/// Per-tick counters; informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub pairs_tested: usize,
    pub collisions: usize,
    pub resolved: usize,
    pub separating: usize,
    pub degenerate: usize,
    pub nudged: usize,
}

/// Bounded toroidal world of drifting polygons.
#[derive(Resource, Debug, Clone)]
pub struct PolygonWorld {
    width: f32,
    height: f32,
    polygons: Vec<Polygon>,
    config: WorldConfig,
    ticks: u64,
}

/// Build a world of `config.body_count` non-overlapping polygons.
///
/// Fails with [`SimError::UnsafeConstant`] when `config` does not validate,
/// or when `config.max_placement_attempts` is set and a polygon could not be
/// placed within it.
pub fn create_world<R: Rng + ?Sized>(
    config: &WorldConfig,
    rng: &mut R,
) -> SimResult<PolygonWorld> {
    config.validate()?;
    let mut world = PolygonWorld::from_polygons(config, Vec::with_capacity(config.body_count));
    let mut total_attempts: u64 = 0;
    for _ in 0..config.body_count {
        let placement = place_polygon(rng, &world.polygons, config)?;
        total_attempts += u64::from(placement.attempts);
        world.polygons.push(placement.polygon);
    }
    info!(
        "created {}×{} world with {} polygons ({} placement samples)",
        world.width,
        world.height,
        world.polygons.len(),
        total_attempts
    );
    Ok(world)
}

impl PolygonWorld {
    /// Wrap an existing set of polygons.  No overlap check is performed,
    /// which lets tests and scenarios stage collisions directly.
    pub fn from_polygons(config: &WorldConfig, polygons: Vec<Polygon>) -> Self {
        Self {
            width: config.width,
            height: config.height,
            polygons,
            config: config.clone(),
            ticks: 0,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Ticks advanced since creation.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// World-space vertices of polygon `index`, for drawing.
    pub fn vertices(&self, index: usize) -> SimResult<Vec<Vec2>> {
        self.polygons
            .get(index)
            .map(|p| p.vertices(self.config.base_edge_length))
            .ok_or(SimError::InvalidPolygonIndex {
                index,
                len: self.polygons.len(),
            })
    }

    /// Place one more polygon at runtime with the same no-overlap rule as
    /// creation.  Returns its index.
    pub fn spawn_polygon<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SimResult<usize> {
        let placement = place_polygon(rng, &self.polygons, &self.config)?;
        self.polygons.push(placement.polygon);
        Ok(self.polygons.len() - 1)
    }

    /// Place one polygon centred on `position` if that spot is free.
    /// Never retries; returns the new index or `None` when occupied.
    pub fn spawn_polygon_at<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        position: Vec2,
    ) -> Option<usize> {
        let polygon = place_polygon_at(rng, position, &self.polygons, &self.config)?;
        self.polygons.push(polygon);
        Some(self.polygons.len() - 1)
    }

    /// Advance one frame: integrate all, then detect and resolve all pairs.
    pub fn tick(&mut self) -> TickReport {
        for polygon in &mut self.polygons {
            crate::motion::integrate(polygon, self.width, self.height);
        }

        let mut report = TickReport::default();
        let base = self.config.base_edge_length;
        for i in 0..self.polygons.len() {
            let (head, tail) = self.polygons.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                report.pairs_tested += 1;
                if !check_collision(a, b, base) {
                    continue;
                }
                report.collisions += 1;
                match resolve_collision(a, b, &self.config) {
                    Resolution::Resolved { nudged } => {
                        report.resolved += 1;
                        if nudged {
                            report.nudged += 1;
                        }
                    }
                    Resolution::Separating => report.separating += 1,
                    Resolution::Degenerate => report.degenerate += 1,
                }
            }
        }

        self.ticks += 1;
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon(sides: u32, x: f32, y: f32, vx: f32, vy: f32) -> Polygon {
        Polygon::new(sides, Vec2::new(x, y), Vec2::new(vx, vy), 0.0)
    }

    #[test]
    fn tick_integrates_before_resolving() {
        let cfg = WorldConfig::default();
        // 50 apart: clear of each other now, overlapping after one step each.
        let mut world = PolygonWorld::from_polygons(
            &cfg,
            vec![
                polygon(3, 100.0, 100.0, 10.0, 0.0),
                polygon(3, 150.0, 100.0, -10.0, 0.0),
            ],
        );
        assert!(!check_collision(&world.polygons()[0], &world.polygons()[1], 20.0));

        let report = world.tick();

        assert_eq!(report.collisions, 1);
        assert_eq!(report.resolved, 1);
        assert!(world.polygons()[0].velocity.x < 0.0);
        assert!(world.polygons()[1].velocity.x > 0.0);
        assert_eq!(world.ticks(), 1);
    }

    #[test]
    fn every_unordered_pair_is_tested_once() {
        let cfg = WorldConfig::default();
        let mut world = PolygonWorld::from_polygons(
            &cfg,
            vec![
                polygon(3, 100.0, 100.0, 0.0, 0.0),
                polygon(3, 400.0, 400.0, 0.0, 0.0),
                polygon(3, 700.0, 100.0, 0.0, 0.0),
            ],
        );
        let report = world.tick();
        assert_eq!(report.pairs_tested, 3);
        assert_eq!(report.collisions, 0);
    }

    #[test]
    fn vertices_rejects_out_of_range_index() {
        let world = PolygonWorld::from_polygons(
            &WorldConfig::default(),
            vec![polygon(4, 1.0, 1.0, 0.0, 0.0)],
        );
        assert_eq!(world.vertices(0).unwrap().len(), 4);
        assert_eq!(
            world.vertices(3),
            Err(SimError::InvalidPolygonIndex { index: 3, len: 1 })
        );
    }
}
