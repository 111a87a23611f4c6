//! Runtime world configuration loaded from `assets/world.toml`.
//!
//! [`WorldConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  Before the app starts, [`load_world_config`] reads
//! `assets/world.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about:
//!
//! ```toml
//! body_count = 30
//! restitution = 1.0
//! max_placement_attempts = 50000
//! seed = 7
//! ```
//!
//! Keep `src/constants.rs` in sync: it remains the authoritative default
//! source used by `WorldConfig::default()`.

use crate::constants::*;
use crate::error::{
    validate_non_negative, validate_positive, validate_unit_interval, SimError, SimResult,
};
use bevy::prelude::*;
use serde::Deserialize;

/// Path read by [`load_world_config`], relative to the working directory.
pub const CONFIG_PATH: &str = "assets/world.toml";

/// Runtime-tunable world, collision and ship configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    // ── World Bounds ─────────────────────────────────────────────────────────
    pub width: f32,
    pub height: f32,
    pub body_count: usize,

    // ── Polygon Geometry ──────────────────────────────────────────────────────
    pub base_edge_length: f32,
    pub min_sides: u32,
    pub max_sides: u32,
    pub velocity_range: f32,

    // ── Physics: Collision ────────────────────────────────────────────────────
    pub restitution: f32,
    pub correction_distance: f32,
    pub nudge_distance: f32,

    // ── Placement ─────────────────────────────────────────────────────────────
    /// `None` retries forever, `Some(n)` gives up after `n` rejected positions.
    pub max_placement_attempts: Option<u32>,
    pub placement_warn_interval: u32,
    /// Seed for the world RNG; `None` uses the thread RNG.
    pub seed: Option<u64>,

    // ── Timing ────────────────────────────────────────────────────────────────
    pub tick_rate_hz: f64,

    // ── Ship ──────────────────────────────────────────────────────────────────
    pub ship_size: f32,
    pub ship_rotation_speed: f32,
    pub ship_acceleration: f32,
    pub ship_friction: f32,

    // ── Rendering ─────────────────────────────────────────────────────────────
    pub stats_font_size: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            // World Bounds
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            body_count: BODY_COUNT,
            // Polygon Geometry
            base_edge_length: BASE_EDGE_LENGTH,
            min_sides: MIN_SIDES,
            max_sides: MAX_SIDES,
            velocity_range: VELOCITY_RANGE,
            // Collision
            restitution: RESTITUTION,
            correction_distance: CORRECTION_DISTANCE,
            nudge_distance: NUDGE_DISTANCE,
            // Placement
            max_placement_attempts: None,
            placement_warn_interval: PLACEMENT_WARN_INTERVAL,
            seed: None,
            // Timing
            tick_rate_hz: TICK_RATE_HZ,
            // Ship
            ship_size: SHIP_SIZE,
            ship_rotation_speed: SHIP_ROTATION_SPEED,
            ship_acceleration: SHIP_ACCELERATION,
            ship_friction: SHIP_FRICTION,
            // Rendering
            stats_font_size: STATS_FONT_SIZE,
        }
    }
}

impl WorldConfig {
    /// Reject values that would break the simulation's invariants
    /// (non-positive bounds, zero mass, NaN impulses).
    pub fn validate(&self) -> SimResult<()> {
        validate_positive("width", self.width)?;
        validate_positive("height", self.height)?;
        validate_positive("base_edge_length", self.base_edge_length)?;
        validate_unit_interval("restitution", self.restitution)?;
        validate_non_negative("correction_distance", self.correction_distance)?;
        validate_non_negative("nudge_distance", self.nudge_distance)?;
        validate_non_negative("velocity_range", self.velocity_range)?;
        validate_positive("tick_rate_hz", self.tick_rate_hz as f32)?;
        validate_unit_interval("ship_friction", self.ship_friction)?;

        // Mass is the side count, so the lower bound keeps every mass ≥ 3.
        if !(MIN_SIDES..=MAX_SIDES).contains(&self.min_sides) {
            return Err(SimError::UnsafeConstant {
                name: "min_sides",
                value: self.min_sides as f32,
                safe_range: "[3, 8]",
            });
        }
        if !(self.min_sides..=MAX_SIDES).contains(&self.max_sides) {
            return Err(SimError::UnsafeConstant {
                name: "max_sides",
                value: self.max_sides as f32,
                safe_range: "[min_sides, 8]",
            });
        }
        Ok(())
    }

    /// Parse a TOML document over the defaults, then validate the result.
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        let config: WorldConfig = toml::from_str(contents).map_err(|e| e.to_string())?;
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

/// Read `path` and overlay it on the defaults.
///
/// Missing keys retain their compiled defaults.  Parse or validation errors
/// are printed to stderr but do not abort the simulation.  A missing file is
/// not an error.  Runs before the `App` is built so the window can be sized
/// from the loaded bounds.
pub fn load_world_config(path: &str) -> WorldConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match WorldConfig::from_toml_str(&contents) {
            Ok(loaded) => {
                println!("✓ Loaded world config from {path}");
                loaded
            }
            Err(e) => {
                eprintln!("⚠ Failed to load {path}: {e}; using defaults");
                WorldConfig::default()
            }
        },
        Err(_) => {
            println!("ℹ No {path} found; using compiled defaults");
            WorldConfig::default()
        }
    }
}
