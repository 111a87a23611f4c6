//! Centralised world and physics constants.
//!
//! Every tuneable value lives here so it can be found and reasoned about in
//! one place.  [`crate::config::WorldConfig::default`] mirrors these values;
//! `assets/world.toml` can override any of them at startup.

// ── World Bounds ──────────────────────────────────────────────────────────────

/// Width of the toroidal world (world units).  Also the window width.
pub const WORLD_WIDTH: f32 = 800.0;

/// Height of the toroidal world (world units).  Also the window height.
pub const WORLD_HEIGHT: f32 = 600.0;

/// Number of polygons placed by `create_world`.
pub const BODY_COUNT: usize = 20;

// ── Polygon Geometry ──────────────────────────────────────────────────────────

/// Base length used by the vertex scale formula `base / sin(π / sides)`.
///
/// The formula carries a 2× factor, so the actual drawn edge length is
/// `2 × BASE_EDGE_LENGTH` for every side count.
pub const BASE_EDGE_LENGTH: f32 = 20.0;

/// Fewest sides a spawned polygon may have.  Doubles as the minimum mass.
pub const MIN_SIDES: u32 = 3;

/// Most sides a spawned polygon may have.
pub const MAX_SIDES: u32 = 8;

/// Spawn velocity components are drawn from `[-VELOCITY_RANGE, VELOCITY_RANGE]`.
pub const VELOCITY_RANGE: f32 = 1.0;

// ── Physics: Collision ────────────────────────────────────────────────────────

/// Restitution coefficient for polygon–polygon contacts.
/// 0.0 = perfectly inelastic; 1.0 = perfectly elastic.
pub const RESTITUTION: f32 = 0.9;

/// Fixed separation applied to each body of a resolved pair, along the normal.
/// Not proportional to penetration depth.
pub const CORRECTION_DISTANCE: f32 = 0.5;

/// Extra separation applied once when a pair still overlaps after the
/// correction step.
pub const NUDGE_DISTANCE: f32 = 0.1;

// ── Placement ─────────────────────────────────────────────────────────────────

/// Emit a placement warning every time this many candidate positions have
/// been rejected for a single polygon.
pub const PLACEMENT_WARN_INTERVAL: u32 = 10_000;

// ── Timing ────────────────────────────────────────────────────────────────────

/// Simulation ticks per second.  Velocities are in world units per tick.
pub const TICK_RATE_HZ: f64 = 60.0;

// ── Ship ──────────────────────────────────────────────────────────────────────

/// Ship size unit: nose sits at `2 × SHIP_SIZE`, rear corners at `SHIP_SIZE / 2`.
pub const SHIP_SIZE: f32 = 10.0;

/// Degrees of heading change per tick while a rotate key is held.
pub const SHIP_ROTATION_SPEED: f32 = 4.0;

/// Velocity added per tick along the heading while thrusting.
pub const SHIP_ACCELERATION: f32 = 0.12;

/// Per-tick velocity multiplier applied to the ship (never to polygons).
pub const SHIP_FRICTION: f32 = 0.99;

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Font size of the stats overlay text.
pub const STATS_FONT_SIZE: f32 = 16.0;
