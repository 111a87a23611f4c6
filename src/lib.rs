//! Polygon drift simulation library
//!
//! Regular convex polygons float through a toroidal 2D world, wrap across its
//! edges and bounce off each other with impulse-based collision response.
//! The physics core (`geometry` through `world`) is plain Rust over Bevy's
//! math types; `simulation` wires it into a Bevy app.

pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod motion;
pub mod placement;
pub mod polygon;
pub mod ship;
pub mod simulation;
pub mod world;
