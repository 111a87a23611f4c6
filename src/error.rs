//! Simulation-specific error types.
//!
//! Library entry points propagate failures through [`SimError`] rather than
//! panicking, so the Bevy front end can log and degrade instead of crashing.
//!
//! ## Usage
//!
//! ```rust
//! use polydrift::error::{SimError, SimResult};
//!
//! fn check_restitution(value: f32) -> SimResult<()> {
//!     if !(0.0..=1.0).contains(&value) {
//!         return Err(SimError::UnsafeConstant {
//!             name: "restitution",
//!             value,
//!             safe_range: "[0.0, 1.0]",
//!         });
//!     }
//!     Ok(())
//! }
//! ```
use std::fmt;

/// Top-level error enum for the polygon world.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Placement rejected every candidate position within the caller's retry cap.
    /// Only reachable when `max_placement_attempts` is set.
    PlacementExhausted {
        /// Candidate positions tried for the polygon that could not be placed.
        attempts: u32,
        /// Polygons already in the world when placement gave up.
        placed: usize,
    },

    /// Configuration value is outside its safe operating range.
    UnsafeConstant {
        /// Name of the configuration key (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },

    /// A polygon index was out of range for the world.
    InvalidPolygonIndex { index: usize, len: usize },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::PlacementExhausted { attempts, placed } => write!(
                f,
                "could not place polygon after {} attempts ({} already placed); \
                 world is too crowded",
                attempts, placed
            ),
            SimError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "constant '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
            SimError::InvalidPolygonIndex { index, len } => {
                write!(f, "polygon index {} out of range (world has {})", index, len)
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is strictly positive and finite.
pub fn validate_positive(name: &'static str, value: f32) -> SimResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name,
            value,
            safe_range: "(0.0, ∞)",
        })
    }
}

/// Returns an error unless `value` is finite and non-negative.
pub fn validate_non_negative(name: &'static str, value: f32) -> SimResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name,
            value,
            safe_range: "[0.0, ∞)",
        })
    }
}

/// Returns an error unless `value` lies in `[0.0, 1.0]`.
pub fn validate_unit_interval(name: &'static str, value: f32) -> SimResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name,
            value,
            safe_range: "[0.0, 1.0]",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_and_nan() {
        assert!(validate_positive("width", 0.0).is_err());
        assert!(validate_positive("width", f32::NAN).is_err());
        assert!(validate_positive("width", 1.0).is_ok());
    }

    #[test]
    fn unit_interval_bounds_are_inclusive() {
        assert!(validate_unit_interval("restitution", 0.0).is_ok());
        assert!(validate_unit_interval("restitution", 1.0).is_ok());
        assert!(validate_unit_interval("restitution", 1.01).is_err());
    }

    #[test]
    fn display_mentions_attempt_count() {
        let msg = SimError::PlacementExhausted {
            attempts: 42,
            placed: 7,
        }
        .to_string();
        assert!(msg.contains("42"), "message was: {msg}");
        assert!(msg.contains('7'), "message was: {msg}");
    }
}
