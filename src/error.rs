//! Error types for the simulation core
//!
//! The tick path never fails. Errors only come from building entities or
//! arenas with bad values, and from exporting snapshots.

use thiserror::Error;

/// Errors raised by validating constructors and snapshot export
#[derive(Error, Debug)]
pub enum SimError {
    /// Radius must be finite and greater than zero
    #[error("invalid {entity} radius: {radius}")]
    InvalidRadius { entity: &'static str, radius: f32 },

    /// Speed must be finite and non-negative
    #[error("invalid {entity} speed: {speed}")]
    InvalidSpeed { entity: &'static str, speed: f32 },

    /// Enemies start with at least one hit point
    #[error("enemy health must be at least 1")]
    ZeroHealth,

    /// Position or velocity contains NaN or infinity
    #[error("non-finite {entity} {field}")]
    NonFinite {
        entity: &'static str,
        field: &'static str,
    },

    /// Arena must be finite and leave room for the player
    #[error("arena {width}x{height} is too small (needs more than {min} per side)")]
    ArenaTooSmall { width: f32, height: f32, min: f32 },

    /// Obstacle corners are inverted or non-finite
    #[error("invalid obstacle bounds")]
    InvalidObstacle,

    /// Snapshot could not be serialized
    #[error("snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
