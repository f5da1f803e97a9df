//! Horde Siege - a top-down arcade survival game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, run state)
//! - `hud`: Read-only projections for presentation (HUD text, overlay, snapshot)
//! - `platform`: Browser boundary around the simulation
//! - `error`: Validation and serialization errors

pub mod error;
pub mod hud;
pub mod platform;
pub mod sim;

pub use error::SimError;
pub use hud::{HudText, Overlay, Snapshot, dispatch_overlay};

use glam::Vec2;

/// Game configuration constants
///
/// All rates are per second so they hold at any tick rate.
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest step a single tick will integrate
    pub const MAX_TICK_DT: f32 = 0.05;
    /// Largest wall-clock frame delta fed to the accumulator
    pub const MAX_FRAME_DT: f32 = 0.05;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena used when the presentation layer does not supply one
    pub const DEFAULT_ARENA_SIZE: Vec2 = Vec2::new(1280.0, 720.0);

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 16.0;
    pub const PLAYER_SPEED: f32 = 252.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 4.0;
    pub const PROJECTILE_SPEED: f32 = 540.0;
    /// Distance past the arena edge before a projectile is discarded
    pub const PROJECTILE_MARGIN: f32 = 20.0;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 18.0;
    pub const ENEMY_BASE_SPEED: f32 = 54.0;
    /// Upper bound (exclusive) of the random speed bonus
    pub const ENEMY_SPEED_JITTER: f32 = 42.0;
    pub const ENEMY_SPEED_PER_WAVE: f32 = 7.2;
    /// One extra hit point every this many waves
    pub const ENEMY_HEALTH_WAVE_STEP: u32 = 3;
    /// How far outside the arena edge enemies appear
    pub const SPAWN_EDGE_OFFSET: f32 = 30.0;

    /// Shamble: speed factor = GAIT_BASE + GAIT_AMPLITUDE * sin(phase)
    pub const GAIT_BASE: f32 = 0.82;
    pub const GAIT_AMPLITUDE: f32 = 0.18;
    /// Gait phase advance (radians per second)
    pub const GAIT_RATE: f32 = 6.0;

    /// Damage per touching enemy per contact burst
    pub const CONTACT_DAMAGE: f32 = 1.5;
    /// Minimum seconds between contact bursts
    pub const CONTACT_INTERVAL: f32 = 0.1;
    /// Health removed from an enemy per projectile hit
    pub const PROJECTILE_DAMAGE: u32 = 1;

    /// Score awarded per kill
    pub const KILL_SCORE: u64 = 10;
    /// Score needed per wave
    pub const WAVE_SCORE_THRESHOLD: u64 = 120;

    /// Spawn cadence (seconds)
    pub const SPAWN_BASE_DELAY: f32 = 70.0 / 60.0;
    pub const SPAWN_DELAY_DECAY: f32 = 4.0 / 60.0;
    pub const SPAWN_MIN_DELAY: f32 = 0.3;

    /// Population cap: min(MAX_ENEMIES_CEILING, BASE + PER_WAVE * wave)
    pub const MAX_ENEMIES_BASE: usize = 10;
    pub const MAX_ENEMIES_PER_WAVE: usize = 2;
    pub const MAX_ENEMIES_CEILING: usize = 48;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Unit vector along `v`, or zero when `v` has no length
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Unit vector pointing from `from` toward `to` (zero if they coincide)
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    normalize(to - from)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
