//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Clamped timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order, ids never reused)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod lifecycle;
pub mod motion;
pub mod progression;
pub mod spawner;
pub mod state;
pub mod tick;

pub use clock::FixedStepClock;
pub use collision::{circles_overlap, resolve_contact, resolve_hits};
pub use progression::wave_for_score;
pub use spawner::{SpawnPlacement, spawn_delay, spawn_enemy};
pub use state::{Arena, Enemy, GameEvent, GamePhase, GameState, Obstacle, Player, Projectile};
pub use tick::{TickInput, fire, tick};
