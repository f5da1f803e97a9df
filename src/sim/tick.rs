//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;

use super::state::{GameEvent, GamePhase, GameState, Projectile};
use super::{collision, lifecycle, motion, progression, spawner};
use crate::consts::*;

/// Input intents for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Combined movement axes; normalized by the integrator
    pub move_dir: Vec2,
    /// Aim point in arena coordinates
    pub aim: Option<Vec2>,
    /// Fire one projectile (edge-triggered)
    pub fire: bool,
    /// Start a new run after game over (edge-triggered)
    pub reset: bool,
    /// Leave the Ready screen (edge-triggered)
    pub start: bool,
    /// Pause toggle (edge-triggered)
    pub pause: bool,
}

impl TickInput {
    /// Clear one-shot intents after a tick has consumed them
    pub fn clear_edges(&mut self) {
        self.fire = false;
        self.reset = false;
        self.start = false;
        self.pause = false;
    }
}

/// Fire one projectile from the player along its facing.
///
/// Nothing is fired before the player has a facing.
pub fn fire(state: &mut GameState) -> Option<u32> {
    let player = &state.player;
    if player.facing == Vec2::ZERO {
        return None;
    }

    let projectile = Projectile::new(player.pos, player.facing * PROJECTILE_SPEED).ok()?;
    let id = state.add_projectile(projectile);
    state.events.push(GameEvent::Fired { projectile_id: id });
    Some(id)
}

/// Advance the game state by one timestep.
///
/// `dt` is clamped to `[0, MAX_TICK_DT]`. Outside `Playing` only lifecycle
/// intents are handled; nothing moves, collides or spawns.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    // Lifecycle intents first
    if input.reset && lifecycle::restart(state) {
        return;
    }
    if input.start {
        lifecycle::start(state);
    }
    if input.pause {
        lifecycle::toggle_pause(state);
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    let dt = if dt.is_finite() { dt.clamp(0.0, MAX_TICK_DT) } else { 0.0 };
    state.time_ticks += 1;

    // Player
    motion::move_player(state, input.move_dir, dt);
    motion::aim_player(&mut state.player, input.aim);
    if input.fire {
        fire(state);
    }

    // World
    motion::advance_projectiles(state, dt);
    motion::advance_enemies(state, dt);

    // Contact before hits so a kill this tick still counts its touch
    collision::resolve_contact(state, dt);
    collision::resolve_hits(state);

    progression::update_wave(state);
    spawner::update_spawning(state, dt);
    lifecycle::check_game_over(state);
}
