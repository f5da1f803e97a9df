//! Enemy spawning: placement, wave-scaled stats and cadence

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::state::{Arena, Enemy, GameEvent, GameState};
use crate::consts::*;
use crate::polar_to_cartesian;

/// Where new enemies appear
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum SpawnPlacement {
    /// Just outside a random arena edge
    #[default]
    Edges,
    /// On a circle of fixed radius around the player
    Ring { distance: f32 },
}

/// Seconds between spawns at `wave`, never below the floor
pub fn spawn_delay(wave: u32) -> f32 {
    (SPAWN_BASE_DELAY - wave as f32 * SPAWN_DELAY_DECAY).max(SPAWN_MIN_DELAY)
}

/// Live enemy cap at `wave`
pub fn max_enemies(wave: u32) -> usize {
    MAX_ENEMIES_BASE
        .saturating_add(MAX_ENEMIES_PER_WAVE.saturating_mul(wave as usize))
        .min(MAX_ENEMIES_CEILING)
}

/// Starting hit points at `wave` (always at least 1)
pub fn enemy_health(wave: u32) -> u32 {
    1 + wave / ENEMY_HEALTH_WAVE_STEP
}

/// Slowest possible enemy at `wave`; jitter only adds to this
pub fn enemy_min_speed(wave: u32) -> f32 {
    ENEMY_BASE_SPEED + wave as f32 * ENEMY_SPEED_PER_WAVE
}

/// Random point `SPAWN_EDGE_OFFSET` outside one of the four edges
pub fn edge_spawn_point<R: Rng>(rng: &mut R, arena: &Arena) -> Vec2 {
    let Vec2 { x: w, y: h } = arena.size();
    match rng.random_range(0..4) {
        0 => Vec2::new(rng.random_range(0.0..w), -SPAWN_EDGE_OFFSET),
        1 => Vec2::new(w + SPAWN_EDGE_OFFSET, rng.random_range(0.0..h)),
        2 => Vec2::new(rng.random_range(0.0..w), h + SPAWN_EDGE_OFFSET),
        _ => Vec2::new(-SPAWN_EDGE_OFFSET, rng.random_range(0.0..h)),
    }
}

/// Build one enemy for `wave`. Ids are assigned by the store.
pub fn spawn_enemy<R: Rng>(
    rng: &mut R,
    wave: u32,
    arena: &Arena,
    player_pos: Vec2,
    placement: SpawnPlacement,
) -> Enemy {
    let pos = match placement {
        SpawnPlacement::Edges => edge_spawn_point(rng, arena),
        SpawnPlacement::Ring { distance } => {
            player_pos + polar_to_cartesian(distance, rng.random_range(0.0..TAU))
        }
    };

    Enemy {
        id: 0,
        pos,
        radius: ENEMY_RADIUS,
        speed: enemy_min_speed(wave) + rng.random_range(0.0..ENEMY_SPEED_JITTER),
        health: enemy_health(wave),
        gait_phase: rng.random_range(0.0..TAU),
    }
}

/// Count down the spawn timer and spawn when it runs out.
///
/// The timer resets on every expiry; at the population cap the spawn is
/// skipped but the cadence is kept. Returns the new enemy's id.
pub fn update_spawning(state: &mut GameState, dt: f32) -> Option<u32> {
    state.spawn_timer -= dt;
    if state.spawn_timer > 0.0 {
        return None;
    }
    state.spawn_timer = spawn_delay(state.wave);

    let cap = max_enemies(state.wave);
    if state.enemies.len() >= cap {
        log::debug!("Spawn skipped: {} enemies at cap {}", state.enemies.len(), cap);
        return None;
    }

    let enemy = spawn_enemy(
        &mut state.rng,
        state.wave,
        &state.arena,
        state.player.pos,
        state.spawn_placement,
    );
    let id = state.add_enemy(enemy);
    state.events.push(GameEvent::EnemySpawned { enemy_id: id });
    log::debug!("Spawned enemy {} (wave {}, {} alive)", id, state.wave, state.enemies.len());
    Some(id)
}
