//! Motion integration for the player, projectiles and enemies

use glam::Vec2;
use std::f32::consts::TAU;

use super::state::{GameState, Player};
use crate::consts::*;
use crate::{direction_to, distance, normalize};

/// Move the player along the combined move intent, then keep it inside the
/// arena and outside every obstacle.
pub fn move_player(state: &mut GameState, move_dir: Vec2, dt: f32) {
    let player = &mut state.player;
    let dir = normalize(move_dir);
    player.pos += dir * player.speed * dt;
    player.pos = state.arena.clamp_circle(player.pos, player.radius);

    for obstacle in &state.obstacles {
        if let Some(push) = obstacle.push_out(player.pos, player.radius, &state.arena) {
            player.pos += push;
        }
    }
    player.pos = state.arena.clamp_circle(player.pos, player.radius);
}

/// Turn the player toward the aim point. A point on top of the player keeps
/// the previous facing.
pub fn aim_player(player: &mut Player, aim: Option<Vec2>) {
    if let Some(target) = aim {
        let dir = direction_to(player.pos, target);
        if dir != Vec2::ZERO {
            player.facing = dir;
        }
    }
}

/// Advance projectiles in a straight line and drop the ones that left the
/// arena by more than the margin. Returns how many were dropped.
pub fn advance_projectiles(state: &mut GameState, dt: f32) -> usize {
    for projectile in &mut state.projectiles {
        projectile.pos += projectile.vel * dt;
    }

    let before = state.projectiles.len();
    let arena = state.arena;
    state.retain_projectiles(|p| !arena.is_outside(p.pos, PROJECTILE_MARGIN));
    before - state.projectiles.len()
}

/// Pure pursuit: every enemy steps straight at the player, scaled by its
/// shamble cycle. Enemies ignore obstacles and never overshoot the player.
pub fn advance_enemies(state: &mut GameState, dt: f32) {
    let target = state.player.pos;
    for enemy in &mut state.enemies {
        enemy.gait_phase = (enemy.gait_phase + GAIT_RATE * dt) % TAU;

        let step = (enemy.speed * enemy.gait_factor() * dt).min(distance(enemy.pos, target));
        enemy.pos += direction_to(enemy.pos, target) * step;
    }
}
