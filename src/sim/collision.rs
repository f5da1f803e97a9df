//! Collision detection and damage resolution
//!
//! Two proximity passes per tick, always in this order:
//! 1. enemy-player contact (gated bursts of contact damage)
//! 2. projectile-enemy hits (projectile consumed, enemy loses health)

use glam::Vec2;

use super::state::{GameEvent, GameState};
use crate::consts::*;
use crate::distance;

/// Strict circle overlap test
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    distance(a, b) < radius_a + radius_b
}

/// Number of enemies currently touching the player
pub fn touching_enemies(state: &GameState) -> usize {
    let player = &state.player;
    state
        .enemies
        .iter()
        .filter(|e| circles_overlap(e.pos, e.radius, player.pos, player.radius))
        .count()
}

/// Apply contact damage.
///
/// At most one burst lands per `CONTACT_INTERVAL`; each burst deals
/// `CONTACT_DAMAGE` per touching enemy. Health is clamped at zero.
/// Returns the damage dealt this call.
pub fn resolve_contact(state: &mut GameState, dt: f32) -> f32 {
    state.contact_cooldown = (state.contact_cooldown - dt).max(0.0);

    let touching = touching_enemies(state);
    if touching == 0 || state.contact_cooldown > f32::EPSILON {
        return 0.0;
    }

    let before = state.health;
    state.health = (state.health - CONTACT_DAMAGE * touching as f32).max(0.0);
    state.contact_cooldown = CONTACT_INTERVAL;

    let amount = before - state.health;
    state.events.push(GameEvent::PlayerHurt {
        amount,
        health: state.health,
    });
    log::trace!("{} enemies touching, health {:.1} -> {:.1}", touching, before, state.health);
    amount
}

/// Resolve projectile hits, newest entities first.
///
/// A projectile that overlaps an enemy is consumed and the enemy loses
/// `PROJECTILE_DAMAGE`. An enemy that drops to zero is removed at once, scores
/// `KILL_SCORE`, and takes no further projectiles. Returns the ids of the
/// enemies killed.
pub fn resolve_hits(state: &mut GameState) -> Vec<u32> {
    let mut killed = Vec::new();

    let mut ei = state.enemies.len();
    while ei > 0 {
        ei -= 1;

        let mut pi = state.projectiles.len();
        while pi > 0 {
            pi -= 1;

            let enemy = &state.enemies[ei];
            let projectile = &state.projectiles[pi];
            if !circles_overlap(enemy.pos, enemy.radius, projectile.pos, projectile.radius) {
                continue;
            }

            state.remove_projectile_at(pi);
            let enemy = &mut state.enemies[ei];
            enemy.health = enemy.health.saturating_sub(PROJECTILE_DAMAGE);
            let (enemy_id, health_left) = (enemy.id, enemy.health);

            if health_left == 0 {
                state.remove_enemy_at(ei);
                state.score += KILL_SCORE;
                state.events.push(GameEvent::EnemyKilled {
                    enemy_id,
                    score: state.score,
                });
                log::trace!("Enemy {} killed, score {}", enemy_id, state.score);
                killed.push(enemy_id);
                break;
            }

            state.events.push(GameEvent::EnemyHit {
                enemy_id,
                health_left,
            });
        }
    }

    killed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Enemy, Projectile};

    fn enemy(pos: Vec2, health: u32) -> Enemy {
        Enemy::new(pos, ENEMY_RADIUS, ENEMY_BASE_SPEED, health).unwrap()
    }

    fn projectile(pos: Vec2) -> Projectile {
        Projectile::new(pos, Vec2::ZERO).unwrap()
    }

    #[test]
    fn test_circles_overlap_is_strict() {
        assert!(circles_overlap(Vec2::ZERO, 1.0, Vec2::new(1.9, 0.0), 1.0));
        assert!(!circles_overlap(Vec2::ZERO, 1.0, Vec2::new(2.0, 0.0), 1.0));
    }

    #[test]
    fn test_single_hit_kills_and_scores() {
        let mut state = GameState::new(1);
        let pos = Vec2::new(200.0, 200.0);
        state.add_enemy(enemy(pos, 1));
        state.add_projectile(projectile(pos + Vec2::new(5.0, 0.0)));

        let killed = resolve_hits(&mut state);
        assert_eq!(killed.len(), 1);
        assert!(state.enemies.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.score, KILL_SCORE);
    }

    #[test]
    fn test_dead_enemy_absorbs_no_extra_projectiles() {
        let mut state = GameState::new(1);
        let pos = Vec2::new(200.0, 200.0);
        state.add_enemy(enemy(pos, 1));
        for _ in 0..3 {
            state.add_projectile(projectile(pos));
        }

        resolve_hits(&mut state);
        assert!(state.enemies.is_empty());
        assert_eq!(state.projectiles.len(), 2);
        assert_eq!(state.score, KILL_SCORE);
    }

    #[test]
    fn test_tough_enemy_takes_multiple_hits() {
        let mut state = GameState::new(1);
        let pos = Vec2::new(200.0, 200.0);
        let id = state.add_enemy(enemy(pos, 3));
        state.add_projectile(projectile(pos));
        state.add_projectile(projectile(pos));

        let killed = resolve_hits(&mut state);
        assert!(killed.is_empty());
        assert_eq!(state.enemies[0].health, 1);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.score, 0);
        let hits = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyHit { enemy_id, .. } if *enemy_id == id))
            .count();
        assert_eq!(hits, 2);
    }

    #[test]
    fn test_projectile_hits_only_one_enemy() {
        let mut state = GameState::new(1);
        let pos = Vec2::new(200.0, 200.0);
        state.add_enemy(enemy(pos, 1));
        state.add_enemy(enemy(pos + Vec2::new(4.0, 0.0), 1));
        state.add_projectile(projectile(pos + Vec2::new(2.0, 0.0)));

        resolve_hits(&mut state);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.score, KILL_SCORE);
    }

    #[test]
    fn test_contact_damage_is_gated() {
        let mut state = GameState::new(1);
        let pos = state.player.pos;
        state.add_enemy(enemy(pos, 1));

        let first = resolve_contact(&mut state, SIM_DT);
        assert!((first - CONTACT_DAMAGE).abs() < 1e-6);
        // Within the interval nothing lands
        let second = resolve_contact(&mut state, SIM_DT);
        assert_eq!(second, 0.0);
        assert!((state.health - (PLAYER_MAX_HEALTH - CONTACT_DAMAGE)).abs() < 1e-6);

        // After a full interval the next burst lands
        let mut total = 0.0;
        for _ in 0..10 {
            total += resolve_contact(&mut state, SIM_DT);
        }
        assert!(total > 0.0);
    }

    #[test]
    fn test_contact_damage_stacks_per_enemy() {
        let mut state = GameState::new(1);
        let pos = state.player.pos;
        state.add_enemy(enemy(pos + Vec2::new(10.0, 0.0), 1));
        state.add_enemy(enemy(pos - Vec2::new(10.0, 0.0), 1));
        state.add_enemy(enemy(pos + Vec2::new(500.0, 0.0), 1));

        let dealt = resolve_contact(&mut state, SIM_DT);
        assert!((dealt - 2.0 * CONTACT_DAMAGE).abs() < 1e-6);
    }

    #[test]
    fn test_contact_damage_clamps_at_zero() {
        let mut state = GameState::new(1);
        state.health = 1.0;
        let pos = state.player.pos;
        state.add_enemy(enemy(pos, 1));

        let dealt = resolve_contact(&mut state, SIM_DT);
        assert_eq!(state.health, 0.0);
        assert!((dealt - 1.0).abs() < 1e-6);
    }
}
