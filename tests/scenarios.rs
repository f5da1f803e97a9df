//! Whole-run scenarios driven through `tick`
//!
//! Checks:
//! - kills, scoring and projectile consumption in one resolution pass
//! - game over is terminal and freezes the world
//! - an untouched run stays at wave 1 with no score
//! - reset is idempotent

use glam::Vec2;
use horde_siege::consts::*;
use horde_siege::sim::{
    Arena, Enemy, GameEvent, GamePhase, GameState, Projectile, TickInput, resolve_hits, tick,
};
use horde_siege::{HudText, Snapshot};

fn started(seed: u64, arena: Arena) -> GameState {
    let mut state = GameState::with_arena(seed, arena);
    let start = TickInput {
        start: true,
        ..Default::default()
    };
    tick(&mut state, &start, SIM_DT);
    assert_eq!(state.phase, GamePhase::Playing);
    state
}

#[test]
fn test_adjacent_projectile_kills_one_hp_enemy() {
    let mut state = GameState::new(42);
    let pos = Vec2::new(400.0, 300.0);
    state.add_enemy(Enemy::new(pos, ENEMY_RADIUS, ENEMY_BASE_SPEED, 1).unwrap());
    state.add_projectile(Projectile::new(pos + Vec2::new(ENEMY_RADIUS, 0.0), Vec2::ZERO).unwrap());

    let killed = resolve_hits(&mut state);
    assert_eq!(killed.len(), 1);
    assert!(state.enemies.is_empty());
    assert!(state.projectiles.is_empty());
    assert_eq!(state.score, KILL_SCORE);
}

#[test]
fn test_lethal_contact_ends_run_and_freezes() {
    let mut state = started(42, Arena::default());
    state.health = 1.0;
    let pos = state.player.pos;
    state.add_enemy(Enemy::new(pos + Vec2::new(5.0, 0.0), ENEMY_RADIUS, 30.0, 1).unwrap());

    tick(&mut state, &TickInput::default(), SIM_DT);
    assert!(state.is_game_over());
    assert_eq!(state.health, 0.0);
    let entered = state
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::PhaseChanged { to: GamePhase::GameOver, .. }))
        .count();
    assert_eq!(entered, 1);

    let frozen = Snapshot::capture(&state);
    let input = TickInput {
        move_dir: Vec2::new(1.0, 1.0),
        aim: Some(Vec2::ZERO),
        fire: true,
        ..Default::default()
    };
    for _ in 0..300 {
        tick(&mut state, &input, SIM_DT);
        assert!(state.events.is_empty());
    }
    let after = Snapshot::capture(&state);
    assert_eq!(frozen.player.pos, after.player.pos);
    assert_eq!(frozen.enemies.len(), after.enemies.len());
    for (a, b) in frozen.enemies.iter().zip(&after.enemies) {
        assert_eq!(a.pos, b.pos);
    }
    assert_eq!(after.run.health, 0.0);
    assert!(after.projectiles.is_empty());
}

#[test]
fn test_idle_run_far_from_enemies() {
    // Large enough that nothing reaches the center inside 1000 ticks
    let arena = Arena::new(20_000.0, 20_000.0).unwrap();
    let mut state = started(7, arena);

    for _ in 0..1000 {
        tick(&mut state, &TickInput::default(), SIM_DT);
    }

    assert_eq!(state.score, 0);
    assert_eq!(state.wave, 1);
    assert_eq!(state.health, PLAYER_MAX_HEALTH);
    assert!(!state.is_game_over());
    assert!(!state.enemies.is_empty());
}

#[test]
fn test_standing_still_is_eventually_fatal() {
    let mut state = started(3, Arena::default());
    let mut ticks = 0;
    while !state.is_game_over() && ticks < 60 * 180 {
        tick(&mut state, &TickInput::default(), SIM_DT);
        ticks += 1;
    }
    assert!(state.is_game_over(), "horde never reached an idle player");
    assert_eq!(HudText::from_state(&state).health, "0");

    for _ in 0..60 {
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.health, 0.0);
    }
}

#[test]
fn test_reset_is_idempotent() {
    let mut state = started(11, Arena::default());
    for _ in 0..200 {
        let input = TickInput {
            move_dir: Vec2::new(1.0, -1.0),
            aim: Some(Vec2::new(0.0, 0.0)),
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
    }

    state.reset();
    let first = Snapshot::capture(&state);
    state.reset();
    let second = Snapshot::capture(&state);

    for snapshot in [&first, &second] {
        assert_eq!(snapshot.run.score, 0);
        assert_eq!(snapshot.run.health, PLAYER_MAX_HEALTH);
        assert_eq!(snapshot.run.wave, 1);
        assert!(!snapshot.run.game_over);
        assert!(snapshot.enemies.is_empty());
        assert!(snapshot.projectiles.is_empty());
        assert_eq!(snapshot.player.pos, state.arena.center());
    }
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn test_shooting_clears_wave_one() {
    // Park the player in a corner and sweep fire at the nearest enemy
    let mut state = started(5, Arena::default());
    let mut kills = 0;
    for t in 0..60 * 90 {
        let target = state
            .enemies
            .iter()
            .map(|e| e.pos)
            .min_by(|a, b| {
                a.distance(state.player.pos)
                    .total_cmp(&b.distance(state.player.pos))
            });
        let input = TickInput {
            aim: target,
            fire: t % 6 == 0,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        kills += state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyKilled { .. }))
            .count();
        if state.is_game_over() {
            break;
        }
    }

    assert!(kills > 0);
    assert_eq!(state.score, kills as u64 * KILL_SCORE);
    assert_eq!(state.wave as u64, 1 + state.score / WAVE_SCORE_THRESHOLD);
}
