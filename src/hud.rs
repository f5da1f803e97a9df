//! Read-only projections of the simulation for presentation
//!
//! HUD strings, the message overlay boundary, and a serializable snapshot of
//! everything a renderer draws. Nothing here mutates [`GameState`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sim::{GameEvent, GamePhase, GameState};

/// HUD text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudText {
    pub score: String,
    /// Health, floored
    pub health: String,
    pub wave: String,
}

impl HudText {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score.to_string(),
            health: (state.health.floor() as i32).to_string(),
            wave: state.wave.to_string(),
        }
    }
}

/// Message overlay owned by the presentation layer
pub trait Overlay {
    fn show_message(&mut self, title: &str, subtitle: &str);
    fn hide_message(&mut self);
}

/// Overlay text for phases that show one
pub fn overlay_message(phase: GamePhase) -> Option<(&'static str, &'static str)> {
    match phase {
        GamePhase::Ready => Some(("Horde Siege", "Click to start")),
        GamePhase::Paused => Some(("Paused", "Press P to resume")),
        GamePhase::GameOver => Some(("Overrun", "Press R to restart")),
        GamePhase::Playing => None,
    }
}

/// Forward phase transitions to the overlay: show on entering a message
/// phase, hide on leaving one for play.
pub fn dispatch_overlay<O: Overlay + ?Sized>(events: &[GameEvent], overlay: &mut O) {
    for event in events {
        if let GameEvent::PhaseChanged { from, to } = *event {
            match (overlay_message(from), overlay_message(to)) {
                (_, Some((title, subtitle))) => overlay.show_message(title, subtitle),
                (Some(_), None) => overlay.hide_message(),
                (None, None) => {}
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub facing: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub pos: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub pos: Vec2,
    pub health: u32,
    /// Shamble phase for animation
    pub gait_phase: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunView {
    pub score: u64,
    pub health: f32,
    pub wave: u32,
    pub game_over: bool,
    pub phase: GamePhase,
}

/// Post-tick view of the world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub arena: Vec2,
    pub player: PlayerView,
    pub projectiles: Vec<ProjectileView>,
    pub enemies: Vec<EnemyView>,
    pub run: RunView,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            tick: state.time_ticks,
            arena: state.arena.size(),
            player: PlayerView {
                pos: state.player.pos,
                facing: state.player.facing,
                radius: state.player.radius,
            },
            projectiles: state
                .projectiles
                .iter()
                .map(|p| ProjectileView { id: p.id, pos: p.pos })
                .collect(),
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyView {
                    id: e.id,
                    pos: e.pos,
                    health: e.health,
                    gait_phase: e.gait_phase,
                })
                .collect(),
            run: RunView {
                score: state.score,
                health: state.health,
                wave: state.wave,
                game_over: state.is_game_over(),
                phase: state.phase,
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
