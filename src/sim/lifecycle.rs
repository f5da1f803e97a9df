//! Run lifecycle: Ready -> Playing <-> Paused, Playing -> GameOver -> Playing
//!
//! Every transition is logged and recorded as a [`GameEvent::PhaseChanged`]
//! exactly once.

use super::state::{GameEvent, GamePhase, GameState};

fn record(state: &mut GameState, from: GamePhase, to: GamePhase) {
    state.events.push(GameEvent::PhaseChanged { from, to });
    log::info!("Phase {:?} -> {:?}", from, to);
}

fn set_phase(state: &mut GameState, to: GamePhase) {
    let from = state.phase;
    if from == to {
        return;
    }
    state.phase = to;
    record(state, from, to);
}

/// Leave `Ready` and begin play
pub fn start(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Ready {
        return false;
    }
    set_phase(state, GamePhase::Playing);
    true
}

/// Toggle between `Playing` and `Paused`. Other phases ignore it.
pub fn toggle_pause(state: &mut GameState) -> bool {
    match state.phase {
        GamePhase::Playing => set_phase(state, GamePhase::Paused),
        GamePhase::Paused => set_phase(state, GamePhase::Playing),
        GamePhase::Ready | GamePhase::GameOver => return false,
    }
    true
}

/// Enter `GameOver` once health is exhausted
pub fn check_game_over(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Playing || state.health > 0.0 {
        return false;
    }
    log::info!(
        "Run over: score {}, wave {}, {} ticks",
        state.score,
        state.wave,
        state.time_ticks
    );
    set_phase(state, GamePhase::GameOver);
    true
}

/// Start a fresh run; only valid from `GameOver`
pub fn restart(state: &mut GameState) -> bool {
    if state.phase != GamePhase::GameOver {
        return false;
    }
    state.reset();
    let to = state.phase;
    record(state, GamePhase::GameOver, to);
    true
}
