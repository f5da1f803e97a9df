//! Score-driven wave progression

use super::state::{GameEvent, GameState};
use crate::consts::WAVE_SCORE_THRESHOLD;

/// Wave for a given score: `1 + floor(score / WAVE_SCORE_THRESHOLD)`
pub fn wave_for_score(score: u64) -> u32 {
    let tier = score / WAVE_SCORE_THRESHOLD;
    u32::try_from(tier).unwrap_or(u32::MAX).saturating_add(1)
}

/// Recompute the wave from the score. The wave never goes down.
/// Returns true when it advanced.
pub fn update_wave(state: &mut GameState) -> bool {
    let wave = wave_for_score(state.score);
    if wave <= state.wave {
        return false;
    }

    log::info!("Wave {} -> {} at score {}", state.wave, wave, state.score);
    state.wave = wave;
    state.events.push(GameEvent::WaveChanged { wave });
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_for_score() {
        assert_eq!(wave_for_score(0), 1);
        assert_eq!(wave_for_score(WAVE_SCORE_THRESHOLD - 1), 1);
        assert_eq!(wave_for_score(WAVE_SCORE_THRESHOLD), 2);
        assert_eq!(wave_for_score(WAVE_SCORE_THRESHOLD * 5 + 3), 6);
        assert_eq!(wave_for_score(u64::MAX), u32::MAX);
    }

    #[test]
    fn test_update_wave_emits_once() {
        let mut state = GameState::new(1);
        state.score = WAVE_SCORE_THRESHOLD * 2;
        assert!(update_wave(&mut state));
        assert_eq!(state.wave, 3);
        assert!(!update_wave(&mut state));
        assert_eq!(state.events, vec![GameEvent::WaveChanged { wave: 3 }]);
    }
}
