//! Frame-time to fixed-step driver
//!
//! Presentation calls [`FixedStepClock::run_frame`] once per display refresh.
//! Wall-clock deltas are clamped, accumulated, and spent in whole `SIM_DT`
//! ticks.

use super::state::{GameEvent, GameState};
use super::tick::{TickInput, tick};
use crate::consts::*;

#[derive(Debug, Clone, Default)]
pub struct FixedStepClock {
    accumulator: f32,
    last_time_ms: Option<f64>,
    /// Events from every substep since the last `take_events`
    events: Vec<GameEvent>,
}

impl FixedStepClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous timestamp (zero on the first call)
    pub fn frame_delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_time_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_time_ms = Some(now_ms);
        dt
    }

    /// Run as many fixed ticks as the elapsed frame time allows.
    ///
    /// One-shot intents in `input` are cleared after the first tick so a
    /// single click fires once. Returns the number of ticks run.
    pub fn run_frame(&mut self, state: &mut GameState, input: &mut TickInput, frame_dt: f32) -> u32 {
        let frame_dt = if frame_dt.is_finite() { frame_dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, input, SIM_DT);
            self.events.append(&mut state.events);
            self.accumulator -= SIM_DT;
            substeps += 1;

            input.clear_edges();
        }

        substeps
    }

    /// Drain the events gathered since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
