//! Horde Siege entry point
//!
//! Native builds run a headless autopilot over the simulation and print the
//! final snapshot. The browser build is driven through `platform::web`.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;
    use horde_siege::consts::*;
    use horde_siege::sim::{GameState, TickInput, tick};
    use horde_siege::{HudText, SimError, Snapshot, distance};

    /// Ticks between autopilot shots
    const FIRE_PERIOD: u64 = 8;
    /// Autopilot backs off from enemies closer than this
    const FLEE_RADIUS: f32 = 180.0;
    /// Close enough to the center to stop drifting home
    const HOME_RADIUS: f32 = 48.0;

    fn drift_home(state: &GameState) -> Vec2 {
        let offset = state.arena.center() - state.player.pos;
        if offset.length() > HOME_RADIUS { offset } else { Vec2::ZERO }
    }

    /// Aim at the nearest enemy, fire on a fixed period, back away when
    /// something gets close, otherwise drift home to the arena center.
    fn autopilot(state: &GameState) -> TickInput {
        let player = state.player.pos;
        let nearest = state
            .enemies
            .iter()
            .min_by(|a, b| distance(a.pos, player).total_cmp(&distance(b.pos, player)));

        let Some(enemy) = nearest else {
            return TickInput {
                move_dir: drift_home(state),
                ..Default::default()
            };
        };

        let gap = distance(enemy.pos, player);
        let move_dir = if gap < FLEE_RADIUS {
            // Flee, sliding sideways so the arena corners don't trap us
            let away = player - enemy.pos;
            away + away.perp() * 0.5
        } else {
            drift_home(state)
        };

        TickInput {
            move_dir,
            aim: Some(enemy.pos),
            fire: state.time_ticks % FIRE_PERIOD == 0,
            ..Default::default()
        }
    }

    fn parse_arg<T: std::str::FromStr>(arg: Option<String>, name: &str, default: T) -> T {
        match arg {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid {} '{}'", name, raw);
                default
            }),
            None => default,
        }
    }

    pub fn run() -> Result<(), SimError> {
        let mut args = std::env::args().skip(1);
        let seed: u64 = parse_arg(args.next(), "seed", 42);
        let max_ticks: u64 = parse_arg(args.next(), "tick limit", 60 * 60 * 5);

        log::info!("Horde Siege (headless) seed {} for up to {} ticks", seed, max_ticks);

        let mut state = GameState::new(seed);
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start, SIM_DT);

        let mut last_wave = state.wave;
        while !state.is_game_over() && state.time_ticks < max_ticks {
            let input = autopilot(&state);
            tick(&mut state, &input, SIM_DT);

            if state.wave != last_wave {
                let hud = HudText::from_state(&state);
                log::info!("HUD score {} health {} wave {}", hud.score, hud.health, hud.wave);
                last_wave = state.wave;
            }
        }

        let seconds = state.time_ticks as f32 * SIM_DT;
        log::info!(
            "Finished after {:.1}s: score {}, wave {}, health {:.0}, {} enemies alive",
            seconds,
            state.score,
            state.wave,
            state.health,
            state.enemies.len()
        );

        println!("{}", Snapshot::capture(&state).to_json()?);
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), horde_siege::SimError> {
    env_logger::init();
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
