//! Browser front end (wasm32 only)
//!
//! JavaScript owns the canvas, input listeners and the DOM overlay. It feeds
//! intents into [`Engine`], calls [`Engine::frame`] from
//! `requestAnimationFrame`, and draws from [`Engine::snapshot_json`].

use glam::Vec2;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::hud::{HudText, Overlay, Snapshot, dispatch_overlay, overlay_message};
use crate::sim::{Arena, FixedStepClock, GameState, TickInput};

/// Overlay call waiting for the page to apply it
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum OverlayCommand {
    Show { title: String, subtitle: String },
    Hide,
}

#[derive(Debug, Default)]
struct OverlayQueue(Vec<OverlayCommand>);

impl Overlay for OverlayQueue {
    fn show_message(&mut self, title: &str, subtitle: &str) {
        self.0.push(OverlayCommand::Show {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        });
    }

    fn hide_message(&mut self) {
        self.0.push(OverlayCommand::Hide);
    }
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Horde Siege core loaded");
}

/// Game instance holding all simulation state for one canvas
#[wasm_bindgen]
pub struct Engine {
    state: GameState,
    clock: FixedStepClock,
    input: TickInput,
    overlay: OverlayQueue,
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<Engine, JsValue> {
        let arena = Arena::new(width, height).map_err(js_error)?;
        let seed = js_sys::Date::now() as u64;
        let state = GameState::with_arena(seed, arena);

        let mut overlay = OverlayQueue::default();
        if let Some((title, subtitle)) = overlay_message(state.phase) {
            overlay.show_message(title, subtitle);
        }

        log::info!("Engine created: {}x{}, seed {}", width, height, seed);
        Ok(Engine {
            state,
            clock: FixedStepClock::new(),
            input: TickInput::default(),
            overlay,
        })
    }

    /// Viewport changed size
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        let arena = Arena::new(width, height).map_err(js_error)?;
        self.state.set_arena(arena);
        Ok(())
    }

    /// Held movement axes, each in -1..=1
    pub fn set_move(&mut self, x: f32, y: f32) {
        self.input.move_dir = Vec2::new(x, y);
    }

    /// Pointer position in arena coordinates
    pub fn set_aim(&mut self, x: f32, y: f32) {
        self.input.aim = Some(Vec2::new(x, y));
    }

    pub fn fire(&mut self) {
        self.input.fire = true;
    }

    pub fn reset(&mut self) {
        self.input.reset = true;
    }

    pub fn start(&mut self) {
        self.input.start = true;
    }

    pub fn pause(&mut self) {
        self.input.pause = true;
    }

    /// Advance to `now_ms` (a `requestAnimationFrame` timestamp).
    /// Returns the number of ticks run.
    pub fn frame(&mut self, now_ms: f64) -> u32 {
        let dt = self.clock.frame_delta(now_ms);
        let ticks = self.clock.run_frame(&mut self.state, &mut self.input, dt);
        let events = self.clock.take_events();
        dispatch_overlay(&events, &mut self.overlay);
        ticks
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        Snapshot::capture(&self.state).to_json().map_err(js_error)
    }

    pub fn hud_score(&self) -> String {
        HudText::from_state(&self.state).score
    }

    pub fn hud_health(&self) -> String {
        HudText::from_state(&self.state).health
    }

    pub fn hud_wave(&self) -> String {
        HudText::from_state(&self.state).wave
    }

    /// Pending overlay calls as a JSON array, oldest first
    pub fn take_overlay_json(&mut self) -> Result<String, JsValue> {
        let pending = std::mem::take(&mut self.overlay.0);
        serde_json::to_string(&pending).map_err(js_error)
    }
}
