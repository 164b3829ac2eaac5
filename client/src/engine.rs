//! Combat engine for browser WASM builds
//!
//! Wraps the core orchestrator for JavaScript. Pointer coordinates and
//! timestamps arrive as JS numbers; views and events leave as plain objects.
//! Every accepted input is also recorded so a session can be exported as
//! SCALE bytes and replayed.

use clipshift_core::gesture::{GestureOutcome, PointerEvent, PointerTarget};
use clipshift_core::log;
use clipshift_core::replay::{InputEvent, Recording};
use clipshift_core::{CombatEngine, GameError, Millis, Scenario, Viewport};
use wasm_bindgen::prelude::*;

fn to_message(err: GameError) -> String {
    err.to_string()
}

fn to_millis(at: f64) -> Millis {
    if at.is_finite() && at > 0.0 {
        at as Millis
    } else {
        0
    }
}

fn to_js<T: serde::Serialize>(label: &str, value: &T) -> JsValue {
    match serde_wasm_bindgen::to_value(value) {
        Ok(val) => val,
        Err(e) => {
            let msg = format!("{} serialization failed: {:?}", label, e);
            log::error(&msg);
            web_sys::console::error_1(&JsValue::from_str(&msg));
            JsValue::NULL
        }
    }
}

fn parse_target(target: &str, card_id: Option<u32>) -> Result<PointerTarget, String> {
    match target {
        "card" => card_id
            .map(|id| PointerTarget::Card { id })
            .ok_or_else(|| "card target needs a card id".to_string()),
        "enemyZone" => Ok(PointerTarget::EnemyZone),
        "deck" => Ok(PointerTarget::Deck),
        _ => Ok(PointerTarget::Elsewhere),
    }
}

/// Short label for a gesture outcome, e.g. `"started:finale"`
fn outcome_label(outcome: &GestureOutcome) -> String {
    match outcome {
        GestureOutcome::Ignored => "ignored".to_string(),
        GestureOutcome::Started(kind) => format!("started:{}", kind.as_str()),
        GestureOutcome::Activated(kind) => format!("activated:{}", kind.as_str()),
        GestureOutcome::Moved => "moved".to_string(),
        GestureOutcome::Committed(_) => "committed".to_string(),
        GestureOutcome::Cancelled(kind) => format!("cancelled:{}", kind.as_str()),
    }
}

/// The combat engine exposed to WASM
#[wasm_bindgen]
pub struct ClipshiftEngine {
    engine: CombatEngine,
    recording: Recording,
}

impl ClipshiftEngine {
    fn pointer_event(
        x: f64,
        y: f64,
        at: f64,
        target: &str,
        card_id: Option<u32>,
    ) -> Result<PointerEvent, String> {
        let target = parse_target(target, card_id)?;
        Ok(PointerEvent::new(
            x.round() as i32,
            y.round() as i32,
            to_millis(at),
            target,
        ))
    }

    fn record(&mut self, input: InputEvent) -> Result<(), String> {
        self.engine.apply_input(&input).map_err(to_message)?;
        self.recording.push(input);
        Ok(())
    }

    fn record_pointer(
        &mut self,
        input: InputEvent,
        event: &PointerEvent,
    ) -> Result<String, String> {
        let outcome = match input {
            InputEvent::PointerDown(_) => self.engine.pointer_down(event),
            InputEvent::PointerMove(_) => self.engine.pointer_move(event),
            _ => self.engine.pointer_up(event),
        }
        .map_err(to_message)?;
        self.recording.push(input);
        Ok(outcome_label(&outcome))
    }
}

#[wasm_bindgen]
impl ClipshiftEngine {
    /// Start a battle in the named scenario ("finale", "multiPlay", ...)
    #[wasm_bindgen(constructor)]
    pub fn new(scenario: &str) -> Result<ClipshiftEngine, String> {
        let scenario = Scenario::from_name(scenario)
            .ok_or_else(|| to_message(GameError::UnknownScenario))?;
        let engine = CombatEngine::new(scenario);
        let recording = Recording::new(scenario, engine.viewport());
        Ok(Self { engine, recording })
    }

    /// Rebuild an engine from an exported session
    #[wasm_bindgen]
    pub fn from_recording_scale(bytes: &[u8]) -> Result<ClipshiftEngine, String> {
        log::action("from_recording_scale", &format!("len={}", bytes.len()));
        let recording = Recording::decode_bytes(bytes).map_err(to_message)?;
        let engine = recording.replay().map_err(to_message)?;
        Ok(Self { engine, recording })
    }

    /// Start over. Starts a new recording as well.
    #[wasm_bindgen]
    pub fn reset(&mut self, scenario: &str) -> Result<(), String> {
        let scenario = Scenario::from_name(scenario)
            .ok_or_else(|| to_message(GameError::UnknownScenario))?;
        self.engine.reset(scenario);
        self.recording = Recording::new(scenario, self.engine.viewport());
        Ok(())
    }

    /// Start a boss fight in the named scenario. Starts a new recording.
    #[wasm_bindgen]
    pub fn reset_boss(&mut self, scenario: &str) -> Result<(), String> {
        let scenario = Scenario::from_name(scenario)
            .ok_or_else(|| to_message(GameError::UnknownScenario))?;
        self.engine.reset_boss(scenario);
        self.recording = Recording::boss(scenario, self.engine.viewport());
        Ok(())
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), String> {
        let viewport = Viewport::new(width.round() as i32, height.round() as i32);
        self.record(InputEvent::Resize(viewport))
    }

    /// `target` is "card" (with `card_id`), "enemyZone", "deck" or anything
    /// else for empty space. Returns the outcome label.
    #[wasm_bindgen]
    pub fn pointer_down(
        &mut self,
        x: f64,
        y: f64,
        at: f64,
        target: &str,
        card_id: Option<u32>,
    ) -> Result<String, String> {
        let event = Self::pointer_event(x, y, at, target, card_id)?;
        self.record_pointer(InputEvent::PointerDown(event), &event)
    }

    #[wasm_bindgen]
    pub fn pointer_move(
        &mut self,
        x: f64,
        y: f64,
        at: f64,
        target: &str,
        card_id: Option<u32>,
    ) -> Result<String, String> {
        let event = Self::pointer_event(x, y, at, target, card_id)?;
        self.record_pointer(InputEvent::PointerMove(event), &event)
    }

    #[wasm_bindgen]
    pub fn pointer_up(
        &mut self,
        x: f64,
        y: f64,
        at: f64,
        target: &str,
        card_id: Option<u32>,
    ) -> Result<String, String> {
        let event = Self::pointer_event(x, y, at, target, card_id)?;
        self.record_pointer(InputEvent::PointerUp(event), &event)
    }

    /// Fire every timer due by `at`; call from requestAnimationFrame.
    #[wasm_bindgen]
    pub fn advance_to(&mut self, at: f64) -> Result<(), String> {
        let at = to_millis(at);
        if self.engine.next_timer_due().map_or(true, |due| due > at) {
            // Nothing to fire; keep the recording free of idle frames
            return self.engine.advance_to(at).map_err(to_message);
        }
        self.record(InputEvent::Advance { at })
    }

    #[wasm_bindgen]
    pub fn setup_favorable(&mut self) -> bool {
        let applied = self.engine.setup_favorable();
        if applied {
            self.recording.push(InputEvent::SetupFavorable);
        }
        applied
    }

    /// Get the current combat view as JSON
    #[wasm_bindgen]
    pub fn get_view(&self) -> JsValue {
        log::debug("get_view", "Serializing combat state to view");
        to_js("get_view", &self.engine.view())
    }

    /// Take the events produced since the last call
    #[wasm_bindgen]
    pub fn drain_events(&mut self) -> JsValue {
        let events = self.engine.drain_events();
        to_js("drain_events", &events)
    }

    #[wasm_bindgen]
    pub fn get_config(&self) -> JsValue {
        to_js("get_config", self.engine.config())
    }

    /// Next time something will change without input, if any
    #[wasm_bindgen]
    pub fn next_timer_due(&self) -> Option<f64> {
        self.engine.next_timer_due().map(|due| due as f64)
    }

    /// Get the session so far as SCALE-encoded bytes
    #[wasm_bindgen]
    pub fn get_recording_scale(&self) -> Vec<u8> {
        self.recording.encode_bytes()
    }
}
