//! Recorded input sessions
//!
//! The engine is a pure function of its input stream, so a `Recording` of
//! inputs replays into an identical engine. Recordings travel as SCALE bytes.

use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::engine::CombatEngine;
use crate::error::{GameError, GameResult};
use crate::gesture::PointerEvent;
use crate::state::Scenario;
use crate::types::{Millis, Viewport};

/// One host input, as fed to the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum InputEvent {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    Advance { at: Millis },
    Resize(Viewport),
    SetupFavorable,
}

impl CombatEngine {
    /// Feed one recorded input.
    pub fn apply_input(&mut self, input: &InputEvent) -> GameResult<()> {
        match input {
            InputEvent::PointerDown(event) => self.pointer_down(event).map(|_| ()),
            InputEvent::PointerMove(event) => self.pointer_move(event).map(|_| ()),
            InputEvent::PointerUp(event) => self.pointer_up(event).map(|_| ()),
            InputEvent::Advance { at } => self.advance_to(*at),
            InputEvent::Resize(viewport) => self.resize(*viewport),
            InputEvent::SetupFavorable => {
                self.setup_favorable();
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(rename_all = "camelCase")]
pub struct Recording {
    pub scenario: Scenario,
    /// Session started from the boss roster
    pub boss: bool,
    pub viewport: Viewport,
    pub inputs: Vec<InputEvent>,
}

impl Recording {
    pub fn new(scenario: Scenario, viewport: Viewport) -> Self {
        Self {
            scenario,
            boss: false,
            viewport,
            inputs: Vec::new(),
        }
    }

    pub fn boss(scenario: Scenario, viewport: Viewport) -> Self {
        Self {
            boss: true,
            ..Self::new(scenario, viewport)
        }
    }

    pub fn push(&mut self, input: InputEvent) {
        self.inputs.push(input);
    }

    pub fn encode_bytes(&self) -> Vec<u8> {
        self.encode()
    }

    pub fn decode_bytes(bytes: &[u8]) -> GameResult<Self> {
        let mut input = bytes;
        let recording = Self::decode(&mut input).map_err(|_| GameError::MalformedRecording)?;
        if !input.is_empty() {
            return Err(GameError::MalformedRecording);
        }
        Ok(recording)
    }

    /// Replay into a fresh engine with default config.
    pub fn replay(&self) -> GameResult<CombatEngine> {
        self.replay_with(EngineConfig::default())
    }

    /// Replay into a fresh engine. Stops at the first input the engine
    /// rejects.
    pub fn replay_with(&self, config: EngineConfig) -> GameResult<CombatEngine> {
        let mut engine = CombatEngine::with_config(self.scenario, config);
        if self.boss {
            engine.reset_boss(self.scenario);
        }
        engine.resize(self.viewport)?;
        for input in &self.inputs {
            engine.apply_input(input)?;
        }
        Ok(engine)
    }
}
