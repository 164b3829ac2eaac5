#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod catalog;
pub mod config;
pub mod effects;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod log;
pub mod replay;
pub mod resolver;
pub mod state;
pub mod timers;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use catalog::BattleSetup;
pub use config::EngineConfig;
pub use engine::CombatEngine;
pub use error::{GameError, GameResult};
pub use gesture::{GestureOutcome, PointerEvent, PointerTarget, Track, TrackKind};
pub use replay::{InputEvent, Recording};
pub use resolver::{apply, select_chain, Action, CombatEvent, Followup, Intent, Resolution};
pub use state::*;
pub use types::*;
pub use view::*;
