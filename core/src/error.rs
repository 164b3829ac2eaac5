//! Error types for engine entry points
//!
//! Gesture problems are never errors: they resolve to a cancelled or ignored
//! gesture. Only malformed calls from the host surface here.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use crate::types::Millis;

/// Errors raised by the orchestrator and its helpers
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "type", rename_all = "camelCase"))]
pub enum GameError {
    /// Scenario name not recognised
    UnknownScenario,
    /// Viewport must have positive dimensions
    InvalidViewport { width: i32, height: i32 },
    /// Event timestamp is earlier than the engine clock
    ClockWentBackwards { now: Millis, at: Millis },
    /// Recorded session bytes could not be decoded
    MalformedRecording,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::UnknownScenario => write!(f, "unknown scenario"),
            GameError::InvalidViewport { width, height } => {
                write!(f, "invalid viewport {}x{}", width, height)
            }
            GameError::ClockWentBackwards { now, at } => {
                write!(f, "event at {}ms is earlier than engine clock {}ms", at, now)
            }
            GameError::MalformedRecording => write!(f, "malformed recording"),
        }
    }
}

/// Result type alias for engine operations
pub type GameResult<T> = Result<T, GameError>;
