//! Timing and threshold configuration for the engine.

use crate::types::Millis;
use serde::{Deserialize, Serialize};

/// Hold time before a finale charge becomes active
pub const FINALE_HOLD_MS: Millis = 300;
/// Hold time before a destiny-draw charge becomes active
pub const DESTINY_HOLD_MS: Millis = 300;
/// How long the `was_hit` flash stays on enemies
pub const HIT_FLASH_MS: Millis = 300;
/// Lifetime of a combat log message
pub const COMBAT_LOG_MS: Millis = 2500;
/// Death animation before victory is declared
pub const VICTORY_DELAY_MS: Millis = 1500;
/// Finale explosion before victory is declared
pub const FINALE_ANIMATION_MS: Millis = 2500;
/// Discard animation before the hand empties
pub const DESTINY_DISCARD_MS: Millis = 800;
/// Pause between the empty hand and the replacement card
pub const DESTINY_REDRAW_MS: Millis = 200;

/// Finale commits when released above this share of the viewport height
pub const FINALE_COMMIT_PERCENT: u32 = 70;
/// Destiny draw commits when released below this share of the viewport height
pub const DESTINY_COMMIT_PERCENT: u32 = 60;
/// Smallest hand that can be traded for a destiny draw
pub const DESTINY_MIN_HAND: usize = 3;

/// Swipe velocity is only measured after this much hold time
pub const SWIPE_MIN_ELAPSED_MS: Millis = 30;
/// Leftward velocity (px/ms) that counts as a swipe
pub const SWIPE_VELOCITY_THRESHOLD: f32 = -0.5;
/// Leftward travel (px) that counts as a swipe
pub const SWIPE_DISTANCE_THRESHOLD: i32 = -50;

/// Finale becomes available at or below this total enemy hp
pub const FINALE_MAX_TOTAL_HP: i32 = 50;
/// Mana required for a finale
pub const FINALE_MIN_MANA: i32 = 3;

/// When the finale can be charged
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinaleRules {
    pub max_total_hp: i32,
    pub min_mana: i32,
}

impl Default for FinaleRules {
    fn default() -> Self {
        Self {
            max_total_hp: FINALE_MAX_TOTAL_HP,
            min_mana: FINALE_MIN_MANA,
        }
    }
}

/// Gesture thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureConfig {
    pub finale_hold_ms: Millis,
    pub destiny_hold_ms: Millis,
    pub finale_commit_percent: u32,
    pub destiny_commit_percent: u32,
    pub destiny_min_hand: usize,
    pub swipe_min_elapsed_ms: Millis,
    pub swipe_velocity_threshold: f32,
    pub swipe_distance_threshold: i32,
    /// Re-check eligibility on release and cancel if it lapsed mid-gesture
    pub revalidate_on_commit: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            finale_hold_ms: FINALE_HOLD_MS,
            destiny_hold_ms: DESTINY_HOLD_MS,
            finale_commit_percent: FINALE_COMMIT_PERCENT,
            destiny_commit_percent: DESTINY_COMMIT_PERCENT,
            destiny_min_hand: DESTINY_MIN_HAND,
            swipe_min_elapsed_ms: SWIPE_MIN_ELAPSED_MS,
            swipe_velocity_threshold: SWIPE_VELOCITY_THRESHOLD,
            swipe_distance_threshold: SWIPE_DISTANCE_THRESHOLD,
            revalidate_on_commit: true,
        }
    }
}

/// Animation pacing delays applied after committed actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PacingConfig {
    pub hit_flash_ms: Millis,
    pub combat_log_ms: Millis,
    pub victory_delay_ms: Millis,
    pub finale_animation_ms: Millis,
    pub destiny_discard_ms: Millis,
    pub destiny_redraw_ms: Millis,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            hit_flash_ms: HIT_FLASH_MS,
            combat_log_ms: COMBAT_LOG_MS,
            victory_delay_ms: VICTORY_DELAY_MS,
            finale_animation_ms: FINALE_ANIMATION_MS,
            destiny_discard_ms: DESTINY_DISCARD_MS,
            destiny_redraw_ms: DESTINY_REDRAW_MS,
        }
    }
}

/// Everything tunable about the engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    pub finale: FinaleRules,
    pub gestures: GestureConfig,
    pub pacing: PacingConfig,
}
