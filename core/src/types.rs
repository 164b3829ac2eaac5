//! Value types shared by every layer of the engine.

use alloc::string::{String, ToString};
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::effects::parse_effect;

/// Card identifier, unique within a hand (not across catalogs)
pub type CardId = u32;

/// Milliseconds on the engine's monotonic clock
pub type Millis = u64;

/// Discriminated card type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode, TypeInfo,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Attack,
    Skill,
    Power,
    Status,
    Curse,
}

/// Numeric effect recovered from the card text when the card is built.
///
/// Only ATTACK cards carry damage ("Deal N") and only SKILL cards carry
/// block ("Gain N"). Text that does not match contributes zero.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo,
)]
#[serde(rename_all = "camelCase")]
pub struct CardEffect {
    pub damage: i32,
    pub block: i32,
}

/// An immutable playable card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub cost: i32,
    pub description: String,
    pub card_type: CardType,
    pub effect: CardEffect,
}

impl Card {
    /// Negative costs are clamped to zero.
    pub fn new(id: CardId, name: &str, cost: i32, description: &str, card_type: CardType) -> Self {
        Self {
            id,
            name: name.to_string(),
            cost: cost.max(0),
            description: description.to_string(),
            card_type,
            effect: parse_effect(card_type, description),
        }
    }

    pub fn is_affordable(&self, mana: i32) -> bool {
        self.cost <= mana
    }
}

/// What an enemy plans to do next turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EnemyIntent {
    Attack { value: i32 },
    Defend { value: i32 },
    Debuff,
    Unknown,
}

/// A single enemy in the battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(rename_all = "camelCase")]
pub struct EnemyState {
    pub id: String,
    pub hp: i32,
    pub max_hp: i32,
    pub intent: EnemyIntent,
    /// Set for one hit-flash cycle after being struck
    pub was_hit: bool,
}

impl EnemyState {
    /// Build an enemy, clamping `hp` into `[0, max_hp]`.
    pub fn new(id: &str, hp: i32, max_hp: i32, intent: EnemyIntent) -> Self {
        let max_hp = max_hp.max(0);
        Self {
            id: id.to_string(),
            hp: hp.clamp(0, max_hp),
            max_hp,
            intent,
            was_hit: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Apply damage, never dropping below zero. Negative amounts are ignored.
    pub fn take_damage(&mut self, amount: i32) {
        self.hp = self.hp.saturating_sub(amount.max(0)).max(0);
    }
}

/// Screen position in CSS pixels
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Size of the rendering surface the pointer coordinates refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True when `y` lies above `percent`% of the viewport height.
    pub fn is_above(&self, y: i32, percent: u32) -> bool {
        (y as i64) * 100 < (self.height as i64) * (percent as i64)
    }

    /// True when `y` lies below `percent`% of the viewport height.
    pub fn is_below(&self, y: i32, percent: u32) -> bool {
        (y as i64) * 100 > (self.height as i64) * (percent as i64)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}
