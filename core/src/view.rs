//! View types for UI serialization
//!
//! Everything the renderer needs for one frame, flattened out of the engine.

use alloc::string::String;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

use crate::gesture::Track;
use crate::state::*;
use crate::types::*;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// View of a hand card
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct CardView {
    pub id: CardId,
    pub name: String,
    pub cost: i32,
    pub description: String,
    pub card_type: CardType,
    pub damage: i32,
    pub block: i32,
    /// Cost fits the current mana
    pub affordable: bool,
    /// Part of the chain being dragged
    pub held: bool,
}

impl CardView {
    fn from_card(card: &Card, mana: i32, held: bool) -> Self {
        Self {
            id: card.id,
            name: card.name.clone(),
            cost: card.cost,
            description: card.description.clone(),
            card_type: card.card_type,
            damage: card.effect.damage,
            block: card.effect.block,
            affordable: card.is_affordable(mana),
            held,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct EnemyView {
    pub id: String,
    pub hp: i32,
    pub max_hp: i32,
    pub intent: EnemyIntent,
    pub was_hit: bool,
    pub alive: bool,
}

impl From<&EnemyState> for EnemyView {
    fn from(enemy: &EnemyState) -> Self {
        Self {
            id: enemy.id.clone(),
            hp: enemy.hp,
            max_hp: enemy.max_hp,
            intent: enemy.intent,
            was_hit: enemy.was_hit,
            alive: enemy.is_alive(),
        }
    }
}

/// The live gesture, if any
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct TrackView {
    /// "chain", "finale", "destiny" or "swipe"
    pub kind: String,
    /// Hold threshold passed (always true for chains and swipes)
    pub active: bool,
    pub position: Option<Point>,
    pub cards: Vec<CardId>,
    /// Total cost of the dragged chain
    pub chain_cost: i32,
}

impl TrackView {
    fn from_track(track: &Track) -> Option<Self> {
        let kind = track.kind()?;
        let cards = track.dragged_cards();
        let active = match track {
            Track::FinaleCharge { .. } | Track::DestinyCharge { .. } => track.is_charge_active(),
            _ => true,
        };
        Some(Self {
            kind: String::from(kind.as_str()),
            active,
            position: track.position(),
            cards: cards.iter().map(|c| c.id).collect(),
            chain_cost: cards
                .iter()
                .fold(0i32, |total, c| total.saturating_add(c.cost)),
        })
    }
}

/// The complete combat view sent to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct CombatView {
    pub scenario: String,
    pub phase: String,
    pub enemies: Vec<EnemyView>,
    pub hand: Vec<CardView>,
    pub mana: i32,
    pub max_mana: i32,
    pub total_enemy_hp: i32,
    pub last_block: i32,
    pub combat_log: Option<String>,
    pub track: Option<TrackView>,
    pub destiny_used: bool,
    pub destiny_discarding: bool,
    pub finale_origin: Option<Point>,
    /// Card lifted by a swipe press
    pub held_card: Option<CardId>,
}

impl CombatView {
    pub fn from_state(state: &CombatState, track: &Track) -> Self {
        let held = track.dragged_cards();
        Self {
            scenario: String::from(state.scenario.as_str()),
            phase: String::from(state.phase.as_str()),
            enemies: state.enemies.iter().map(EnemyView::from).collect(),
            hand: state
                .hand
                .iter()
                .map(|card| {
                    let is_held = held.iter().any(|h| h.id == card.id);
                    CardView::from_card(card, state.mana, is_held)
                })
                .collect(),
            mana: state.mana,
            max_mana: state.max_mana,
            total_enemy_hp: state.total_enemy_hp(),
            last_block: state.last_block,
            combat_log: state.combat_log.as_ref().map(|l| l.text.clone()),
            track: TrackView::from_track(track),
            destiny_used: state.destiny_used,
            destiny_discarding: state.destiny_discarding,
            finale_origin: state.finale_origin,
            held_card: match track {
                Track::Swipe { card, .. } => Some(*card),
                _ => None,
            },
        }
    }
}
