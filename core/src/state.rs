use alloc::string::String;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::catalog::BattleSetup;
use crate::config::FinaleRules;
use crate::types::*;

/// First card id handed out for cards minted during a battle
pub const MINTED_CARD_ID_START: CardId = 1000;

/// Coarse phase of the battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    BattleNormal,
    BattleFinaleReady,
    FinaleAnimation,
    Victory,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::BattleNormal => "battleNormal",
            GamePhase::BattleFinaleReady => "battleFinaleReady",
            GamePhase::FinaleAnimation => "finaleAnimation",
            GamePhase::Victory => "victory",
        }
    }

    /// Whether the player can still act
    pub fn is_battling(&self) -> bool {
        matches!(self, GamePhase::BattleNormal | GamePhase::BattleFinaleReady)
    }
}

/// Which interaction showcase is running; fixes the enabled gestures
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode, TypeInfo,
)]
#[serde(rename_all = "camelCase")]
pub enum Scenario {
    Finale,
    MultiPlay,
    Spinning,
    DestinyDraw,
    Reward,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::Finale,
        Scenario::MultiPlay,
        Scenario::Spinning,
        Scenario::DestinyDraw,
        Scenario::Reward,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Finale => "finale",
            Scenario::MultiPlay => "multiPlay",
            Scenario::Spinning => "spinning",
            Scenario::DestinyDraw => "destinyDraw",
            Scenario::Reward => "reward",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }

    pub fn allows_multi_select(&self) -> bool {
        matches!(self, Scenario::MultiPlay)
    }

    pub fn allows_finale(&self) -> bool {
        matches!(self, Scenario::Finale)
    }

    pub fn allows_destiny_draw(&self) -> bool {
        matches!(self, Scenario::DestinyDraw)
    }

    pub fn allows_swipe_sort(&self) -> bool {
        matches!(self, Scenario::Spinning)
    }
}

/// Transient feedback line shown after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(rename_all = "camelCase")]
pub struct CombatLog {
    pub text: String,
    /// Matches the expiry timer scheduled for this message
    pub serial: u32,
}

/// Snapshot of a battle, owned by the orchestrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(rename_all = "camelCase")]
pub struct CombatState {
    pub scenario: Scenario,
    pub enemies: Vec<EnemyState>,
    pub hand: Vec<Card>,
    pub mana: i32,
    pub max_mana: i32,
    pub phase: GamePhase,
    pub destiny_used: bool,
    pub destiny_discarding: bool,
    /// Where the finale was unleashed
    pub finale_origin: Option<Point>,
    pub combat_log: Option<CombatLog>,
    /// Block produced by the last chain; display only
    pub last_block: i32,
    /// A delayed victory declaration is scheduled
    pub victory_pending: bool,
    pub next_log_serial: u32,
    pub next_card_id: CardId,
}

impl CombatState {
    pub fn new(scenario: Scenario) -> Self {
        Self::from_setup(scenario, BattleSetup::standard(scenario))
    }

    pub fn from_setup(scenario: Scenario, setup: BattleSetup) -> Self {
        let max_mana = setup.max_mana.unwrap_or(setup.mana).max(0);
        Self {
            scenario,
            enemies: setup.enemies.unwrap_or_default(),
            hand: setup.hand,
            mana: setup.mana.clamp(0, max_mana),
            max_mana,
            phase: GamePhase::BattleNormal,
            destiny_used: false,
            destiny_discarding: false,
            finale_origin: None,
            combat_log: None,
            last_block: 0,
            victory_pending: false,
            next_log_serial: 1,
            next_card_id: MINTED_CARD_ID_START,
        }
    }

    /// Overwrite roster, hand and mana with `setup`, keeping battle flags.
    pub fn apply_setup(&mut self, setup: BattleSetup) {
        if let Some(enemies) = setup.enemies {
            self.enemies = enemies;
        }
        self.hand = setup.hand;
        if let Some(max_mana) = setup.max_mana {
            self.max_mana = max_mana.max(0);
        }
        self.mana = setup.mana.max(0);
        self.max_mana = self.max_mana.max(self.mana);
    }

    /// Generate a unique card ID
    pub fn generate_card_id(&mut self) -> CardId {
        let id = self.next_card_id;
        self.next_card_id += 1;
        id
    }

    pub fn total_enemy_hp(&self) -> i32 {
        self.enemies
            .iter()
            .fold(0i32, |total, e| total.saturating_add(e.hp.max(0)))
    }

    /// Index of the first living enemy in roster order
    pub fn first_living_enemy(&self) -> Option<usize> {
        self.enemies.iter().position(|e| e.is_alive())
    }

    pub fn all_enemies_dead(&self) -> bool {
        !self.enemies.is_empty() && self.enemies.iter().all(|e| e.hp <= 0)
    }

    /// Check if player can afford a cost
    pub fn can_afford(&self, cost: i32) -> bool {
        self.mana >= cost
    }

    pub fn find_card(&self, id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == id)
    }

    pub fn holds_all(&self, ids: &[CardId]) -> bool {
        ids.iter().all(|id| self.find_card(*id).is_some())
    }

    /// Total cost of the cards with `ids` currently in hand
    pub fn cost_of(&self, ids: &[CardId]) -> i32 {
        ids.iter()
            .filter_map(|id| self.find_card(*id))
            .fold(0i32, |total, c| total.saturating_add(c.cost))
    }

    /// Whether the finale could be charged right now
    pub fn finale_conditions_met(&self, rules: &FinaleRules) -> bool {
        let total = self.total_enemy_hp();
        self.scenario.allows_finale()
            && total > 0
            && total <= rules.max_total_hp
            && self.mana >= rules.min_mana
            && !self.hand.is_empty()
    }

    /// Move between BATTLE_NORMAL and BATTLE_FINALE_READY as conditions
    /// change. Later phases are never touched.
    pub fn refresh_phase(&mut self, rules: &FinaleRules) {
        let ready = self.finale_conditions_met(rules);
        match self.phase {
            GamePhase::BattleNormal if ready => self.phase = GamePhase::BattleFinaleReady,
            GamePhase::BattleFinaleReady if !ready => self.phase = GamePhase::BattleNormal,
            _ => {}
        }
    }

    /// Replace the combat log line and return its serial.
    pub fn set_combat_log(&mut self, text: String) -> u32 {
        let serial = self.next_log_serial;
        self.next_log_serial = self.next_log_serial.wrapping_add(1);
        self.combat_log = Some(CombatLog { text, serial });
        serial
    }
}
