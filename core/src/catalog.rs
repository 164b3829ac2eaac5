//! Static card and enemy rosters plus per-scenario battle setups.

use alloc::vec;
use alloc::vec::Vec;

use crate::state::Scenario;
use crate::types::{Card, CardId, CardType, EnemyIntent, EnemyState};

/// Name of the card handed out by a destiny draw
pub const DESTINY_CARD_NAME: &str = "DESTINY_DRAW";

/// Starting hand for most scenarios
pub fn standard_hand() -> Vec<Card> {
    vec![
        Card::new(1, "STRIKE_V1", 1, "Deal 6 damage.", CardType::Attack),
        Card::new(2, "SHIELD_OS", 1, "Gain 5 Block.", CardType::Skill),
        Card::new(3, "STRIKE_V1", 1, "Deal 6 damage.", CardType::Attack),
        Card::new(
            4,
            "BASH_EXE",
            2,
            "Deal 8 damage. Apply 2 Vulnerable.",
            CardType::Attack,
        ),
        Card::new(5, "SHIELD_OS", 1, "Gain 5 Block.", CardType::Skill),
    ]
}

/// Strong hand dealt by the finale favorable setup
pub fn favorable_hand() -> Vec<Card> {
    vec![
        Card::new(6, "H_BLADE++", 2, "Deal 15 damage.", CardType::Attack),
        Card::new(7, "SHRUG_OFF", 1, "Gain 8 Block. Draw 1 card.", CardType::Skill),
        Card::new(8, "RAMPAGE", 1, "Deal 8 damage. Scale +5.", CardType::Attack),
        Card::new(9, "FLEX_MOD", 0, "Gain 2 Strength.", CardType::Skill),
        Card::new(
            10,
            "THUNDER",
            1,
            "Deal 4 damage. Apply Vulnerable ALL.",
            CardType::Attack,
        ),
    ]
}

/// Eight mixed-cost cards for the sort scenario
pub fn sort_hand() -> Vec<Card> {
    vec![
        Card::new(11, "OBLITERATE", 4, "Deal 20 damage.", CardType::Attack),
        Card::new(12, "NULLIFY", 1, "Gain 5 Block.", CardType::Skill),
        Card::new(13, "ZAP", 0, "Deal 3 damage.", CardType::Skill),
        Card::new(14, "BASH_EXE", 2, "Deal 8 damage.", CardType::Attack),
        Card::new(15, "STRIKE_V1", 1, "Deal 6 damage.", CardType::Attack),
        Card::new(16, "REBOOT", 0, "Shuffle hand.", CardType::Skill),
        Card::new(17, "METEOR", 5, "Deal 30 damage.", CardType::Attack),
        Card::new(18, "CORE_DUMP", 1, "Remove all debuffs.", CardType::Skill),
    ]
}

/// Finishing hand used against the dying guardian
pub fn finishing_hand() -> Vec<Card> {
    vec![
        Card::new(1, "Finishing Blow", 1, "Deal 5 damage.", CardType::Attack),
        Card::new(2, "Defend", 1, "Gain 5 Block.", CardType::Skill),
        Card::new(3, "Strike", 1, "Deal 6 damage.", CardType::Attack),
    ]
}

/// The single card a destiny draw replaces the hand with
pub fn destiny_card(id: CardId) -> Card {
    Card::new(
        id,
        DESTINY_CARD_NAME,
        0,
        "Deal 50 damage. Draw 2 cards.",
        CardType::Attack,
    )
}

/// Default three-enemy roster
pub fn standard_enemies() -> Vec<EnemyState> {
    vec![
        EnemyState::new("enemy_1", 120, 120, EnemyIntent::Attack { value: 15 }),
        EnemyState::new("enemy_2", 150, 150, EnemyIntent::Defend { value: 20 }),
        EnemyState::new("enemy_3", 120, 120, EnemyIntent::Attack { value: 15 }),
    ]
}

/// Two badly hurt enemies, low enough for a finale
pub fn weakened_enemies() -> Vec<EnemyState> {
    vec![
        EnemyState::new("enemy_1", 15, 120, EnemyIntent::Debuff),
        EnemyState::new("enemy_2", 10, 150, EnemyIntent::Unknown),
    ]
}

/// Single guardian one hit from death
pub fn dying_guardian() -> Vec<EnemyState> {
    vec![EnemyState::new(
        "dying_guardian",
        1,
        100,
        EnemyIntent::Attack { value: 5 },
    )]
}

/// Boss roster
pub fn boss_enemies() -> Vec<EnemyState> {
    vec![EnemyState::new(
        "boss_omega",
        500,
        500,
        EnemyIntent::Attack { value: 50 },
    )]
}

/// Starting data for a battle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleSetup {
    /// `None` keeps the current roster
    pub enemies: Option<Vec<EnemyState>>,
    pub hand: Vec<Card>,
    pub mana: i32,
    /// `None` keeps the current maximum
    pub max_mana: Option<i32>,
}

impl BattleSetup {
    /// What a fresh battle in `scenario` starts with
    pub fn standard(scenario: Scenario) -> Self {
        let hand = match scenario {
            Scenario::Spinning => sort_hand(),
            _ => standard_hand(),
        };
        Self {
            enemies: Some(standard_enemies()),
            hand,
            mana: 3,
            max_mana: Some(3),
        }
    }

    /// The favorable conditions forced by the debug setup for `scenario`
    pub fn favorable(scenario: Scenario) -> Self {
        match scenario {
            Scenario::Finale => Self {
                enemies: Some(weakened_enemies()),
                hand: favorable_hand(),
                mana: 5,
                max_mana: Some(5),
            },
            Scenario::MultiPlay => Self {
                enemies: Some(standard_enemies()),
                hand: standard_hand(),
                mana: 4,
                max_mana: Some(4),
            },
            Scenario::Spinning => Self {
                enemies: None,
                hand: sort_hand(),
                mana: 3,
                max_mana: Some(3),
            },
            Scenario::DestinyDraw => Self {
                enemies: None,
                hand: standard_hand(),
                mana: 3,
                max_mana: Some(3),
            },
            Scenario::Reward => Self {
                enemies: Some(dying_guardian()),
                hand: finishing_hand(),
                mana: 3,
                max_mana: None,
            },
        }
    }

    /// A boss fight with the standard hand
    pub fn boss() -> Self {
        Self {
            enemies: Some(boss_enemies()),
            hand: standard_hand(),
            mana: 3,
            max_mana: Some(3),
        }
    }
}
