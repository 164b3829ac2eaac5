mod gesture;
mod selection;

use crate::catalog::BattleSetup;
use crate::config::FinaleRules;
use crate::engine::CombatEngine;
use crate::gesture::{PointerEvent, PointerTarget};
use crate::state::{CombatState, GamePhase, Scenario};
use crate::types::*;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn strike(id: CardId) -> Card {
    Card::new(id, "Strike", 1, "Deal 6 damage.", CardType::Attack)
}

fn defend(id: CardId) -> Card {
    Card::new(id, "Defend", 1, "Gain 5 Block.", CardType::Skill)
}

fn card(id: CardId, cost: i32, card_type: CardType) -> Card {
    Card::new(id, "Test", cost, "Deal 1 damage.", card_type)
}

fn enemy(id: &str, hp: i32) -> EnemyState {
    EnemyState::new(id, hp, hp.max(100), EnemyIntent::Unknown)
}

fn setup(enemies: Vec<EnemyState>, hand: Vec<Card>, mana: i32) -> BattleSetup {
    BattleSetup {
        enemies: Some(enemies),
        hand,
        mana,
        max_mana: Some(mana),
    }
}

/// A combat state with phase already recomputed
fn battle(
    scenario: Scenario,
    enemies: Vec<EnemyState>,
    hand: Vec<Card>,
    mana: i32,
) -> CombatState {
    let mut state = CombatState::from_setup(scenario, setup(enemies, hand, mana));
    state.refresh_phase(&FinaleRules::default());
    state
}

fn engine_with(
    scenario: Scenario,
    enemies: Vec<EnemyState>,
    hand: Vec<Card>,
    mana: i32,
) -> CombatEngine {
    let mut engine = CombatEngine::new(scenario);
    engine.reset_with(scenario, setup(enemies, hand, mana));
    engine
}

fn on_card(id: CardId, x: i32, y: i32, at: Millis) -> PointerEvent {
    PointerEvent::new(x, y, at, PointerTarget::Card { id })
}

fn on_enemies(x: i32, y: i32, at: Millis) -> PointerEvent {
    PointerEvent::new(x, y, at, PointerTarget::EnemyZone)
}

fn on_deck(x: i32, y: i32, at: Millis) -> PointerEvent {
    PointerEvent::new(x, y, at, PointerTarget::Deck)
}

fn elsewhere(x: i32, y: i32, at: Millis) -> PointerEvent {
    PointerEvent::new(x, y, at, PointerTarget::Elsewhere)
}

/// The finale-readiness invariant
fn assert_phase_invariant(state: &CombatState) {
    if state.phase == GamePhase::BattleFinaleReady {
        let total = state.total_enemy_hp();
        assert!(
            total > 0 && total <= 50,
            "finale ready with total enemy hp {}",
            total
        );
        assert!(state.mana >= 3, "finale ready with mana {}", state.mana);
        assert!(!state.hand.is_empty(), "finale ready with empty hand");
    }
}
