//! Action Resolver
//!
//! A pure reducer: `apply(state, action)` returns the next state together
//! with the events it produced and the follow-up steps to schedule. It never
//! touches the orchestrator's copy of the state, so every rule can be tested
//! on plain values.

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::catalog::{destiny_card, BattleSetup};
use crate::config::EngineConfig;
use crate::gesture::TrackKind;
use crate::log;
use crate::state::{CombatState, GamePhase};
use crate::types::{Card, CardId, CardType, Millis, Point};

/// High-level action committed by a finished gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Intent {
    /// Play the listed hand cards together against the enemies
    PlayChain { cards: Vec<CardId> },
    /// Instantly defeat every enemy
    ExecuteFinale { origin: Point },
    /// Trade the whole hand for the destiny card
    ExecuteDestinyDraw,
    /// Stable sort of the hand by ascending cost
    SortHand,
    /// Force the scenario's favorable conditions
    SetupFavorable,
}

/// Delayed step of an action, fired from the timer queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Followup {
    ClearHitFlash,
    ExpireCombatLog { serial: u32 },
    FinishDestinyDiscard,
    DrawDestinyCard,
    FinishFinale,
    DeclareVictory,
}

/// Input to the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Commit(Intent),
    Followup(Followup),
}

/// Events produced for the host (sound, routing, analytics)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum CombatEvent {
    #[serde(rename_all = "camelCase")]
    ChainPlayed {
        cards: Vec<CardId>,
        cost: i32,
        damage: i32,
        block: i32,
        target: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    FinaleExecuted { origin: Point },
    DestinyDrawStarted,
    #[serde(rename_all = "camelCase")]
    DestinyCardDrawn { card_id: CardId },
    HandSorted,
    FavorableSetupApplied,
    #[serde(rename_all = "camelCase")]
    GestureCancelled { track: TrackKind },
    /// One-shot signal for the screen router
    BattleWon,
}

/// A follow-up to run `delay` ms from now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub delay: Millis,
    pub followup: Followup,
}

/// Outcome of one reducer step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub state: CombatState,
    pub events: Vec<CombatEvent>,
    pub scheduled: Vec<Scheduled>,
}

impl Resolution {
    fn from_state(state: CombatState) -> Self {
        Self {
            state,
            events: Vec::new(),
            scheduled: Vec::new(),
        }
    }

    fn schedule(&mut self, delay: Millis, followup: Followup) {
        self.scheduled.push(Scheduled { delay, followup });
    }
}

/// Cards picked up when `pressed` is long-pressed.
///
/// With multi-select, every card sharing the pressed card's type is a
/// candidate (pressed card first, then hand order) and is taken while the
/// running cost still fits in `mana`. Otherwise only the pressed card is
/// taken. An unaffordable or missing pressed card selects nothing.
pub fn select_chain(hand: &[Card], pressed: CardId, mana: i32, multi_select: bool) -> Vec<Card> {
    let Some(start) = hand.iter().find(|c| c.id == pressed) else {
        return Vec::new();
    };
    if !start.is_affordable(mana) {
        return Vec::new();
    }
    if !multi_select {
        return vec![start.clone()];
    }

    let candidates = core::iter::once(start).chain(
        hand.iter()
            .filter(|c| c.card_type == start.card_type && c.id != pressed),
    );

    let mut cost: i32 = 0;
    let mut selected = Vec::new();
    for card in candidates {
        if let Some(next) = cost.checked_add(card.cost).filter(|next| *next <= mana) {
            cost = next;
            selected.push(card.clone());
        }
    }
    selected
}

/// Feedback line for a played chain, if there is anything to say
pub fn chain_summary(cards: &[Card], damage: i32, block: i32) -> Option<String> {
    if cards.len() > 1 {
        let type_name = if cards[0].card_type == CardType::Attack {
            "Assault"
        } else {
            "Defense"
        };
        let damage_text = if damage > 0 {
            format!(" // DMG: {}", damage)
        } else {
            String::new()
        };
        let block_text = if block > 0 {
            format!(" // BLK: {}", block)
        } else {
            String::new()
        };
        Some(format!(
            "{} Chain [x{}]{}{}",
            type_name,
            cards.len(),
            damage_text,
            block_text
        ))
    } else if damage > 0 {
        Some(format!("-{} Vitality", damage))
    } else if block > 0 {
        Some(format!("+{} Guard", block))
    } else {
        None
    }
}

/// Apply `action` to a copy of `state`.
///
/// After every step the finale readiness is recomputed and, if the last
/// enemy just fell, a delayed victory is scheduled.
pub fn apply(state: &CombatState, action: &Action, config: &EngineConfig) -> Resolution {
    let mut res = Resolution::from_state(state.clone());

    match action {
        Action::Commit(intent) => match intent {
            Intent::PlayChain { cards } => play_chain(&mut res, cards, config),
            Intent::ExecuteFinale { origin } => execute_finale(&mut res, *origin, config),
            Intent::ExecuteDestinyDraw => execute_destiny_draw(&mut res, config),
            Intent::SortHand => {
                res.state.hand.sort_by_key(|c| c.cost);
                res.events.push(CombatEvent::HandSorted);
            }
            Intent::SetupFavorable => {
                let setup = BattleSetup::favorable(res.state.scenario);
                res.state.apply_setup(setup);
                res.events.push(CombatEvent::FavorableSetupApplied);
            }
        },
        Action::Followup(followup) => run_followup(&mut res, *followup, config),
    }

    res.state.refresh_phase(&config.finale);
    check_victory(&mut res, config);
    res
}

/// Run the post-action checks on a freshly (re)initialized battle, so a
/// roster that starts dead still reaches victory.
pub fn settle(state: CombatState, config: &EngineConfig) -> Resolution {
    let mut res = Resolution::from_state(state);
    res.state.refresh_phase(&config.finale);
    check_victory(&mut res, config);
    res
}

fn saturating_total(amounts: impl Iterator<Item = i32>) -> i32 {
    amounts.fold(0i32, |total, n| total.saturating_add(n))
}

fn play_chain(res: &mut Resolution, ids: &[CardId], config: &EngineConfig) {
    let state = &mut res.state;
    let has_duplicates = ids.iter().enumerate().any(|(i, id)| ids[..i].contains(id));
    if ids.is_empty() || has_duplicates || !state.holds_all(ids) {
        log::result(false, "play_chain: cards are not all in hand");
        return;
    }

    let played: Vec<Card> = ids
        .iter()
        .filter_map(|id| state.find_card(*id).cloned())
        .collect();
    let total_cost = played.iter().try_fold(0i32, |total, c| total.checked_add(c.cost));
    let Some(cost) = total_cost else {
        log::result(false, "play_chain: cost overflows");
        return;
    };
    if !state.can_afford(cost) {
        log::result(false, &format!("play_chain: cost {} > mana {}", cost, state.mana));
        return;
    }
    let damage = saturating_total(played.iter().map(|c| c.effect.damage));
    let block = saturating_total(played.iter().map(|c| c.effect.block));

    state.mana = state.mana.saturating_sub(cost).clamp(0, state.max_mana.max(0));
    state.hand.retain(|c| !ids.contains(&c.id));
    state.last_block = block;

    let target = match state.first_living_enemy() {
        Some(idx) if damage > 0 => {
            let enemy = &mut state.enemies[idx];
            enemy.take_damage(damage);
            enemy.was_hit = true;
            Some(enemy.id.clone())
        }
        _ => {
            for enemy in state.enemies.iter_mut() {
                enemy.was_hit = true;
            }
            None
        }
    };

    log::action(
        "play_chain",
        &format!("cards={} cost={} dmg={} blk={}", played.len(), cost, damage, block),
    );

    if let Some(text) = chain_summary(&played, damage, block) {
        let serial = state.set_combat_log(text);
        res.schedule(
            config.pacing.combat_log_ms,
            Followup::ExpireCombatLog { serial },
        );
    }
    res.schedule(config.pacing.hit_flash_ms, Followup::ClearHitFlash);
    res.events.push(CombatEvent::ChainPlayed {
        cards: ids.to_vec(),
        cost,
        damage,
        block,
        target,
    });
}

fn execute_finale(res: &mut Resolution, origin: Point, config: &EngineConfig) {
    let state = &mut res.state;
    log::action("execute_finale", &format!("origin=({}, {})", origin.x, origin.y));
    state.finale_origin = Some(origin);
    state.phase = GamePhase::FinaleAnimation;
    for enemy in state.enemies.iter_mut() {
        enemy.hp = 0;
    }
    res.schedule(config.pacing.finale_animation_ms, Followup::FinishFinale);
    res.events.push(CombatEvent::FinaleExecuted { origin });
}

fn execute_destiny_draw(res: &mut Resolution, config: &EngineConfig) {
    let state = &mut res.state;
    if state.destiny_used {
        log::result(false, "destiny draw already used this battle");
        return;
    }
    log::action("execute_destiny_draw", &format!("discarding {} cards", state.hand.len()));
    state.destiny_used = true;
    state.destiny_discarding = true;
    let serial = state.set_combat_log(String::from("Destiny Draw!"));
    res.schedule(
        config.pacing.combat_log_ms,
        Followup::ExpireCombatLog { serial },
    );
    res.schedule(
        config.pacing.destiny_discard_ms,
        Followup::FinishDestinyDiscard,
    );
    res.events.push(CombatEvent::DestinyDrawStarted);
}

fn run_followup(res: &mut Resolution, followup: Followup, config: &EngineConfig) {
    let state = &mut res.state;
    match followup {
        Followup::ClearHitFlash => {
            for enemy in state.enemies.iter_mut() {
                enemy.was_hit = false;
            }
        }
        Followup::ExpireCombatLog { serial } => {
            if state.combat_log.as_ref().map(|l| l.serial) == Some(serial) {
                state.combat_log = None;
            }
        }
        Followup::FinishDestinyDiscard => {
            if state.destiny_discarding {
                state.hand.clear();
                state.destiny_discarding = false;
                res.schedule(config.pacing.destiny_redraw_ms, Followup::DrawDestinyCard);
            }
        }
        Followup::DrawDestinyCard => {
            if state.destiny_used && state.hand.is_empty() {
                let card_id = state.generate_card_id();
                state.hand.push(destiny_card(card_id));
                res.events.push(CombatEvent::DestinyCardDrawn { card_id });
            }
        }
        Followup::FinishFinale => {
            if state.phase == GamePhase::FinaleAnimation {
                state.phase = GamePhase::Victory;
                log::info("=== VICTORY (finale) ===");
                res.events.push(CombatEvent::BattleWon);
            }
        }
        Followup::DeclareVictory => {
            state.victory_pending = false;
            if state.phase.is_battling() && state.all_enemies_dead() {
                state.phase = GamePhase::Victory;
                log::info("=== VICTORY ===");
                res.events.push(CombatEvent::BattleWon);
            }
        }
    }
}

fn check_victory(res: &mut Resolution, config: &EngineConfig) {
    let state = &mut res.state;
    if state.phase.is_battling() && state.all_enemies_dead() && !state.victory_pending {
        state.victory_pending = true;
        res.schedule(config.pacing.victory_delay_ms, Followup::DeclareVictory);
    }
}
