use super::*;
use crate::config::EngineConfig;
use crate::gesture::*;
use crate::resolver::Intent;
use crate::timers::TimerQueue;

fn viewport() -> Viewport {
    Viewport::new(1280, 720)
}

fn finale_ready() -> CombatState {
    battle(
        Scenario::Finale,
        vec![enemy("e1", 15), enemy("e2", 10)],
        vec![strike(1), defend(2)],
        5,
    )
}

fn destiny_state(hand_size: u32) -> CombatState {
    let hand = (1..=hand_size).map(strike).collect();
    battle(Scenario::DestinyDraw, vec![enemy("e1", 120)], hand, 3)
}

/// Arm a charge and fire its hold timer
fn activate(
    gestures: &mut GestureResolver,
    state: &CombatState,
    press: PointerEvent,
    timers: &mut TimerQueue,
) {
    let config = EngineConfig::default();
    assert!(matches!(
        gestures.pointer_down(state, &press, &config, timers),
        GestureOutcome::Started(_)
    ));
    let (id, _) = timers
        .pop_due(press.at + config.gestures.finale_hold_ms)
        .expect("hold timer scheduled");
    assert!(matches!(
        gestures.arm_timer_fired(id),
        GestureOutcome::Activated(_)
    ));
}

// ==========================================
// 1. CHAIN DRAG
// ==========================================

#[test]
fn test_chain_press_starts_drag_immediately() {
    let config = EngineConfig::default();
    let mut timers = TimerQueue::new();
    let mut gestures = GestureResolver::new();
    let state = battle(
        Scenario::MultiPlay,
        vec![enemy("e1", 100)],
        vec![strike(1), defend(2), strike(3)],
        3,
    );

    let outcome = gestures.pointer_down(&state, &on_card(3, 10, 600, 0), &config, &mut timers);
    assert_eq!(outcome, GestureOutcome::Started(TrackKind::Chain));
    assert!(timers.is_empty(), "Chain drags have no hold delay");
    let held: Vec<CardId> = gestures.track().dragged_cards().iter().map(|c| c.id).collect();
    assert_eq!(held, vec![3, 1]);

    let moved = gestures.pointer_move(&elsewhere(50, 300, 10), &config);
    assert_eq!(moved, GestureOutcome::Moved);
    assert_eq!(gestures.track().position(), Some(Point::new(50, 300)));

    let up = gestures.pointer_up(
        &state,
        &on_enemies(50, 200, 20),
        &viewport(),
        &config,
        &mut timers,
    );
    assert_eq!(up, GestureOutcome::Committed(Intent::PlayChain { cards: vec![3, 1] }));
    assert!(gestures.track().is_idle());
}

#[test]
fn test_chain_released_off_target_cancels() {
    let config = EngineConfig::default();
    let mut timers = TimerQueue::new();
    let mut gestures = GestureResolver::new();
    let state = battle(Scenario::Reward, vec![enemy("e1", 100)], vec![strike(1)], 3);

    gestures.pointer_down(&state, &on_card(1, 10, 600, 0), &config, &mut timers);
    let up = gestures.pointer_up(&state, &elsewhere(10, 650, 5), &viewport(), &config, &mut timers);
    assert_eq!(up, GestureOutcome::Cancelled(TrackKind::Chain));
    assert!(gestures.track().is_idle());
}

#[test]
fn test_unaffordable_press_is_ignored() {
    let config = EngineConfig::default();
    let mut timers = TimerQueue::new();
    let mut gestures = GestureResolver::new();
    let state = battle(
        Scenario::Reward,
        vec![enemy("e1", 100)],
        vec![card(1, 4, CardType::Attack)],
        3,
    );
    let outcome = gestures.pointer_down(&state, &on_card(1, 0, 0, 0), &config, &mut timers);
    assert_eq!(outcome, GestureOutcome::Ignored);
    assert!(gestures.track().is_idle());
}

#[test]
fn test_second_press_is_ignored_while_tracking() {
    let config = EngineConfig::default();
    let mut timers = TimerQueue::new();
    let mut gestures = GestureResolver::new();
    let state = finale_ready();

    gestures.pointer_down(&state, &on_card(1, 0, 600, 0), &config, &mut timers);
    let second = gestures.pointer_down(&state, &on_enemies(10, 100, 5), &config, &mut timers);
    assert_eq!(second, GestureOutcome::Ignored);
    assert!(timers.is_empty(), "No finale charge armed under a chain drag");
    assert_eq!(gestures.track().kind(), Some(TrackKind::Chain));
}

#[test]
fn test_chain_commit_revalidates_mana() {
    let mut config = EngineConfig::default();
    let mut timers = TimerQueue::new();
    let mut gestures = GestureResolver::new();
    let state = battle(Scenario::Reward, vec![enemy("e1", 100)], vec![strike(1)], 1);
    gestures.pointer_down(&state, &on_card(1, 0, 600, 0), &config, &mut timers);

    let mut drained = state.clone();
    drained.mana = 0;
    let up = gestures.pointer_up(&drained, &on_enemies(0, 100, 10), &viewport(), &config, &mut timers);
    assert_eq!(up, GestureOutcome::Cancelled(TrackKind::Chain));

    config.gestures.revalidate_on_commit = false;
    gestures.pointer_down(&state, &on_card(1, 0, 600, 20), &config, &mut timers);
    let up = gestures.pointer_up(&drained, &on_enemies(0, 100, 30), &viewport(), &config, &mut timers);
    assert_eq!(up, GestureOutcome::Committed(Intent::PlayChain { cards: vec![1] }));
}

// ==========================================
// 2. FINALE CHARGE
// ==========================================

#[test]
fn test_finale_needs_ready_phase() {
    let config = EngineConfig::default();
    let mut timers = TimerQueue::new();
    let mut gestures = GestureResolver::new();
    let state = battle(Scenario::Finale, vec![enemy("e1", 120)], vec![strike(1)], 5);
    assert_eq!(state.phase, GamePhase::BattleNormal);

    let outcome = gestures.pointer_down(&state, &on_enemies(0, 100, 0), &config, &mut timers);
    assert_eq!(outcome, GestureOutcome::Ignored);
    assert!(timers.is_empty());
}

#[test]
fn test_finale_release_before_hold_cancels_timer() {
    let config = EngineConfig::default();
    let mut timers = TimerQueue::new();
    let mut gestures = GestureResolver::new();
    let state = finale_ready();

    let down = gestures.pointer_down(&state, &on_enemies(600, 100, 0), &config, &mut timers);
    assert_eq!(down, GestureOutcome::Started(TrackKind::Finale));
    assert_eq!(timers.len(), 1);
    assert!(!gestures.track().is_charge_active());

    let up = gestures.pointer_up(&state, &on_enemies(600, 100, 200), &viewport(), &config, &mut timers);
    assert_eq!(up, GestureOutcome::Cancelled(TrackKind::Finale));
    assert!(timers.is_empty(), "Hold timer must be cancelled on release");
}

#[test]
fn test_stale_arm_timer_is_ignored() {
    let config = EngineConfig::default();
    let mut timers = TimerQueue::new();
    let mut gestures = GestureResolver::new();
    let state = finale_ready();

    gestures.pointer_down(&state, &on_enemies(600, 100, 0), &config, &mut timers);
    assert_eq!(timers.len(), 1);
    assert_eq!(gestures.arm_timer_fired(999), GestureOutcome::Ignored);
    assert!(!gestures.track().is_charge_active());
}

#[test]
fn test_finale_commits_only_in_top_band() {
    let config = EngineConfig::default();
    let state = finale_ready();

    let mut timers = TimerQueue::new();
    let mut gestures = GestureResolver::new();
    activate(&mut gestures, &state, on_enemies(600, 100, 0), &mut timers);
    assert!(gestures.track().is_charge_active());
    let up = gestures.pointer_up(&state, &elsewhere(640, 100, 400), &viewport(), &config, &mut timers);
    assert_eq!(
        up,
        GestureOutcome::Committed(Intent::ExecuteFinale {
            origin: Point::new(640, 100)
        })
    );

    // 70% of 720 is 504
    let mut gestures = GestureResolver::new();
    activate(&mut gestures, &state, on_enemies(600, 100, 500), &mut timers);
    let up = gestures.pointer_up(&state, &elsewhere(640, 504, 900), &viewport(), &config, &mut timers);
    assert_eq!(up, GestureOutcome::Cancelled(TrackKind::Finale));
}

#[test]
fn test_finale_commit_revalidates_eligibility() {
    let config = EngineConfig::default();
    let state = finale_ready();
    let mut timers = TimerQueue::new();
    let mut gestures = GestureResolver::new();
    activate(&mut gestures, &state, on_enemies(600, 100, 0), &mut timers);

    let mut spent = state.clone();
    spent.mana = 2;
    spent.refresh_phase(&config.finale);
    let up = gestures.pointer_up(&spent, &elsewhere(640, 100, 400), &viewport(), &config, &mut timers);
    assert_eq!(up, GestureOutcome::Cancelled(TrackKind::Finale));
}

// ==========================================
// 3. DESTINY CHARGE
// ==========================================

#[test]
fn test_destiny_needs_three_cards() {
    let config = EngineConfig::default();
    let mut timers = TimerQueue::new();
    let mut gestures = GestureResolver::new();

    let small = destiny_state(2);
    let outcome = gestures.pointer_down(&small, &on_deck(40, 680, 0), &config, &mut timers);
    assert_eq!(outcome, GestureOutcome::Ignored);
    assert!(timers.is_empty());

    let enough = destiny_state(3);
    let outcome = gestures.pointer_down(&enough, &on_deck(40, 680, 0), &config, &mut timers);
    assert_eq!(outcome, GestureOutcome::Started(TrackKind::Destiny));
}

#[test]
fn test_destiny_only_in_its_scenario_and_once() {
    let config = EngineConfig::default();
    let mut timers = TimerQueue::new();
    let mut gestures = GestureResolver::new();

    let other = battle(
        Scenario::MultiPlay,
        vec![enemy("e1", 120)],
        vec![strike(1), strike(2), strike(3)],
        3,
    );
    let outcome = gestures.pointer_down(&other, &on_deck(40, 680, 0), &config, &mut timers);
    assert_eq!(outcome, GestureOutcome::Ignored);

    let mut used = destiny_state(5);
    used.destiny_used = true;
    let outcome = gestures.pointer_down(&used, &on_deck(40, 680, 0), &config, &mut timers);
    assert_eq!(outcome, GestureOutcome::Ignored);
}

#[test]
fn test_destiny_commits_only_in_bottom_band() {
    let config = EngineConfig::default();
    let state = destiny_state(5);
    let mut timers = TimerQueue::new();

    // 60% of 720 is 432
    let mut gestures = GestureResolver::new();
    activate(&mut gestures, &state, on_deck(40, 680, 0), &mut timers);
    let up = gestures.pointer_up(&state, &elsewhere(400, 433, 400), &viewport(), &config, &mut timers);
    assert_eq!(up, GestureOutcome::Committed(Intent::ExecuteDestinyDraw));

    let mut gestures = GestureResolver::new();
    activate(&mut gestures, &state, on_deck(40, 680, 500), &mut timers);
    let up = gestures.pointer_up(&state, &elsewhere(400, 300, 900), &viewport(), &config, &mut timers);
    assert_eq!(up, GestureOutcome::Cancelled(TrackKind::Destiny));
}

#[test]
fn test_no_gestures_while_discarding() {
    let config = EngineConfig::default();
    let mut timers = TimerQueue::new();
    let mut gestures = GestureResolver::new();
    let mut state = destiny_state(5);
    state.destiny_discarding = true;

    let outcome = gestures.pointer_down(&state, &on_card(1, 0, 600, 0), &config, &mut timers);
    assert_eq!(outcome, GestureOutcome::Ignored);
}

// ==========================================
// 4. SWIPE SORT
// ==========================================

#[test]
fn test_fast_left_swipe_commits_sort() {
    let config = EngineConfig::default();
    let mut timers = TimerQueue::new();
    let mut gestures = GestureResolver::new();
    let state = battle(Scenario::Spinning, vec![enemy("e1", 120)], crate::catalog::sort_hand(), 3);

    let down = gestures.pointer_down(&state, &on_card(14, 600, 600, 1000), &config, &mut timers);
    assert_eq!(down, GestureOutcome::Started(TrackKind::Swipe));

    // Too early to measure, even though far enough
    let early = gestures.pointer_move(&elsewhere(480, 600, 1020), &config);
    assert_eq!(early, GestureOutcome::Moved);

    let swipe = gestures.pointer_move(&elsewhere(540, 600, 1040), &config);
    assert_eq!(swipe, GestureOutcome::Committed(Intent::SortHand));
    assert!(gestures.track().is_idle());
}

#[test]
fn test_slow_long_swipe_commits_on_distance() {
    let config = EngineConfig::default();
    let mut timers = TimerQueue::new();
    let mut gestures = GestureResolver::new();
    let state = battle(Scenario::Spinning, vec![enemy("e1", 120)], crate::catalog::sort_hand(), 3);

    gestures.pointer_down(&state, &on_card(11, 600, 600, 0), &config, &mut timers);
    assert_eq!(
        gestures.pointer_move(&elsewhere(560, 600, 400), &config),
        GestureOutcome::Moved,
        "-40px over 400ms is neither fast nor far"
    );
    assert_eq!(
        gestures.pointer_move(&elsewhere(549, 600, 800), &config),
        GestureOutcome::Committed(Intent::SortHand)
    );
}

#[test]
fn test_swipe_release_without_commit_cancels() {
    let config = EngineConfig::default();
    let mut timers = TimerQueue::new();
    let mut gestures = GestureResolver::new();
    let state = battle(Scenario::Spinning, vec![enemy("e1", 120)], crate::catalog::sort_hand(), 3);

    gestures.pointer_down(&state, &on_card(11, 600, 600, 0), &config, &mut timers);
    gestures.pointer_move(&elsewhere(700, 600, 100), &config);
    let up = gestures.pointer_up(&state, &on_enemies(700, 100, 150), &viewport(), &config, &mut timers);
    assert_eq!(up, GestureOutcome::Cancelled(TrackKind::Swipe));
}

#[test]
fn test_cancel_all_drops_track_and_timer() {
    let config = EngineConfig::default();
    let mut timers = TimerQueue::new();
    let mut gestures = GestureResolver::new();
    let state = finale_ready();

    gestures.pointer_down(&state, &on_enemies(600, 100, 0), &config, &mut timers);
    assert_eq!(gestures.cancel_all(&mut timers), Some(TrackKind::Finale));
    assert!(timers.is_empty());
    assert!(gestures.track().is_idle());
    assert_eq!(gestures.cancel_all(&mut timers), None);
}
