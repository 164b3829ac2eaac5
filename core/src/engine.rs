//! Combat Orchestrator
//!
//! Owns the combat state, the gesture tracks and the timer queue. Every
//! mutation goes through one of the public entry points below; timers only
//! fire when an input or `advance_to` moves the clock past them.

use alloc::format;
use alloc::vec::Vec;

use crate::catalog::BattleSetup;
use crate::config::EngineConfig;
use crate::error::{GameError, GameResult};
use crate::gesture::{GestureOutcome, GestureResolver, PointerEvent, Track};
use crate::log;
use crate::resolver::{self, Action, CombatEvent, Intent, Resolution};
use crate::state::{CombatState, GamePhase, Scenario};
use crate::timers::{TimerKind, TimerQueue};
use crate::types::{Millis, Viewport};
use crate::view::CombatView;

pub struct CombatEngine {
    config: EngineConfig,
    viewport: Viewport,
    state: CombatState,
    gestures: GestureResolver,
    timers: TimerQueue,
    events: Vec<CombatEvent>,
}

impl CombatEngine {
    pub fn new(scenario: Scenario) -> Self {
        Self::with_config(scenario, EngineConfig::default())
    }

    pub fn with_config(scenario: Scenario, config: EngineConfig) -> Self {
        log::info(&format!("=== COMBAT ENGINE INITIALIZED ({}) ===", scenario.as_str()));
        let engine = Self {
            config,
            viewport: Viewport::default(),
            state: CombatState::new(scenario),
            gestures: GestureResolver::new(),
            timers: TimerQueue::new(),
            events: Vec::new(),
        };
        engine.log_state();
        engine
    }

    /// Build an engine from a scenario name such as `"multiPlay"`.
    pub fn from_scenario_name(name: &str) -> GameResult<Self> {
        let scenario = Scenario::from_name(name).ok_or(GameError::UnknownScenario)?;
        Ok(Self::new(scenario))
    }

    /// Start the battle over. Cancels every track and timer; calling it
    /// twice in a row is the same as calling it once.
    pub fn reset(&mut self, scenario: Scenario) {
        self.reset_with(scenario, BattleSetup::standard(scenario));
    }

    pub fn reset_with(&mut self, scenario: Scenario, setup: BattleSetup) {
        log::action("reset", scenario.as_str());
        if let Some(kind) = self.gestures.cancel_all(&mut self.timers) {
            log::debug("reset", &format!("dropped {} track", kind.as_str()));
        }
        self.timers.clear();
        self.events.clear();
        let resolution = resolver::settle(CombatState::from_setup(scenario, setup), &self.config);
        self.adopt(resolution);
    }

    /// Start a boss fight with the standard hand in `scenario`.
    pub fn reset_boss(&mut self, scenario: Scenario) {
        self.reset_with(scenario, BattleSetup::boss());
    }

    pub fn resize(&mut self, viewport: Viewport) -> GameResult<()> {
        if viewport.width <= 0 || viewport.height <= 0 {
            return Err(GameError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        Ok(())
    }

    pub fn pointer_down(&mut self, event: &PointerEvent) -> GameResult<GestureOutcome> {
        self.sync_clock(event.at)?;
        let outcome =
            self.gestures
                .pointer_down(&self.state, event, &self.config, &mut self.timers);
        Ok(self.settle(outcome))
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) -> GameResult<GestureOutcome> {
        self.sync_clock(event.at)?;
        let outcome = self.gestures.pointer_move(event, &self.config);
        Ok(self.settle(outcome))
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) -> GameResult<GestureOutcome> {
        self.sync_clock(event.at)?;
        let outcome = self.gestures.pointer_up(
            &self.state,
            event,
            &self.viewport,
            &self.config,
            &mut self.timers,
        );
        Ok(self.settle(outcome))
    }

    /// Let time pass with no input, firing every timer due by `at`.
    pub fn advance_to(&mut self, at: Millis) -> GameResult<()> {
        self.sync_clock(at)
    }

    /// Force the scenario's favorable conditions. Only allowed in a plain
    /// battle with no gesture in flight; returns whether it was applied.
    pub fn setup_favorable(&mut self) -> bool {
        let allowed = self.state.phase == GamePhase::BattleNormal
            && self.gestures.track().is_idle()
            && !self.state.destiny_discarding;
        if !allowed {
            log::result(false, "setup_favorable: battle is busy");
            return false;
        }
        self.dispatch(Action::Commit(Intent::SetupFavorable));
        true
    }

    pub fn state(&self) -> &CombatState {
        &self.state
    }

    pub fn track(&self) -> &Track {
        self.gestures.track()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn now(&self) -> Millis {
        self.timers.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Earliest time at which something will happen without input
    pub fn next_timer_due(&self) -> Option<Millis> {
        self.timers.next_due()
    }

    pub fn view(&self) -> CombatView {
        CombatView::from_state(&self.state, self.gestures.track())
    }

    /// Take every event produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        core::mem::take(&mut self.events)
    }

    fn sync_clock(&mut self, at: Millis) -> GameResult<()> {
        let now = self.timers.now();
        if at < now {
            log::warn(&format!("rejected input at {}ms, clock is {}ms", at, now));
            return Err(GameError::ClockWentBackwards { now, at });
        }
        self.fire_due(at);
        self.timers.set_now(at);
        Ok(())
    }

    fn fire_due(&mut self, until: Millis) {
        while let Some((id, kind)) = self.timers.pop_due(until) {
            match kind {
                TimerKind::ArmCharge => {
                    if let GestureOutcome::Activated(track) = self.gestures.arm_timer_fired(id) {
                        log::debug("timer", &format!("{} charge active", track.as_str()));
                    }
                }
                TimerKind::Followup { followup } => self.dispatch(Action::Followup(followup)),
            }
        }
    }

    fn settle(&mut self, outcome: GestureOutcome) -> GestureOutcome {
        match &outcome {
            GestureOutcome::Committed(intent) => self.dispatch(Action::Commit(intent.clone())),
            GestureOutcome::Cancelled(track) => {
                log::debug("gesture", &format!("{} cancelled", track.as_str()));
                self.events
                    .push(CombatEvent::GestureCancelled { track: *track });
            }
            _ => {}
        }
        outcome
    }

    fn dispatch(&mut self, action: Action) {
        let resolution = resolver::apply(&self.state, &action, &self.config);
        self.adopt(resolution);
    }

    fn adopt(&mut self, resolution: Resolution) {
        self.state = resolution.state;
        for step in resolution.scheduled {
            self.timers.schedule(
                step.delay,
                TimerKind::Followup {
                    followup: step.followup,
                },
            );
        }
        self.events.extend(resolution.events);
        self.log_state();
    }

    fn log_state(&self) {
        let track = self
            .gestures
            .track()
            .kind()
            .map(|k| k.as_str())
            .unwrap_or("idle");
        log::state_summary(
            self.state.phase.as_str(),
            self.state.mana,
            self.state.max_mana,
            self.state.hand.len(),
            self.state.total_enemy_hp(),
            track,
        );
    }
}
