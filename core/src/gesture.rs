//! Gesture Resolver
//!
//! Turns pointer presses, moves, releases and hold timers into committed
//! [`Intent`]s. Exactly one track can be live at a time; that is encoded in
//! [`Track`] itself rather than in a set of flags.

use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::resolver::{select_chain, Intent};
use crate::state::{CombatState, GamePhase};
use crate::timers::{TimerId, TimerKind, TimerQueue};
use crate::types::{Card, CardId, Millis, Point, Viewport};

/// What the pointer is over, as hit-tested by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PointerTarget {
    Card { id: CardId },
    /// The enemy area; also the drop zone for chains
    EnemyZone,
    /// The draw pile icon
    Deck,
    Elsewhere,
}

/// One raw pointer sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode, TypeInfo)]
#[serde(rename_all = "camelCase")]
pub struct PointerEvent {
    pub position: Point,
    pub at: Millis,
    pub target: PointerTarget,
}

impl PointerEvent {
    pub fn new(x: i32, y: i32, at: Millis, target: PointerTarget) -> Self {
        Self {
            position: Point::new(x, y),
            at,
            target,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode, TypeInfo,
)]
#[serde(rename_all = "camelCase")]
pub enum TrackKind {
    Chain,
    Finale,
    Destiny,
    Swipe,
}

impl TrackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackKind::Chain => "chain",
            TrackKind::Finale => "finale",
            TrackKind::Destiny => "destiny",
            TrackKind::Swipe => "swipe",
        }
    }
}

/// Progress of a hold-to-arm charge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeStage {
    /// Pressed, waiting for the hold timer
    Armed { timer: TimerId },
    /// Hold threshold met, following the pointer
    Active,
}

/// The single live gesture
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Track {
    #[default]
    Idle,
    ChainDrag {
        cards: Vec<Card>,
        position: Point,
    },
    FinaleCharge {
        stage: ChargeStage,
        position: Point,
    },
    DestinyCharge {
        stage: ChargeStage,
        position: Point,
    },
    Swipe {
        card: CardId,
        origin_x: i32,
        started_at: Millis,
    },
}

impl Track {
    pub fn kind(&self) -> Option<TrackKind> {
        match self {
            Track::Idle => None,
            Track::ChainDrag { .. } => Some(TrackKind::Chain),
            Track::FinaleCharge { .. } => Some(TrackKind::Finale),
            Track::DestinyCharge { .. } => Some(TrackKind::Destiny),
            Track::Swipe { .. } => Some(TrackKind::Swipe),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Track::Idle)
    }

    /// Pointer position the renderer should draw the drag ghost at
    pub fn position(&self) -> Option<Point> {
        match self {
            Track::ChainDrag { position, .. } => Some(*position),
            Track::FinaleCharge {
                stage: ChargeStage::Active,
                position,
            }
            | Track::DestinyCharge {
                stage: ChargeStage::Active,
                position,
            } => Some(*position),
            _ => None,
        }
    }

    /// Whether a hold charge has passed its threshold
    pub fn is_charge_active(&self) -> bool {
        matches!(
            self,
            Track::FinaleCharge {
                stage: ChargeStage::Active,
                ..
            } | Track::DestinyCharge {
                stage: ChargeStage::Active,
                ..
            }
        )
    }

    pub fn dragged_cards(&self) -> &[Card] {
        match self {
            Track::ChainDrag { cards, .. } => cards,
            _ => &[],
        }
    }

    fn armed_timer(&self) -> Option<TimerId> {
        match self {
            Track::FinaleCharge {
                stage: ChargeStage::Armed { timer },
                ..
            }
            | Track::DestinyCharge {
                stage: ChargeStage::Armed { timer },
                ..
            } => Some(*timer),
            _ => None,
        }
    }
}

/// What a pointer event or hold timer did to the gesture tracks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Nothing applicable; no state change
    Ignored,
    /// A track left IDLE (chain drags and swipes go straight to live)
    Started(TrackKind),
    /// A hold charge passed its threshold
    Activated(TrackKind),
    /// Pointer position updated
    Moved,
    Committed(Intent),
    Cancelled(TrackKind),
}

/// Whether the battle accepts any new gesture
pub fn accepts_input(state: &CombatState) -> bool {
    state.phase.is_battling() && !state.destiny_discarding
}

pub fn finale_available(state: &CombatState, config: &EngineConfig) -> bool {
    accepts_input(state)
        && state.phase == GamePhase::BattleFinaleReady
        && state.finale_conditions_met(&config.finale)
}

pub fn destiny_available(state: &CombatState, config: &EngineConfig) -> bool {
    accepts_input(state)
        && state.scenario.allows_destiny_draw()
        && !state.destiny_used
        && state.hand.len() >= config.gestures.destiny_min_hand
}

#[derive(Debug, Clone, Default)]
pub struct GestureResolver {
    track: Track,
}

impl GestureResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn pointer_down(
        &mut self,
        state: &CombatState,
        event: &PointerEvent,
        config: &EngineConfig,
        timers: &mut TimerQueue,
    ) -> GestureOutcome {
        if !self.track.is_idle() || !accepts_input(state) {
            return GestureOutcome::Ignored;
        }

        match event.target {
            PointerTarget::Card { id } if state.scenario.allows_swipe_sort() => {
                if state.find_card(id).is_none() {
                    return GestureOutcome::Ignored;
                }
                self.track = Track::Swipe {
                    card: id,
                    origin_x: event.position.x,
                    started_at: event.at,
                };
                GestureOutcome::Started(TrackKind::Swipe)
            }
            PointerTarget::Card { id } => {
                let cards = select_chain(
                    &state.hand,
                    id,
                    state.mana,
                    state.scenario.allows_multi_select(),
                );
                if cards.is_empty() {
                    return GestureOutcome::Ignored;
                }
                self.track = Track::ChainDrag {
                    cards,
                    position: event.position,
                };
                GestureOutcome::Started(TrackKind::Chain)
            }
            PointerTarget::EnemyZone if finale_available(state, config) => {
                let timer = timers.schedule(config.gestures.finale_hold_ms, TimerKind::ArmCharge);
                self.track = Track::FinaleCharge {
                    stage: ChargeStage::Armed { timer },
                    position: event.position,
                };
                GestureOutcome::Started(TrackKind::Finale)
            }
            PointerTarget::Deck if destiny_available(state, config) => {
                let timer =
                    timers.schedule(config.gestures.destiny_hold_ms, TimerKind::ArmCharge);
                self.track = Track::DestinyCharge {
                    stage: ChargeStage::Armed { timer },
                    position: event.position,
                };
                GestureOutcome::Started(TrackKind::Destiny)
            }
            _ => GestureOutcome::Ignored,
        }
    }

    pub fn pointer_move(&mut self, event: &PointerEvent, config: &EngineConfig) -> GestureOutcome {
        match &mut self.track {
            Track::Idle => GestureOutcome::Ignored,
            Track::ChainDrag { position, .. }
            | Track::FinaleCharge { position, .. }
            | Track::DestinyCharge { position, .. } => {
                *position = event.position;
                GestureOutcome::Moved
            }
            Track::Swipe {
                origin_x,
                started_at,
                ..
            } => {
                let gestures = &config.gestures;
                let elapsed = event.at.saturating_sub(*started_at);
                if elapsed < gestures.swipe_min_elapsed_ms {
                    return GestureOutcome::Moved;
                }
                let dx = event.position.x - *origin_x;
                let velocity = dx as f32 / elapsed.max(1) as f32;
                if velocity < gestures.swipe_velocity_threshold
                    || dx < gestures.swipe_distance_threshold
                {
                    self.track = Track::Idle;
                    return GestureOutcome::Committed(Intent::SortHand);
                }
                GestureOutcome::Moved
            }
        }
    }

    pub fn pointer_up(
        &mut self,
        state: &CombatState,
        event: &PointerEvent,
        viewport: &Viewport,
        config: &EngineConfig,
        timers: &mut TimerQueue,
    ) -> GestureOutcome {
        let track = core::mem::take(&mut self.track);
        if let Some(timer) = track.armed_timer() {
            timers.cancel(timer);
        }
        let revalidate = config.gestures.revalidate_on_commit;

        match track {
            Track::Idle => GestureOutcome::Ignored,
            Track::ChainDrag { cards, .. } => {
                let ids: Vec<CardId> = cards.iter().map(|c| c.id).collect();
                let still_valid = accepts_input(state)
                    && state.holds_all(&ids)
                    && state.can_afford(state.cost_of(&ids));
                if event.target == PointerTarget::EnemyZone && (!revalidate || still_valid) {
                    GestureOutcome::Committed(Intent::PlayChain { cards: ids })
                } else {
                    GestureOutcome::Cancelled(TrackKind::Chain)
                }
            }
            Track::FinaleCharge {
                stage: ChargeStage::Active,
                ..
            } => {
                let in_band =
                    viewport.is_above(event.position.y, config.gestures.finale_commit_percent);
                if in_band && (!revalidate || finale_available(state, config)) {
                    GestureOutcome::Committed(Intent::ExecuteFinale {
                        origin: event.position,
                    })
                } else {
                    GestureOutcome::Cancelled(TrackKind::Finale)
                }
            }
            Track::DestinyCharge {
                stage: ChargeStage::Active,
                ..
            } => {
                let in_band =
                    viewport.is_below(event.position.y, config.gestures.destiny_commit_percent);
                if in_band && (!revalidate || destiny_available(state, config)) {
                    GestureOutcome::Committed(Intent::ExecuteDestinyDraw)
                } else {
                    GestureOutcome::Cancelled(TrackKind::Destiny)
                }
            }
            Track::FinaleCharge { .. } => GestureOutcome::Cancelled(TrackKind::Finale),
            Track::DestinyCharge { .. } => GestureOutcome::Cancelled(TrackKind::Destiny),
            Track::Swipe { .. } => GestureOutcome::Cancelled(TrackKind::Swipe),
        }
    }

    /// A hold timer fired. Only the timer the current track is waiting on
    /// can activate it; anything else is stale and ignored.
    pub fn arm_timer_fired(&mut self, fired: TimerId) -> GestureOutcome {
        match &mut self.track {
            Track::FinaleCharge { stage, .. } if *stage == (ChargeStage::Armed { timer: fired }) => {
                *stage = ChargeStage::Active;
                GestureOutcome::Activated(TrackKind::Finale)
            }
            Track::DestinyCharge { stage, .. }
                if *stage == (ChargeStage::Armed { timer: fired }) =>
            {
                *stage = ChargeStage::Active;
                GestureOutcome::Activated(TrackKind::Destiny)
            }
            _ => GestureOutcome::Ignored,
        }
    }

    /// Hard-cancel whatever is live, including its hold timer.
    pub fn cancel_all(&mut self, timers: &mut TimerQueue) -> Option<TrackKind> {
        let track = core::mem::take(&mut self.track);
        if let Some(timer) = track.armed_timer() {
            timers.cancel(timer);
        }
        track.kind()
    }
}
