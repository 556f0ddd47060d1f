//! The customer session actor.
//!
//! Owns the single active [`Order`], the [`ProximityState`] of the tracking
//! session and the current pickup token, and is the only mutator of any of
//! them. All timed behaviour (status advancement, distance ticks, token
//! rotation) arrives as [`TimerEvent`]s on a dedicated internal channel;
//! the handles returned by the scheduler are owned here and aborted on
//! teardown, so nothing can fire against a session that no longer exists.

use rand::Rng;
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info};

use crate::model::{CartLine, Order, OrderStatus};
use crate::scheduler::{self, TimerHandle};
use crate::session::proximity::{ProximitySnapshot, ProximityState};
use crate::session::token::{self, VerificationToken};
use crate::session::{SessionConfig, SessionError, SessionEvent};
use crate::verification::{self, Verdict};

/// One-shot reply channel for session requests.
pub type Reply<T> = oneshot::Sender<Result<T, SessionError>>;

/// Commands from the presentation layer.
#[derive(Debug)]
pub enum SessionRequest {
    PlaceOrder {
        items: Vec<CartLine>,
        mahallah_id: String,
        respond_to: Reply<Order>,
    },
    OrderSnapshot {
        respond_to: Reply<Option<Order>>,
    },
    StartTracking {
        respond_to: Reply<ProximitySnapshot>,
    },
    EndTracking {
        respond_to: Reply<()>,
    },
    ProximitySnapshot {
        respond_to: Reply<Option<ProximitySnapshot>>,
    },
    DeclareArrival {
        respond_to: Reply<VerificationToken>,
    },
    CurrentToken {
        respond_to: Reply<Option<VerificationToken>>,
    },
    Verify {
        code: String,
        respond_to: Reply<Verdict>,
    },
    SubmitReview {
        rating: u8,
        feedback: String,
        respond_to: Reply<()>,
    },
    SkipReview {
        respond_to: Reply<()>,
    },
    /// Logout teardown: cancels every timer and clears all session state.
    Reset {
        respond_to: Reply<()>,
    },
}

/// Self-addressed messages delivered by the scheduler.
#[derive(Debug, Clone)]
pub(crate) enum TimerEvent {
    /// A status transition came due. Carries the order id so a timer that
    /// outlives its order is recognised as stale.
    AdvanceStatus { order_id: String },
    DistanceTick,
    RotateToken,
}

/// Live tracking-session state; dropped whole on teardown, which aborts the
/// timers it owns.
struct Tracking {
    proximity: ProximityState,
    token: Option<VerificationToken>,
    _tick_timer: TimerHandle,
    rotation_timer: Option<TimerHandle>,
}

pub struct SessionActor {
    receiver: mpsc::Receiver<SessionRequest>,
    timer_tx: mpsc::Sender<TimerEvent>,
    timer_rx: mpsc::Receiver<TimerEvent>,
    events: broadcast::Sender<SessionEvent>,
    config: SessionConfig,

    active_order: Option<Order>,
    status_timers: Vec<TimerHandle>,
    tracking: Option<Tracking>,
    /// Set once the pickup code is accepted; the order is then only held
    /// for the review step.
    collected: bool,
    /// High-water mark for token timestamps; keeps rotation strictly
    /// monotonic even if the wall clock does not move between mints.
    last_token_ms: u64,
}

impl SessionActor {
    pub(crate) fn new(
        receiver: mpsc::Receiver<SessionRequest>,
        timer_tx: mpsc::Sender<TimerEvent>,
        timer_rx: mpsc::Receiver<TimerEvent>,
        events: broadcast::Sender<SessionEvent>,
        config: SessionConfig,
    ) -> Self {
        Self {
            receiver,
            timer_tx,
            timer_rx,
            events,
            config,
            active_order: None,
            status_timers: Vec::new(),
            tracking: None,
            collected: false,
            last_token_ms: 0,
        }
    }

    /// Runs the session loop until every client handle has been dropped.
    ///
    /// The select is biased towards timer events: a transition that came
    /// due is applied before any read that arrived alongside it, so the
    /// presentation layer can never observe time going backwards.
    pub async fn run(mut self) {
        info!("Session actor started");
        loop {
            tokio::select! {
                biased;
                Some(event) = self.timer_rx.recv() => self.on_timer(event),
                request = self.receiver.recv() => match request {
                    Some(request) => self.on_request(request),
                    None => break,
                },
            }
        }
        info!("Session actor stopped");
    }

    fn on_request(&mut self, request: SessionRequest) {
        match request {
            SessionRequest::PlaceOrder {
                items,
                mahallah_id,
                respond_to,
            } => {
                let _ = respond_to.send(self.place_order(items, mahallah_id));
            }
            SessionRequest::OrderSnapshot { respond_to } => {
                let _ = respond_to.send(Ok(self.active_order.clone()));
            }
            SessionRequest::StartTracking { respond_to } => {
                let _ = respond_to.send(self.start_tracking());
            }
            SessionRequest::EndTracking { respond_to } => {
                self.end_tracking();
                let _ = respond_to.send(Ok(()));
            }
            SessionRequest::ProximitySnapshot { respond_to } => {
                let snapshot = self.tracking.as_ref().map(|t| t.proximity.snapshot());
                let _ = respond_to.send(Ok(snapshot));
            }
            SessionRequest::DeclareArrival { respond_to } => {
                let _ = respond_to.send(self.declare_arrival());
            }
            SessionRequest::CurrentToken { respond_to } => {
                let token = self.tracking.as_ref().and_then(|t| t.token.clone());
                let _ = respond_to.send(Ok(token));
            }
            SessionRequest::Verify { code, respond_to } => {
                let _ = respond_to.send(Ok(self.verify(&code)));
            }
            SessionRequest::SubmitReview {
                rating,
                feedback,
                respond_to,
            } => {
                let _ = respond_to.send(self.finish_review(Some((rating, feedback))));
            }
            SessionRequest::SkipReview { respond_to } => {
                let _ = respond_to.send(self.finish_review(None));
            }
            SessionRequest::Reset { respond_to } => {
                self.reset();
                let _ = respond_to.send(Ok(()));
            }
        }
    }

    fn on_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::AdvanceStatus { order_id } => self.advance_status(&order_id),
            TimerEvent::DistanceTick => self.distance_tick(),
            TimerEvent::RotateToken => self.rotate_token(),
        }
    }

    // --- Order lifecycle -------------------------------------------------

    fn place_order(
        &mut self,
        items: Vec<CartLine>,
        mahallah_id: String,
    ) -> Result<Order, SessionError> {
        if items.is_empty() {
            return Err(SessionError::EmptyCart);
        }
        if mahallah_id.is_empty() {
            return Err(SessionError::NoVenueSelected);
        }
        if self.active_order.is_some() {
            return Err(SessionError::OrderInFlight);
        }

        let id = next_order_id();
        let order = Order::new(id.clone(), mahallah_id, items);
        info!(
            order_id = %order.id,
            mahallah_id = %order.mahallah_id,
            total = order.total,
            "Order placed"
        );

        // Two one-shot transitions, both measured from placement.
        self.status_timers = vec![
            scheduler::send_after(
                self.config.preparing_delay,
                self.timer_tx.clone(),
                TimerEvent::AdvanceStatus {
                    order_id: id.clone(),
                },
            ),
            scheduler::send_after(
                self.config.ready_delay,
                self.timer_tx.clone(),
                TimerEvent::AdvanceStatus { order_id: id },
            ),
        ];
        self.collected = false;
        self.active_order = Some(order.clone());
        Ok(order)
    }

    fn advance_status(&mut self, order_id: &str) {
        let Some(order) = self.active_order.as_mut() else {
            debug!(%order_id, "Status timer fired after order was cleared");
            return;
        };
        if order.id != order_id {
            debug!(%order_id, active = %order.id, "Stale status timer ignored");
            return;
        }
        if self.collected {
            return;
        }
        if let Some(next) = order.status.next() {
            order.status = next;
            info!(order_id = %order.id, status = %next, "Order status advanced");
            if next == OrderStatus::Ready {
                let _ = self.events.send(SessionEvent::OrderReady {
                    order_id: order.id.clone(),
                });
            }
        }
    }

    // --- Proximity / pickup ----------------------------------------------

    fn start_tracking(&mut self) -> Result<ProximitySnapshot, SessionError> {
        if self.active_order.is_none() || self.collected {
            return Err(SessionError::NoActiveOrder);
        }
        if let Some(tracking) = &self.tracking {
            // Re-entering the tracking view keeps the running session.
            return Ok(tracking.proximity.snapshot());
        }

        let proximity = ProximityState::new(self.config.start_distance_km);
        let snapshot = proximity.snapshot();
        let tick_timer = scheduler::send_every(
            self.config.proximity_tick,
            self.timer_tx.clone(),
            TimerEvent::DistanceTick,
        );
        self.tracking = Some(Tracking {
            proximity,
            token: None,
            _tick_timer: tick_timer,
            rotation_timer: None,
        });
        info!(distance_km = snapshot.distance_km, "Tracking started");
        Ok(snapshot)
    }

    fn end_tracking(&mut self) {
        if self.tracking.take().is_some() {
            info!("Tracking ended");
        }
    }

    fn distance_tick(&mut self) {
        let ready = self
            .active_order
            .as_ref()
            .is_some_and(|o| o.status == OrderStatus::Ready);
        let Some(tracking) = self.tracking.as_mut() else {
            return;
        };

        let was_nearby = tracking.proximity.is_nearby();
        tracking
            .proximity
            .step(self.config.distance_step_km, self.config.distance_floor_km);
        let nearby = tracking.proximity.is_nearby();
        debug!(
            distance_km = tracking.proximity.distance_km(),
            nearby, "Distance tick"
        );

        // The one-time arrival notification: only on the false->true
        // transition, only while the order is ready.
        if nearby && !was_nearby && !tracking.proximity.has_notified_arrival() && ready {
            tracking.proximity.mark_notified();
            let distance_km = tracking.proximity.distance_km();
            if let Some(order) = &self.active_order {
                info!(order_id = %order.id, distance_km, "Customer is near the cafe");
                let _ = self.events.send(SessionEvent::ArrivalNearby {
                    order_id: order.id.clone(),
                    distance_km,
                });
            }
        }
    }

    fn declare_arrival(&mut self) -> Result<VerificationToken, SessionError> {
        let order_id = self
            .active_order
            .as_ref()
            .ok_or(SessionError::NoActiveOrder)?
            .id
            .clone();
        let nearby = match &self.tracking {
            None => return Err(SessionError::NotTracking),
            Some(tracking) => tracking.proximity.is_nearby(),
        };
        if !nearby {
            return Err(SessionError::NotNearby);
        }

        let issued_at = self.next_token_ms();
        let token = VerificationToken::mint(&order_id, issued_at);
        let rotation_timer = scheduler::send_every(
            self.config.token_rotation,
            self.timer_tx.clone(),
            TimerEvent::RotateToken,
        );
        if let Some(tracking) = self.tracking.as_mut() {
            tracking.token = Some(token.clone());
            // Replacing the handle aborts any previous rotation timer.
            tracking.rotation_timer = Some(rotation_timer);
        }
        info!(order_id = %order_id, code = %token.code, "Pickup token minted");
        Ok(token)
    }

    fn rotate_token(&mut self) {
        let Some(order_id) = self.active_order.as_ref().map(|o| o.id.clone()) else {
            return;
        };
        if self.tracking.as_ref().map_or(true, |t| t.token.is_none()) {
            return;
        }
        let issued_at = self.next_token_ms();
        let token = VerificationToken::mint(&order_id, issued_at);
        debug!(order_id = %order_id, code = %token.code, "Pickup token rotated");
        if let Some(tracking) = self.tracking.as_mut() {
            // The previous token is invalid from this instant; no overlap.
            tracking.token = Some(token);
        }
    }

    fn next_token_ms(&mut self) -> u64 {
        let now = token::unix_millis();
        let issued_at = now.max(self.last_token_ms + 1);
        self.last_token_ms = issued_at;
        issued_at
    }

    // --- Verification and review -----------------------------------------

    fn verify(&mut self, code: &str) -> Verdict {
        let current = self.tracking.as_ref().and_then(|t| t.token.as_ref());
        let verdict = verification::verify(code, current);
        match verdict {
            Verdict::Accepted => {
                self.collected = true;
                // Tear the tracking session down; its timers abort on drop.
                self.tracking = None;
                self.status_timers.clear();
                if let Some(order) = &self.active_order {
                    info!(order_id = %order.id, "Order collected");
                    let _ = self.events.send(SessionEvent::OrderCollected {
                        order_id: order.id.clone(),
                    });
                }
            }
            Verdict::Rejected => {
                // Deliberately no detail: wrong and rotated-out codes are
                // indistinguishable to the caller.
                info!("Pickup code rejected");
            }
        }
        verdict
    }

    fn finish_review(&mut self, review: Option<(u8, String)>) -> Result<(), SessionError> {
        if self.active_order.is_none() {
            return Err(SessionError::NoActiveOrder);
        }
        if !self.collected {
            return Err(SessionError::NotCollected);
        }
        if let Some((rating, feedback)) = review {
            if rating == 0 {
                return Err(SessionError::EmptyRating);
            }
            if let Some(order) = &self.active_order {
                info!(order_id = %order.id, rating, feedback = %feedback, "Review submitted");
            }
        } else if let Some(order) = &self.active_order {
            info!(order_id = %order.id, "Review skipped");
        }
        // The order's lifecycle ends here.
        self.active_order = None;
        self.collected = false;
        Ok(())
    }

    fn reset(&mut self) {
        self.status_timers.clear();
        self.tracking = None;
        self.active_order = None;
        self.collected = false;
        info!("Session reset");
    }
}

/// Short numeric order id, as printed on the pickup slip.
fn next_order_id() -> String {
    rand::thread_rng().gen_range(1000..10000).to_string()
}
