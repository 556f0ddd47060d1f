//! The customer session: order lifecycle, simulated approach and pickup
//! verification, all owned by a single actor.
//!
//! The session actor is the core of the system. It drives the
//! `sent -> preparing -> ready` order progression on timers, ticks the
//! simulated distance to the venue, rotates the pickup token and resolves
//! staff verification attempts. Everything it schedules is cancellable and
//! is torn down with the session.

pub mod error;
pub mod event;
pub mod proximity;
pub mod token;

mod actor;

pub use actor::{SessionActor, SessionRequest};
pub use error::SessionError;
pub use event::SessionEvent;

use std::time::Duration;

use tokio::sync::{broadcast, mpsc};

use crate::clients::SessionClient;

/// Timings and distances for the session simulation.
///
/// The defaults are the product numbers; tests and the demo binary inject
/// compressed variants instead of waiting out real delays.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Placement to `preparing`.
    pub preparing_delay: Duration,
    /// Placement to `ready` (not cumulative with `preparing_delay`).
    pub ready_delay: Duration,
    /// Interval between simulated distance updates.
    pub proximity_tick: Duration,
    /// How far each tick moves the customer, in km.
    pub distance_step_km: f64,
    /// The simulated distance never drops below this, in km.
    pub distance_floor_km: f64,
    /// Where a tracking session starts, in km.
    pub start_distance_km: f64,
    /// How often the pickup token is superseded.
    pub token_rotation: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            preparing_delay: Duration::from_secs(2),
            ready_delay: Duration::from_secs(8),
            proximity_tick: Duration::from_secs(3),
            distance_step_km: 0.1,
            distance_floor_km: 0.05,
            start_distance_km: 0.8,
            token_rotation: Duration::from_secs(60),
        }
    }
}

/// Creates the session actor and its client.
pub fn new(config: SessionConfig) -> (SessionActor, SessionClient) {
    let (sender, receiver) = mpsc::channel(32);
    let (timer_tx, timer_rx) = mpsc::channel(32);
    let (events, _) = broadcast::channel(16);

    let actor = SessionActor::new(receiver, timer_tx, timer_rx, events.clone(), config);
    let client = SessionClient::new(sender, events);
    (actor, client)
}
