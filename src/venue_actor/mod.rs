//! The in-memory mahallah venue store.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clients::VenueClient;
use crate::framework::ResourceActor;
use crate::model::Mahallah;

/// Creates a new Venue actor and its client.
pub fn new() -> (ResourceActor<Mahallah>, VenueClient) {
    let venue_id_counter = Arc::new(AtomicU64::new(1));
    let next_venue_id = move || {
        let id = venue_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("mahallah_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_venue_id);
    let client = VenueClient::new(generic_client);

    (actor, client)
}
