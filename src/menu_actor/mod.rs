//! The in-memory menu store managed from the staff dashboard.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clients::MenuClient;
use crate::framework::ResourceActor;
use crate::model::MenuItem;

/// Creates a new Menu actor and its client.
pub fn new() -> (ResourceActor<MenuItem>, MenuClient) {
    let menu_id_counter = Arc::new(AtomicU64::new(1));
    let next_menu_id = move || {
        let id = menu_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("menu_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_menu_id);
    let client = MenuClient::new(generic_client);

    (actor, client)
}
