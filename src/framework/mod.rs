//! Generic actor framework for the in-memory resource stores.
//!
//! Users, menu items and venues are each held by a [`ResourceActor`] that
//! owns its store exclusively and processes one request at a time, so the
//! "mock database" needs no locks. Typed clients in [`crate::clients`] wrap
//! the raw [`ResourceClient`] channels.
//!
//! See [`mock`] for testing clients without spawning full actors.

pub mod core;
pub mod mock;

pub use self::core::*;
