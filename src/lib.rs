//! # Cafe Click
//!
//! A mobile-ordering backend for a campus cafe, built as a small actor
//! system on Tokio.
//!
//! Customers sign in, browse the menu, place an order for pickup at a
//! mahallah delivery point and walk over while the kitchen works. The
//! system tracks the order through `sent -> preparing -> ready`, simulates
//! the customer's approach, mints a rotating pickup code on arrival and
//! lets staff verify it at handover.
//!
//! ## Architecture
//!
//! Two kinds of actors share one message-passing substrate:
//!
//! - **Resource actors** ([`framework`]): the generic
//!   [`ResourceActor`](framework::ResourceActor) runs the store loop once,
//!   for users, menu items and venues alike. Each gets a typed client in
//!   [`clients`] and an [`ActorEntity`](framework::ActorEntity)
//!   implementation in its own module.
//! - **The session actor** ([`session`]): the stateful core. It owns the
//!   single active order and everything timed about it: status advancement,
//!   distance ticks and token rotation, all delivered as messages by the
//!   [`scheduler`] and all cancellable.
//!
//! Actors process their mailboxes sequentially, so no entity state needs a
//! lock; multiple actors still run in parallel. [`lifecycle`] wires it all
//! together and seeds the demo data.
//!
//! ## Running the demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```
//!
//! The demo runs the full customer journey with compressed timings.
//!
//! ## Testing
//!
//! `cargo test`. Session timing tests run under Tokio's paused clock, so
//! the eight-unit ready delay completes instantly and deterministically.
//! See [`framework::mock`] for testing clients without spawning actors.

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod scheduler;
pub mod session;
pub mod user_actor;
pub mod venue_actor;
pub mod verification;
