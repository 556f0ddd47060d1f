//! Tracing setup for the actor system.
//!
//! Structured logging via the `tracing` crate, configured through the
//! `RUST_LOG` environment variable:
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full request payloads at function entry points
//! RUST_LOG=debug cargo run
//!
//! # Filter to the session only
//! RUST_LOG=cafe_click::session=debug cargo run
//! ```
//!
//! Every client method opens an instrument span, so a single order shows up
//! as a hierarchy: the client call, the actor receiving it, and any timers
//! it schedules.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type fields carry the context instead
        .compact()
        .init();
}
