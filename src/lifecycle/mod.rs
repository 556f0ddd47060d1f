//! System lifecycle: startup, demo seeding and graceful shutdown.

pub mod cafe_system;
pub mod tracing;

pub use cafe_system::CafeSystem;
pub use tracing::setup_tracing;
