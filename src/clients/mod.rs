//! Type-safe wrappers around the raw actor channels.

pub mod actor_client;
pub mod menu_client;
pub mod session_client;
pub mod user_client;
pub mod venue_client;

pub use actor_client::*;
pub use menu_client::*;
pub use session_client::*;
pub use user_client::*;
pub use venue_client::*;
