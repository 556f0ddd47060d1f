//! Pure data structures for the ordering domain.
//!
//! Everything here is plain data: orders and cart lines, the menu catalog,
//! users, and mahallah venues. Behaviour lives in the actors that manage
//! these types.

pub mod menu;
pub mod order;
pub mod user;
pub mod venue;

pub use menu::*;
pub use order::*;
pub use user::*;
pub use venue::*;
