//! Error type for the customer session.

use thiserror::Error;

/// Everything here is recoverable: a failed call leaves session state
/// untouched and is reported back to the caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// Checkout was confirmed with nothing in the cart. The UI disables the
    /// action, so hitting this is a caller bug, not a user-facing path.
    #[error("Cart is empty")]
    EmptyCart,

    /// No mahallah was selected before checkout.
    #[error("No mahallah selected")]
    NoVenueSelected,

    /// A single session tracks one active order at a time.
    #[error("An order is already in progress")]
    OrderInFlight,

    #[error("No active order")]
    NoActiveOrder,

    /// The tracking view has not been opened (or was torn down).
    #[error("Order tracking is not active")]
    NotTracking,

    /// "I'm here" pressed outside the pickup geofence.
    #[error("Not within pickup range")]
    NotNearby,

    /// Review actions are only valid once the order has been collected.
    #[error("Order has not been collected yet")]
    NotCollected,

    /// Submitting a review without picking a rating; surfaced to the user
    /// as a blocking message.
    #[error("Please select a rating before submitting")]
    EmptyRating,

    /// The session actor has shut down.
    #[error("Session closed")]
    Closed,
}
