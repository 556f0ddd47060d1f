//! Error types for the Menu actor.

use thiserror::Error;

/// Errors that can occur during menu management.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The requested menu item does not exist.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// The item data provided is invalid.
    #[error("{0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Menu actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::ActorCommunicationError(msg)
    }
}
