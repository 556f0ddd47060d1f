//! Error types for the Venue actor.

use thiserror::Error;

/// Errors that can occur during venue operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VenueError {
    /// The requested mahallah does not exist.
    #[error("Mahallah not found: {0}")]
    NotFound(String),

    /// The venue data provided is invalid.
    #[error("{0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Venue actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for VenueError {
    fn from(msg: String) -> Self {
        VenueError::ActorCommunicationError(msg)
    }
}
