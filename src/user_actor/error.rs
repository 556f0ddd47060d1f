//! Error types for the User actor.

use thiserror::Error;

/// Errors surfaced by the sign-in and registration flows.
///
/// All of these render as inline banners in the auth screens; none are
/// fatal and there is no retry limit or lockout.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// No account matches the given email / matric no / staff no.
    #[error("User not found")]
    NotFound,

    /// The identifier matched but the password did not.
    #[error("Incorrect password")]
    WrongPassword,

    /// Registration with an email or matric number that is already taken.
    #[error("User with this email or matric number already exists")]
    AlreadyRegistered,

    /// The registration form failed validation.
    #[error("{0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("User actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::ActorCommunicationError(msg)
    }
}
