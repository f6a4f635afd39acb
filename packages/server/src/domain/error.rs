//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// UserName validation error
    #[error("UserName cannot be empty")]
    UserNameEmpty,

    /// UserName too long error
    #[error("UserName cannot exceed {max} characters (got {actual})")]
    UserNameTooLong { max: usize, actual: usize },
}

/// Errors related to the session registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Registry capacity exceeded error
    #[error("Session registry capacity exceeded: maximum {capacity} sessions allowed (current: {current})")]
    CapacityExceeded { capacity: usize, current: usize },
}

/// Per-session delivery failures.
///
/// These are recovered locally by removing the failed session from the
/// registry; they never abort delivery to other sessions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionSendError {
    /// The session has already transitioned to Closed
    #[error("session is closed")]
    SessionClosed,

    /// The outbound channel receiver was dropped (connection torn down)
    #[error("session outbound channel is closed")]
    ChannelClosed,
}
