//! UseCase layer error definitions.

use thiserror::Error;

/// Errors raised while connecting a new session
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectError {
    /// The registry holds the maximum number of sessions
    #[error("session registry is full")]
    RegistryCapacityExceeded,
}

/// Errors raised while routing one message
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The receiver field was empty; nothing was sent
    #[error("message receiver must not be empty")]
    EmptyReceiver,
}
