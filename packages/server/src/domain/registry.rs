//! Connection registry abstraction.
//!
//! The registry is the authoritative mapping of user name → live sessions.
//! The usecase layer depends on this trait; the concrete in-memory
//! implementation lives in the infrastructure layer (依存性の逆転).

use std::sync::Arc;

use async_trait::async_trait;

use super::{entity::Session, error::RegistryError};

/// Default maximum number of live sessions across all users
pub const DEFAULT_SESSION_CAPACITY: usize = 1024;

/// Per-user session count, for the operational HTTP surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSessionCount {
    /// User name
    pub user_name: String,
    /// Number of live sessions for that user
    pub session_count: usize,
}

/// Authoritative mapping of user name → live sessions.
///
/// All operations must be safe under concurrent register/unregister/lookup;
/// a lookup never observes a partially-mutated session set.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Add a session under its user name.
    ///
    /// Idempotent per session id: registering an already-registered session
    /// is a no-op. Fails with `RegistryError::CapacityExceeded` when the
    /// registry holds the maximum number of sessions.
    async fn register(&self, session: Arc<Session>) -> Result<(), RegistryError>;

    /// Remove a session from its user's set.
    ///
    /// A no-op if the session is already absent; disconnects may race with
    /// send-failure cleanup and both paths can try to remove the same
    /// session.
    async fn unregister(&self, session: &Session);

    /// Current live sessions for a user name, possibly empty.
    ///
    /// Returns a snapshot that remains valid to act on even if a session
    /// disconnects immediately afterwards.
    async fn lookup(&self, user_name: &str) -> Vec<Arc<Session>>;

    /// Total number of live sessions across all users.
    async fn session_count(&self) -> usize;

    /// Per-user session counts, sorted by user name.
    async fn user_summaries(&self) -> Vec<UserSessionCount>;
}
