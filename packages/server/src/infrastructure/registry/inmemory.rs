//! InMemory Session Registry 実装
//!
//! ドメイン層が定義する SessionRegistry trait の具体的な実装。
//! HashMap をインメモリのセッション表として使用します。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    DEFAULT_SESSION_CAPACITY, RegistryError, Session, SessionRegistry, UserSessionCount,
};

/// インメモリ Session Registry 実装
///
/// user name → live sessions の対応表を RwLock 付き HashMap で保持する。
/// 1 ユーザー名あたり複数セッションを許容する。
pub struct InMemorySessionRegistry {
    /// user name -> live sessions
    sessions: RwLock<HashMap<String, Vec<Arc<Session>>>>,
    /// Total session capacity across all users
    capacity: usize,
}

impl InMemorySessionRegistry {
    /// Create a registry with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SESSION_CAPACITY)
    }

    /// Create a registry with a custom total session capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            capacity,
        }
    }
}

impl Default for InMemorySessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn register(&self, session: Arc<Session>) -> Result<(), RegistryError> {
        let mut sessions = self.sessions.write().await;

        // Re-registering the same session id is a no-op
        if let Some(entries) = sessions.get(session.user_name().as_str())
            && entries.iter().any(|s| s.id() == session.id())
        {
            tracing::debug!(
                "Session {} for user '{}' already registered",
                session.id(),
                session.user_name()
            );
            return Ok(());
        }

        let current: usize = sessions.values().map(Vec::len).sum();
        if current >= self.capacity {
            return Err(RegistryError::CapacityExceeded {
                capacity: self.capacity,
                current,
            });
        }

        let user_name = session.user_name().as_str().to_string();
        sessions.entry(user_name).or_default().push(session);
        Ok(())
    }

    async fn unregister(&self, session: &Session) {
        let mut sessions = self.sessions.write().await;

        if let Some(entries) = sessions.get_mut(session.user_name().as_str()) {
            let before = entries.len();
            entries.retain(|s| s.id() != session.id());

            if entries.len() != before {
                tracing::debug!(
                    "Removed session {} for user '{}', remaining: {}",
                    session.id(),
                    session.user_name(),
                    entries.len()
                );
            }

            // Drop the user entry once its last session is gone
            if entries.is_empty() {
                sessions.remove(session.user_name().as_str());
            }
        }
    }

    async fn lookup(&self, user_name: &str) -> Vec<Arc<Session>> {
        let sessions = self.sessions.read().await;
        sessions.get(user_name).cloned().unwrap_or_default()
    }

    async fn session_count(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.values().map(Vec::len).sum()
    }

    async fn user_summaries(&self) -> Vec<UserSessionCount> {
        let sessions = self.sessions.read().await;
        let mut summaries: Vec<UserSessionCount> = sessions
            .iter()
            .map(|(user_name, entries)| UserSessionCount {
                user_name: user_name.clone(),
                session_count: entries.len(),
            })
            .collect();

        // Sort by user name for consistent ordering
        summaries.sort_by(|a, b| a.user_name.cmp(&b.user_name));

        summaries
    }
}
