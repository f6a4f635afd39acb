//! Server state and connection handshake types.

use serde::Deserialize;
use std::sync::Arc;

use crate::domain::SessionRegistry;

/// Query parameters for WebSocket connection
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    /// Authenticated user name, supplied by the handshake
    pub user: String,
}

/// Shared application state
pub struct AppState {
    /// Registry（共有セッション表の抽象化）
    pub registry: Arc<dyn SessionRegistry>,
}
