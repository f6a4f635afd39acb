//! HTTP API response DTOs for the relay.

use serde::{Deserialize, Serialize};

/// Per-user session count for the sessions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummaryDto {
    pub user_name: String,
    pub session_count: usize,
}
