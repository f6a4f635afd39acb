//! Point-to-point WebSocket message relay.
//!
//! A client connects as a named user and submits messages addressed to
//! another named user; the server delivers each message to every live
//! session of the receiver. No persistence, no offline queueing.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::{ServerError, build_app, run_server};
