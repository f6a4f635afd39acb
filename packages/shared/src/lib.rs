//! Shared utilities for the Denrei workspace.
//!
//! Provides logging setup and time helpers used by the server crate.

pub mod logger;
pub mod time;

pub use logger::setup_logger;
pub use time::epoch_millis;
