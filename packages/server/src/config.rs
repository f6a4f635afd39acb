//! Server configuration parsed from the command line.

use clap::Parser;

use crate::domain::DEFAULT_SESSION_CAPACITY;

/// Command line configuration for the relay server.
#[derive(Debug, Clone, Parser)]
#[command(name = "denrei-server", about = "Point-to-point WebSocket message relay")]
pub struct ServerConfig {
    /// Address to bind the listener to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Maximum number of live sessions across all users
    #[arg(long, default_value_t = DEFAULT_SESSION_CAPACITY)]
    pub session_capacity: usize,
}
