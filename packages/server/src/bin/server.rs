//! WebSocket message relay server.
//!
//! Delivers each submitted message to every live session of its receiver.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin denrei-server
//! ```

use clap::Parser;

use denrei_server::ServerConfig;
use denrei_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    // Run the server
    if let Err(e) = denrei_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
