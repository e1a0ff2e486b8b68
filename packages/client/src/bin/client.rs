//! Room-based WebSocket chat client.
//!
//! Lists rooms from a room directory, joins one over WebSocket and sends
//! messages typed at the prompt. Lines starting with `/` are commands; type
//! `/help` for the list.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin heya-client -- --username Alice
//! cargo run --bin heya-client -- -n Bob -d http://127.0.0.1:8080
//! ```

use clap::Parser;

use heya_client::config::{ClientConfig, DEFAULT_URL};
use heya_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "heya-client")]
#[command(about = "Room-based WebSocket chat client", long_about = None)]
struct Args {
    /// Display name attached to outgoing messages (defaults to "anonymous")
    #[arg(short = 'n', long)]
    username: Option<String>,

    /// WebSocket messaging endpoint
    #[arg(short = 'u', long, default_value = DEFAULT_URL)]
    url: String,

    /// Base URL of an HTTP room directory; the built-in room list is used when omitted
    #[arg(short = 'd', long)]
    directory_url: Option<String>,

    /// Width of the chat view in columns
    #[arg(short = 'w', long)]
    width: Option<usize>,

    /// Show info-level logs on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    let level = if args.verbose { "info" } else { "warn" };
    setup_logger("heya_client", env!("CARGO_BIN_NAME"), level);

    let config = ClientConfig::new(
        args.username.as_deref(),
        args.url,
        args.directory_url,
        args.width,
    );

    // Run the client
    if let Err(e) = heya_client::run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
