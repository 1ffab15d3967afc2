//! Client configuration.

use clap::Parser;
use reqwest::Url;

/// Order lookup client configuration
#[derive(Debug, Parser)]
#[command(name = "ordertrace", about = "Order lookup client", long_about = None)]
pub struct ClientConfig {
    /// Base URL of the order service
    #[arg(
        short,
        long,
        env = "ORDER_SERVICE_URL",
        default_value = "http://localhost:8080"
    )]
    pub base_url: Url,

    /// Order identifier to look up; omit to enter the interactive prompt
    pub order_id: Option<String>,
}

impl ClientConfig {
    /// Load configuration from `.env`, the environment, and CLI arguments.
    #[must_use]
    pub fn load() -> Self {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::parse()
    }
}
