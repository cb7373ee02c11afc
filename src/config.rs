//! Process configuration: command line, environment, and logging setup.

use std::path::PathBuf;

use clap::Parser;

use crate::model::UserId;

/// Placeholder owner id the shop first deployed with. Override it with
/// `OWNER_ID` in any real deployment.
const DEFAULT_OWNER_ID: i64 = 123_456_789;

/// Command-line and environment configuration.
///
/// Every flag can come from the environment, which is how the hosted bot is
/// configured. A missing token aborts startup before anything else runs.
#[derive(Debug, Parser)]
#[command(name = "tienda-bot", about = "Storefront chat bot over a JSON catalog")]
pub struct Cli {
    /// Chat-network authentication token.
    #[arg(long, env = "BOT_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Numeric user id of the shop owner.
    #[arg(long, env = "OWNER_ID", default_value_t = DEFAULT_OWNER_ID)]
    pub owner_id: i64,

    /// Path of the JSON catalog document.
    #[arg(long, env = "STORE_PATH", default_value = "db.json")]
    pub store_path: PathBuf,
}

impl Cli {
    /// The subset of configuration the event loop needs.
    pub fn bot_config(&self) -> BotConfig {
        BotConfig {
            owner: UserId(self.owner_id),
        }
    }
}

/// Runtime configuration for the dispatcher.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub owner: UserId,
}

impl BotConfig {
    /// Capability check: exactly one identity may manage the shop.
    ///
    /// Comparing numeric ids keeps the check immune to renamed accounts; a
    /// richer role set would slot in here without touching call sites.
    pub fn is_owner(&self, user: UserId) -> bool {
        user == self.owner
    }
}

/// Initializes the tracing/logging infrastructure for the application.
///
/// Structured logging with environment-based filtering: set `RUST_LOG` to
/// control verbosity, e.g. `RUST_LOG=info` or `RUST_LOG=tienda_bot=debug`.
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    // Initialize the tracing subscriber with environment-based filtering
    // This allows users to control log levels via the RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
