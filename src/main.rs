//! QuestForge - Procedural quest generator for TTRPG campaigns
//!
//! QuestForge composes quests from curated content tables:
//! - Generates quests from typed parameters, with "random" wildcards
//! - Keeps a persistent library of saved quests, history and favorites
//! - Captures quest shapes as reusable templates
//! - Exports and imports quests as JSON

mod application;
mod domain;
mod infrastructure;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::cli::{self, Cli};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "questforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::from_env();

    // Initialize application state
    let state = AppState::new(config).await?;
    tracing::debug!(
        "Library file: {}",
        state.config.storage_path().display()
    );

    cli::run(state, cli).await
}
