//! Subcommand implementations.

use anyhow::Result;

use crate::assistant::Assistant;
use crate::cli::GlobalOptions;
use crate::config::{ConfigManager, ResolvedConfig, resolve_config};
use crate::generation::{FallbackExecutor, GeminiClient};

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Model list command handler.
pub mod models;

/// One-shot reply command handler.
pub mod reply;

/// One-shot translation command handler.
pub mod translate;

/// Loads the config file and merges it with the CLI options.
fn load_config(options: &GlobalOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    resolve_config(&options.resolve_options(), &file_config)
}

fn build_assistant(config: &ResolvedConfig) -> Assistant<GeminiClient> {
    let client = GeminiClient::new(config.endpoint.clone(), config.api_key.clone());
    Assistant::new(
        FallbackExecutor::new(client, config.models.clone()),
        config.languages,
    )
}
