//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENVS, DEFAULT_MODELS, GeneralConfig,
};
use crate::language::{DEFAULT_FOREIGN, DEFAULT_NATIVE, SUPPORTED_LANGUAGES};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current file; otherwise interactively sets the
/// model priority list, the language pair and the API key variable.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;

    if show {
        let config = manager.load_or_default()?;
        print_current(&config, &manager);
        return Ok(());
    }

    handle_prompt_cancellation(|| run_configure_inner(&manager))
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;
    print_current(&config, manager);

    let models = prompt_models(config.ryomen.models.as_deref())?;
    let native = select_language(
        "Your language:",
        config.ryomen.native.as_deref().unwrap_or(DEFAULT_NATIVE),
    )?;
    let foreign = select_language(
        "Your correspondents' language:",
        config.ryomen.foreign.as_deref().unwrap_or(DEFAULT_FOREIGN),
    )?;

    if native == foreign {
        bail!("Your language and your correspondents' language must differ");
    }

    let api_key_env = prompt_api_key_env(config.api.api_key_env.as_deref())?;

    config.ryomen = GeneralConfig {
        models: Some(models),
        native: Some(native),
        foreign: Some(foreign),
    };
    config.api.api_key_env = api_key_env;

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current(config: &ConfigFile, manager: &ConfigManager) {
    let not_set = || Style::secondary("(not set)");

    println!(
        "{} {}",
        Style::header("Current settings"),
        Style::secondary(manager.config_path().display().to_string())
    );
    println!(
        "  {}       {}",
        Style::label("models"),
        config
            .ryomen
            .models
            .as_ref()
            .map_or_else(not_set, |m| Style::value(m.join(", ")))
    );
    println!(
        "  {}       {}",
        Style::label("native"),
        config.ryomen.native.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}      {}",
        Style::label("foreign"),
        config.ryomen.foreign.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        config.api.endpoint.as_deref().map_or_else(not_set, Style::secondary)
    );
    println!(
        "  {}  {}",
        Style::label("api_key_env"),
        config.api.api_key_env.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}      {}",
        Style::label("api_key"),
        if config.api.get_api_key().is_some() {
            Style::success("(found)")
        } else {
            Style::warning("(missing)")
        }
    );
    println!();
}

fn prompt_models(current: Option<&[String]>) -> Result<Vec<String>> {
    let default = current.map_or_else(|| DEFAULT_MODELS.join(", "), |m| m.join(", "));

    let answer = Text::new("Model fallback order:")
        .with_default(&default)
        .with_help_message("Comma-separated, most preferred first")
        .prompt()?;

    let models: Vec<String> = answer
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(ToString::to_string)
        .collect();

    if models.is_empty() {
        bail!("At least one model is required");
    }

    Ok(models)
}

fn select_language(message: &str, default: &str) -> Result<String> {
    // Build options with format "code - Name"
    let options: Vec<String> = SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, name)| format!("{code} - {name}"))
        .collect();

    let default_index = SUPPORTED_LANGUAGES
        .iter()
        .position(|(code, _)| *code == default)
        .unwrap_or(0);

    let selection = Select::new(message, options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract code from "code - Name" format
    let code = selection.split(" - ").next().unwrap_or(&selection);

    Ok(code.to_string())
}

fn prompt_api_key_env(current: Option<&str>) -> Result<Option<String>> {
    let help = format!(
        "Leave empty to search {}",
        DEFAULT_API_KEY_ENVS.join(" and ")
    );

    let answer = Text::new("API key environment variable:")
        .with_default(current.unwrap_or(""))
        .with_help_message(&help)
        .prompt()?;

    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| answer.to_string()))
}
