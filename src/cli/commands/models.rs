//! Model list command handler.

use anyhow::Result;

use crate::cli::GlobalOptions;
use crate::config::{ConfigManager, resolve_models};
use crate::ui::Style;

/// Prints the model fallback order, most preferred first.
///
/// Needs no API key, so it also works before setup is complete.
pub fn print_models(options: &GlobalOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;
    let models = resolve_models(&options.resolve_options(), &config)?;

    let source = if !options.models.is_empty() {
        "command line"
    } else if config.ryomen.models.is_some() {
        "config file"
    } else {
        "built-in defaults"
    };

    println!(
        "{} {}",
        Style::header("Model fallback order"),
        Style::secondary(format!("(from {source})"))
    );
    for (index, model) in models.iter().enumerate() {
        println!("  {}. {}", index + 1, Style::value(model));
    }
    println!();
    println!(
        "{}",
        Style::secondary("Models are tried in order; only quota errors move on to the next one.")
    );

    Ok(())
}
