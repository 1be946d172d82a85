use anyhow::Result;
use std::path::Path;

use super::{build_assistant, load_config};
use crate::cli::GlobalOptions;
use crate::input::InputReader;
use crate::status;
use crate::ui::{Spinner, StreamPrinter, Style};

/// Translates one incoming message from a file or stdin.
pub async fn run_translate(options: &GlobalOptions, file: Option<&Path>) -> Result<()> {
    let config = load_config(options)?;
    let source_text = InputReader::read(file)?;
    let mut assistant = build_assistant(&config);

    let spinner = Spinner::new("Analysing...");
    let mut printer = StreamPrinter::stdout(&spinner);

    let result = assistant
        .translate_incoming(&source_text, |chunk| printer.write(chunk))
        .await;
    printer.finish()?;

    let generation = result?;
    status!("{}", Style::secondary(format!("── by {}", generation.model)));

    Ok(())
}
