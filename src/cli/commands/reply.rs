use anyhow::Result;
use std::path::Path;

use super::{build_assistant, load_config};
use crate::cli::GlobalOptions;
use crate::input::InputReader;
use crate::status;
use crate::ui::{Spinner, StreamPrinter, Style};

pub struct ReplyOptions<'a> {
    pub file: Option<&'a Path>,
    /// The message being answered.
    pub incoming: Option<&'a str>,
    pub instruction: Option<&'a str>,
}

/// Drafts replies for one piece of intent from a file or stdin.
///
/// A one-shot run has no earlier draft, so the instruction always extends a
/// fresh prompt rather than revising.
pub async fn run_reply(options: &GlobalOptions, reply: ReplyOptions<'_>) -> Result<()> {
    let config = load_config(options)?;
    let intent = InputReader::read(reply.file)?;
    let mut assistant = build_assistant(&config);

    if let Some(incoming) = reply.incoming.map(str::trim).filter(|t| !t.is_empty()) {
        assistant.set_incoming(incoming);
    }

    let spinner = Spinner::new("Drafting replies...");
    let mut printer = StreamPrinter::stdout(&spinner);

    let result = assistant
        .draft_reply(&intent, reply.instruction, |chunk| printer.write(chunk))
        .await;
    printer.finish()?;

    let draft = result?;
    status!("{}", Style::secondary(format!("── by {}", draft.generation.model)));

    Ok(())
}
