//! Chat mode UI components.

use crate::config::ResolvedConfig;
use crate::context::SessionContext;
use crate::prompt::PromptKind;
use crate::ui::Style;

use super::session::Pane;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Longest excerpt of stored text shown by `/context`.
const PREVIEW_CHARS: usize = 60;

pub fn print_header(config: &ResolvedConfig) {
    println!(
        "{} {} - {} ⇄ {}",
        Style::header("ryomen"),
        Style::version(format!("v{VERSION}")),
        Style::value(config.languages.foreign),
        Style::value(config.languages.native),
    );
    println!(
        "{}",
        Style::secondary("Paste a message to translate it, then /reply to draft an answer. /help lists commands.")
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_pane(pane: Pane, config: &ResolvedConfig) {
    let description = match pane {
        Pane::Incoming => format!(
            "{} → {} translation with tone analysis",
            config.languages.foreign, config.languages.native
        ),
        Pane::Reply => format!(
            "{} intent → {} reply drafts",
            config.languages.native, config.languages.foreign
        ),
    };
    println!(
        "{} {}",
        Style::pane(pane.label()),
        Style::secondary(description)
    );
    println!();
}

pub fn print_footer(model: &str, kind: Option<PromptKind>) {
    let label = match kind {
        Some(PromptKind::Revision) => format!("revised by {model}"),
        Some(PromptKind::Fresh) | None => format!("by {model}"),
    };
    println!("{}", Style::secondary(format!("── {label}")));
    println!();
}

pub fn print_context(context: &SessionContext) {
    println!("{}", Style::header("Session context"));
    println!(
        "  {}  {}",
        Style::label("incoming"),
        context
            .last_incoming()
            .map_or_else(|| Style::secondary("(none)"), |t| Style::value(preview(t)))
    );
    match context.last_reply() {
        Some(reply) => {
            println!("  {}     {}", Style::label("reply"), Style::value(preview(&reply.input)));
            println!("  {}     {}", Style::label("model"), Style::value(&reply.model));
        }
        None => println!("  {}     {}", Style::label("reply"), Style::secondary("(none)")),
    }
    println!();
}

pub fn print_config(config: &ResolvedConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}    {}",
        Style::label("models"),
        Style::value(config.models.join(" → "))
    );
    println!(
        "  {}    {} ({})",
        Style::label("native"),
        Style::value(config.languages.native),
        Style::code(&config.native)
    );
    println!(
        "  {}   {} ({})",
        Style::label("foreign"),
        Style::value(config.languages.foreign),
        Style::code(&config.foreign)
    );
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!();
}

pub fn print_help() {
    let commands: &[(&str, &str)] = &[
        ("/in [text]", "Incoming pane: translate and analyse a message"),
        ("/reply [text]", "Reply pane: draft recommended, formal and casual replies"),
        ("/refine <instruction>", "Revise the last reply"),
        ("/edit", "Write multi-line input in $EDITOR"),
        ("/context", "Show what the panes remember"),
        ("/reset [all]", "Forget the last reply (all: also the incoming message)"),
        ("/config", "Show current configuration"),
        ("/help", "Show this help"),
        ("/quit", "Exit"),
    ];

    println!("{}", Style::header("Available commands"));
    for (command, description) in commands {
        println!(
            "  {:<24} {}",
            Style::command(command),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

fn preview(text: &str) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() > PREVIEW_CHARS {
        let cut: String = single_line.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}…")
    } else {
        single_line
    }
}
