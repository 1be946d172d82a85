use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Editor, InquireError, Text};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::assistant::{Assistant, AssistantError};
use crate::config::ResolvedConfig;
use crate::generation::GeminiClient;
use crate::prompt::PromptKind;
use crate::ui::{Spinner, StreamPrinter, Style, is_prompt_cancelled};

/// One of the two input/output regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// Foreign → native translation with tone analysis.
    Incoming,
    /// Native intent → foreign reply drafts.
    Reply,
}

impl Pane {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Incoming => "in",
            Self::Reply => "reply",
        }
    }

    const fn help(self) -> &'static str {
        match self {
            Self::Incoming => "Paste a message to translate, /reply to answer, /help for commands",
            Self::Reply => "Type what you want to say, /refine <instruction> to revise, /help for commands",
        }
    }
}

/// Whether the loop should keep reading input.
enum Flow {
    Continue,
    Quit,
}

/// An interactive dual-pane session.
///
/// Each submission runs to completion before the next line is read; the
/// session context lives exactly as long as this value.
pub struct ChatSession {
    config: ResolvedConfig,
    assistant: Assistant<GeminiClient>,
    pane: Pane,
}

impl ChatSession {
    pub const fn new(config: ResolvedConfig, assistant: Assistant<GeminiClient>) -> Self {
        Self {
            config,
            assistant,
            pane: Pane::Incoming,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config);
        ui::print_pane(self.pane, &self.config);

        let incoming_config = render_config(Pane::Incoming);
        let reply_config = render_config(Pane::Reply);

        loop {
            let render = match self.pane {
                Pane::Incoming => incoming_config,
                Pane::Reply => reply_config,
            };

            let input = Text::new("")
                .with_render_config(render)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message(self.pane.help())
                .prompt();

            let flow = match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => Flow::Continue,
                    Input::Command(cmd) => self.handle_command(cmd).await?,
                    Input::Text(text) => {
                        self.submit(&text).await?;
                        Flow::Continue
                    }
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    Flow::Quit
                }
                Err(e) => return Err(e.into()),
            };

            if matches!(flow, Flow::Quit) {
                break;
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> Result<Flow> {
        match cmd {
            SlashCommand::In(text) => self.switch_and_submit(Pane::Incoming, text).await?,
            SlashCommand::Reply(text) => self.switch_and_submit(Pane::Reply, text).await?,
            SlashCommand::Refine(Some(instruction)) => {
                self.switch_pane(Pane::Reply);
                self.submit_refinement(&instruction).await?;
            }
            SlashCommand::Refine(None) => ui::print_error("Usage: /refine <instruction>"),
            SlashCommand::Edit => {
                if let Some(text) = self.compose()? {
                    self.submit(&text).await?;
                }
            }
            SlashCommand::Context => ui::print_context(self.assistant.context()),
            SlashCommand::Reset { all } => {
                if all {
                    self.assistant.clear();
                    println!("{} Session context cleared\n", Style::success("✓"));
                } else {
                    self.assistant.reset_reply();
                    println!("{} Last reply cleared\n", Style::success("✓"));
                }
            }
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return Ok(Flow::Quit),
            SlashCommand::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd} (see /help)")),
        }

        Ok(Flow::Continue)
    }

    fn switch_pane(&mut self, pane: Pane) {
        if self.pane != pane {
            self.pane = pane;
            ui::print_pane(pane, &self.config);
        }
    }

    async fn switch_and_submit(&mut self, pane: Pane, text: Option<String>) -> Result<()> {
        self.switch_pane(pane);
        if let Some(text) = text {
            self.submit(&text).await?;
        }
        Ok(())
    }

    /// Opens the user's editor for multi-line input. `None` if cancelled or empty.
    fn compose(&self) -> Result<Option<String>> {
        let title = match self.pane {
            Pane::Incoming => "Message to translate:",
            Pane::Reply => "What do you want to say?",
        };

        match Editor::new(title).prompt() {
            Ok(text) if text.trim().is_empty() => Ok(None),
            Ok(text) => Ok(Some(text)),
            Err(e) if is_prompt_cancelled(&e) => Ok(None),
            Err(InquireError::NotTTY) => {
                ui::print_error("/edit needs an interactive terminal");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Sends `text` to the active pane and prints the streamed result.
    ///
    /// Remote and input errors are shown inline; only terminal I/O errors
    /// propagate.
    async fn submit(&mut self, text: &str) -> Result<()> {
        let message = match self.pane {
            Pane::Incoming => "Analysing...",
            Pane::Reply => "Drafting replies...",
        };
        let spinner = Spinner::new(message);
        let mut printer = StreamPrinter::stdout(&spinner);

        let outcome = match self.pane {
            Pane::Incoming => self
                .assistant
                .translate_incoming(text, |chunk| printer.write(chunk))
                .await
                .map(|generation| (generation.model, None)),
            Pane::Reply => self
                .assistant
                .draft_reply(text, None, |chunk| printer.write(chunk))
                .await
                .map(|draft| (draft.generation.model, Some(draft.kind))),
        };

        printer.finish()?;
        report(outcome);
        Ok(())
    }

    async fn submit_refinement(&mut self, instruction: &str) -> Result<()> {
        let spinner = Spinner::new("Revising...");
        let mut printer = StreamPrinter::stdout(&spinner);

        let outcome = self
            .assistant
            .refine_reply(instruction, |chunk| printer.write(chunk))
            .await
            .map(|draft| (draft.generation.model, Some(draft.kind)));

        printer.finish()?;
        report(outcome);
        Ok(())
    }
}

fn report(outcome: Result<(String, Option<PromptKind>), AssistantError>) {
    match outcome {
        Ok((model, kind)) => ui::print_footer(&model, kind),
        Err(e) => ui::print_error(&e.to_string()),
    }
}

fn render_config(pane: Pane) -> RenderConfig<'static> {
    let prefix = match pane {
        Pane::Incoming => "in ❯",
        Pane::Reply => "reply ❯",
    };
    let color = match pane {
        Pane::Incoming => Color::LightBlue,
        Pane::Reply => Color::LightMagenta,
    };

    let prompt_style = Styled::new(prefix)
        .with_fg(color)
        .with_attr(Attributes::BOLD);
    let mut render_config = RenderConfig::default()
        .with_prompt_prefix(prompt_style)
        .with_answered_prompt_prefix(prompt_style);

    // Non-highlighted suggestions: gray
    render_config.option = StyleSheet::new().with_fg(Color::Grey);
    // Highlighted suggestion: purple
    render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

    render_config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_labels() {
        assert_eq!(Pane::Incoming.label(), "in");
        assert_eq!(Pane::Reply.label(), "reply");
    }

    #[test]
    fn test_render_config_prefix_per_pane() {
        assert_eq!(render_config(Pane::Incoming).prompt_prefix.content, "in ❯");
        assert_eq!(render_config(Pane::Reply).prompt_prefix.content, "reply ❯");
    }
}
