use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/in", "Switch to the incoming pane (optionally translate text)"),
    ("/reply", "Switch to the reply pane (optionally draft from text)"),
    ("/refine", "Revise the last reply with an instruction"),
    ("/edit", "Compose multi-line input in $EDITOR"),
    ("/context", "Show the session context"),
    ("/reset", "Clear the last reply (/reset all clears everything)"),
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/quit", "Exit"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') || input.contains(char::is_whitespace) {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    /// Switch to the incoming pane, submitting the text if given.
    In(Option<String>),
    /// Switch to the reply pane, submitting the text if given.
    Reply(Option<String>),
    Refine(Option<String>),
    Edit,
    Context,
    Reset { all: bool },
    Config,
    Help,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let (name, rest) = cmd
        .split_once(char::is_whitespace)
        .map_or((cmd, ""), |(name, rest)| (name, rest.trim()));
    let argument = (!rest.is_empty()).then(|| rest.to_string());

    let command = match name {
        "in" | "incoming" => SlashCommand::In(argument),
        "reply" | "out" => SlashCommand::Reply(argument),
        "refine" => SlashCommand::Refine(argument),
        "edit" => SlashCommand::Edit,
        "context" => SlashCommand::Context,
        "reset" if rest.is_empty() => SlashCommand::Reset { all: false },
        "reset" if rest == "all" => SlashCommand::Reset { all: true },
        "config" => SlashCommand::Config,
        "help" => SlashCommand::Help,
        "quit" | "exit" | "q" => SlashCommand::Quit,
        _ => SlashCommand::Unknown(cmd.to_string()),
    };

    Input::Command(command)
}
