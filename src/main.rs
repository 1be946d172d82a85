use anyhow::Result;
use clap::Parser;

use ryomen::assistant::AssistantError;
use ryomen::cli::commands::reply::ReplyOptions;
use ryomen::cli::commands::{chat, configure, models, reply, translate};
use ryomen::cli::{Args, Command};
use ryomen::config::ConfigError;
use ryomen::generation::FallbackError;
use ryomen::input::InputError;
use ryomen::language::print_languages;
use ryomen::logging;
use ryomen::output::{self, OutputConfig};
use ryomen::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let no_color = args.global.no_color || OutputConfig::default().no_color;
    output::init(OutputConfig {
        quiet: args.global.quiet,
        no_color,
    });
    logging::init(args.global.quiet, no_color);

    if let Err(e) = run(args).await {
        eprintln!("{} {e:#}", Style::error("Error:"));
        std::process::exit(exit_code(&e));
    }
}

async fn run(args: Args) -> Result<()> {
    let options = &args.global;

    match args.command {
        None | Some(Command::Chat) => chat::run_chat(options).await,
        Some(Command::Translate { file }) => translate::run_translate(options, file.as_deref()).await,
        Some(Command::Reply {
            file,
            incoming,
            instruction,
        }) => {
            let reply_options = ReplyOptions {
                file: file.as_deref(),
                incoming: incoming.as_deref(),
                instruction: instruction.as_deref(),
            };
            reply::run_reply(options, reply_options).await
        }
        Some(Command::Models) => models::print_models(options),
        Some(Command::Languages) => {
            print_languages();
            Ok(())
        }
        Some(Command::Configure { show }) => configure::run_configure(show),
    }
}

fn exit_code(error: &anyhow::Error) -> exitcode::ExitCode {
    if error.downcast_ref::<ConfigError>().is_some() {
        return exitcode::CONFIG;
    }

    if error.downcast_ref::<InputError>().is_some() {
        return exitcode::DATAERR;
    }

    match error.downcast_ref::<AssistantError>() {
        Some(
            AssistantError::EmptyInput
            | AssistantError::EmptyInstruction
            | AssistantError::NothingToRefine,
        ) => return exitcode::DATAERR,
        Some(AssistantError::Generation(_)) => return exitcode::UNAVAILABLE,
        None => {}
    }

    if error.downcast_ref::<FallbackError>().is_some() {
        return exitcode::UNAVAILABLE;
    }

    exitcode::SOFTWARE
}
