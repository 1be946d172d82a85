use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ResolveOptions;

#[derive(Parser, Debug)]
#[command(name = "ryomen")]
#[command(about = "Translate incoming messages and draft tone-matched replies")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options accepted by every subcommand.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Model id to try; repeat to build a fallback list in priority order
    #[arg(short = 'm', long = "model", global = true)]
    pub models: Vec<String>,

    /// Your language (ISO 639-1, e.g., ja)
    #[arg(short = 'n', long, global = true)]
    pub native: Option<String>,

    /// Your correspondents' language (ISO 639-1, e.g., en)
    #[arg(short = 'f', long, global = true)]
    pub foreign: Option<String>,

    /// API endpoint URL
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Suppress spinners, footers and non-error log output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

impl GlobalOptions {
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            models: self.models.clone(),
            native: self.native.clone(),
            foreign: self.foreign.clone(),
            endpoint: self.endpoint.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive dual-pane session (default)
    Chat,
    /// Translate an incoming message and analyse its tone
    Translate {
        /// File to translate (reads from stdin if not provided)
        file: Option<PathBuf>,
    },
    /// Draft recommended, formal and casual replies from your intent
    Reply {
        /// File with your intent (reads from stdin if not provided)
        file: Option<PathBuf>,

        /// The message you are replying to
        #[arg(short = 'c', long)]
        incoming: Option<String>,

        /// Extra instruction for the drafts (e.g., "mention the deadline")
        #[arg(short = 'i', long)]
        instruction: Option<String>,
    },
    /// Show the model fallback order
    Models,
    /// List supported language codes
    Languages,
    /// Configure ryomen settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
