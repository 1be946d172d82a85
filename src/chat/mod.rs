//! Interactive dual-pane session.
//!
//! A REPL where plain text goes to the active pane and slash commands switch
//! panes, refine replies and manage the session context.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{ChatSession, Pane};
