//! # ryomen - Two-pane Message Assistant
//!
//! `ryomen` helps you correspond in a language you don't write fluently.
//! The incoming pane translates a foreign-language message into your language
//! and explains its tone; the reply pane turns what you want to say into
//! recommended, formal and casual replies with back-translations.
//!
//! Generation goes through Gemini models in priority order. When a model's
//! quota is exhausted the next one is tried; any other error stops the
//! request.
//!
//! ## Quick Start
//!
//! ```bash
//! export GEMINI_API_KEY="..."
//!
//! # Interactive session
//! ryomen
//!
//! # Translate a message from stdin
//! pbpaste | ryomen translate
//!
//! # Draft replies to it
//! echo "来週なら参加できます" | ryomen reply --incoming "Can you join the call on Friday?"
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/ryomen/config.toml`:
//!
//! ```toml
//! [ryomen]
//! models = ["gemini-2.5-flash", "gemini-2.5-flash-lite", "gemini-2.0-flash"]
//! native = "ja"
//! foreign = "en"
//!
//! [api]
//! api_key_env = "GEMINI_API_KEY"
//! ```

/// Pane operations over a session context.
pub mod assistant;

/// Interactive dual-pane session.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and settings resolution.
pub mod config;

/// Per-session memory of the last incoming message and reply.
pub mod context;

/// File system utilities.
pub mod fs;

/// Gemini streaming client and ordered model fallback.
pub mod generation;

/// Input reading from files and stdin.
pub mod input;

/// Supported languages and the native/foreign pair.
pub mod language;

/// Diagnostic logging via `tracing`.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Prompt templates for translation and reply drafting.
pub mod prompt;

/// Terminal UI components (spinner, colors, streamed output).
pub mod ui;
