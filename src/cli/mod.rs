//! Command-line interface module.
//!
//! Provides argument parsing, interactive prompts and the command handlers.

pub mod args;
pub mod commands;
pub mod prompt;
