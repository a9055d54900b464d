//! # repute-cli
//!
//! Wiring for the `repute` binary: the application service shared by the
//! one-shot subcommands and the line-oriented chat adapter.

pub mod app;
pub mod bot;
pub mod commands;

pub use app::{AddressScore, App, RepReport};
pub use commands::{parse_command, BotCommand, CommandError};
