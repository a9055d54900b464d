//! Line-oriented chat adapter: one command per input line, one reply block
//! per command. Lines that are not commands are ignored.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};

use repute_core::errors::{RegistryError, ReputeError};

use crate::app::{require_address, App};
use crate::commands::{help_text, parse_command, BotCommand, CommandError};

/// Appended to replies built from a neutral fallback score.
pub const DEGRADED_NOTICE: &str = "(attestations unavailable, score may be incomplete)";

/// Reply to one line, or `None` when the line is not addressed to the bot.
pub fn handle_line(app: &App, prefix: &str, line: &str, now: DateTime<Utc>) -> Option<String> {
    let command = match parse_command(line, prefix) {
        Ok(command) => command,
        Err(CommandError::NotACommand) => return None,
        Err(CommandError::UnknownCommand { name }) => {
            return Some(format!("Unknown command `{name}`. Try {prefix}help."))
        }
        Err(e @ CommandError::Usage { .. }) => return Some(e.to_string()),
    };

    let reply = match command {
        BotCommand::Help => help_text(prefix),
        BotCommand::Link { wallet, nickname } => match app.link(&nickname, &wallet) {
            Ok(record) => format!("Success: {} is now linked.", record.nickname),
            Err(e) => describe(&e, prefix),
        },
        BotCommand::Rep { nickname } => match app.rep(&nickname, now) {
            Ok(report) => {
                let prefer_llm = app.summary().has_llm();
                let mut text = app.summarize(&report.summary_input(), prefer_llm).text;
                if report.degraded {
                    text.push('\n');
                    text.push_str(DEGRADED_NOTICE);
                }
                text
            }
            Err(e) => describe(&e, prefix),
        },
        BotCommand::Score { address } => match require_address(&address) {
            Ok(wallet) => {
                let scored = app.score_address(&wallet, now);
                let input = app.address_summary_input(scored.score, None);
                let mut text = app.summarize(&input, false).text;
                if scored.degraded {
                    text.push('\n');
                    text.push_str(DEGRADED_NOTICE);
                }
                text
            }
            Err(e) => describe(&e, prefix),
        },
    };
    Some(reply)
}

/// User-facing text for an error.
fn describe(error: &ReputeError, prefix: &str) -> String {
    match error {
        ReputeError::Registry(RegistryError::InvalidAddress { .. }) => {
            "The wallet address is invalid.".to_string()
        }
        ReputeError::Registry(RegistryError::InvalidNickname { reason }) => {
            format!("Invalid nickname: {reason}.")
        }
        ReputeError::NicknameNotFound { .. } => {
            format!("Nickname not found. Link it first with {prefix}link.")
        }
        other => {
            tracing::error!(error = %other, "command failed");
            "Something went wrong. Please try again later.".to_string()
        }
    }
}

/// Read commands from `input` until EOF, writing replies to `output`.
pub fn run<R: BufRead, W: Write>(
    app: &App,
    prefix: &str,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if let Some(reply) = handle_line(app, prefix, &line, Utc::now()) {
            writeln!(output, "{reply}")?;
            output.flush()?;
        }
    }
    Ok(())
}
