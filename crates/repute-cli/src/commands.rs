//! Chat command parsing: `!link <wallet> <nickname>`, `!rep <nickname>`,
//! `!score <address>`, `!help`.

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Link { wallet: String, nickname: String },
    Rep { nickname: String },
    Score { address: String },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Known command with the wrong arguments.
    #[error("Usage: {usage}")]
    Usage { usage: String },

    #[error("unknown command: {name}")]
    UnknownCommand { name: String },

    /// The line does not start with the prefix. Chat adapters ignore these.
    #[error("not a command")]
    NotACommand,
}

/// Parse one line. Command names are case-insensitive; extra arguments are
/// a usage error rather than silently dropped.
pub fn parse_command(line: &str, prefix: &str) -> Result<BotCommand, CommandError> {
    let body = line
        .trim()
        .strip_prefix(prefix)
        .filter(|rest| !prefix.is_empty() && !rest.is_empty())
        .ok_or(CommandError::NotACommand)?;

    let mut words = body.split_whitespace();
    let name = words.next().ok_or(CommandError::NotACommand)?.to_lowercase();
    let args: Vec<&str> = words.collect();
    let usage = |text: &str| CommandError::Usage {
        usage: format!("{prefix}{text}"),
    };

    match name.as_str() {
        "link" => match args.as_slice() {
            [wallet, nickname] => Ok(BotCommand::Link {
                wallet: wallet.to_string(),
                nickname: nickname.to_string(),
            }),
            _ => Err(usage("link <wallet> <nickname>")),
        },
        "rep" => match args.as_slice() {
            [nickname] => Ok(BotCommand::Rep {
                nickname: nickname.to_string(),
            }),
            _ => Err(usage("rep <nickname>")),
        },
        "score" => match args.as_slice() {
            [address] => Ok(BotCommand::Score {
                address: address.to_string(),
            }),
            _ => Err(usage("score <address>")),
        },
        "help" => Ok(BotCommand::Help),
        _ => Err(CommandError::UnknownCommand { name }),
    }
}

/// Help text listing every command under `prefix`.
pub fn help_text(prefix: &str) -> String {
    format!(
        "Commands:\n\
         {prefix}link <wallet> <nickname>  link a nickname to a wallet\n\
         {prefix}rep <nickname>            reputation of a linked nickname\n\
         {prefix}score <address>           reputation of a wallet address\n\
         {prefix}help                      this message"
    )
}
