use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;

use repute_cli::app::{parse_at, require_address, AddressScore, App};
use repute_cli::bot::{self, DEGRADED_NOTICE};
use repute_core::config::{CliOverrides, ReputeConfig};
use repute_core::constants::VERSION;

/// Attestation-based reputation scores from the knowledge graph
#[derive(Debug, Parser)]
#[command(name = "repute", version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults to ./repute.toml when present)
    #[arg(short, long, global = true, env = "REPUTE_CONFIG")]
    config: Option<PathBuf>,

    /// GraphQL endpoint of the knowledge graph
    #[arg(long, global = true)]
    graphql_url: Option<String>,

    /// Path to the nickname registry database
    #[arg(long, global = true)]
    registry: Option<String>,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Never call the LLM summary endpoint
    #[arg(long, global = true)]
    no_llm: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Link a nickname to a wallet address
    Link {
        wallet: String,
        nickname: String,
    },

    /// Remove a nickname link
    Unlink { nickname: String },

    /// List linked nicknames
    Links {
        #[arg(long)]
        json: bool,
    },

    /// Reputation report for a linked nickname
    Rep {
        nickname: String,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
        /// Use the LLM summary when one is configured
        #[arg(long)]
        llm: bool,
    },

    /// Score one or more addresses
    Score {
        #[arg(required_unless_present = "input")]
        addresses: Vec<String>,
        /// Evaluation time (RFC 3339); defaults to now
        #[arg(long)]
        at: Option<String>,
        /// Print scores as JSON
        #[arg(long)]
        json: bool,
        /// Score a JSON array of attestations instead of fetching
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Answer chat-style commands read line by line from stdin
    Bot {
        #[arg(long, default_value = "!")]
        prefix: String,
    },
}

fn main() -> Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let overrides = CliOverrides {
        graphql_url: cli.graphql_url.clone(),
        registry_path: cli.registry.clone(),
        llm_enabled: cli.no_llm.then_some(false),
        log_level: cli.log_level.clone(),
        log_json: cli.log_json.then_some(true),
    };
    let config = ReputeConfig::load(cli.config.as_deref(), Some(&overrides))
        .context("failed to load configuration")?;

    repute_observability::init_tracing(&config.observability);
    info!(version = VERSION, "repute starting");

    let app = App::from_config(config).context("failed to initialize")?;

    match cli.command {
        Commands::Link { wallet, nickname } => {
            let record = app.link(&nickname, &wallet)?;
            println!("Linked {} -> {}", record.nickname, record.wallet);
        }
        Commands::Unlink { nickname } => {
            if app.unlink(&nickname)? {
                println!("Unlinked {}", nickname.trim().to_lowercase());
            } else {
                bail!("nickname `{nickname}` is not linked");
            }
        }
        Commands::Links { json } => {
            let links = app.links()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&links)?);
            } else if links.is_empty() {
                println!("No nicknames linked.");
            } else {
                for record in links {
                    println!(
                        "{:<24} {}  ({})",
                        record.nickname,
                        record.wallet,
                        record.linked_at.format("%Y-%m-%d")
                    );
                }
            }
        }
        Commands::Rep { nickname, json, llm } => {
            let report = app.rep(&nickname, Utc::now())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", app.summarize(&report.summary_input(), llm).text);
                if let Some(error) = &report.fetch_error {
                    println!("{DEGRADED_NOTICE}");
                    eprintln!("warning: attestations unavailable ({error}), score is neutral");
                }
            }
        }
        Commands::Score {
            addresses,
            at,
            json,
            input,
        } => {
            let now = match at {
                Some(raw) => parse_at(&raw)?,
                None => Utc::now(),
            };
            let scores = match input {
                Some(path) => {
                    let raw = fs::read_to_string(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    let value: serde_json::Value = serde_json::from_str(&raw)
                        .with_context(|| format!("{} is not valid JSON", path.display()))?;
                    let subjects = if addresses.is_empty() {
                        vec![path
                            .file_stem()
                            .map(|s| s.to_string_lossy().into_owned())
                            .unwrap_or_default()]
                    } else {
                        addresses
                    };
                    subjects
                        .iter()
                        .map(|s| {
                            app.score_json(s, &value, now).map(|score| AddressScore {
                                score,
                                degraded: false,
                                fetch_error: None,
                            })
                        })
                        .collect::<Result<Vec<_>, _>>()?
                }
                None => {
                    let wallets = addresses
                        .iter()
                        .map(|a| require_address(a))
                        .collect::<Result<Vec<_>, _>>()?;
                    if wallets.len() == 1 {
                        vec![app.score_address(&wallets[0], now)]
                    } else {
                        app.score_addresses(&wallets, now)
                    }
                }
            };
            print_scores(&app, &scores, json)?;
        }
        Commands::Bot { prefix } => {
            info!(prefix = %prefix, "bot: reading commands from stdin");
            let stdin = io::stdin();
            bot::run(&app, &prefix, stdin.lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}

fn print_scores(app: &App, scores: &[AddressScore], json: bool) -> Result<()> {
    if json {
        let out = if scores.len() == 1 {
            serde_json::to_string_pretty(&scores[0])?
        } else {
            serde_json::to_string_pretty(scores)?
        };
        println!("{out}");
        return Ok(());
    }
    for (i, scored) in scores.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let input = app.address_summary_input(scored.score.clone(), None);
        println!("{}", app.summarize(&input, false).text);
        if let Some(error) = &scored.fetch_error {
            println!("{DEGRADED_NOTICE}");
            eprintln!(
                "warning: attestations for {} unavailable ({error}), score is neutral",
                scored.score.subject
            );
        }
    }
    Ok(())
}
