use std::path::Path;

use clap::{Parser, Subcommand};

use assist_cli::commands::{config_ops, query_ops, replay_ops};
use assist_cli::logging;

#[derive(Parser)]
#[command(name = "assisttool", about = "Text-input assistant diagnostics")]
struct Cli {
    /// Settings TOML (defaults to the embedded settings)
    #[arg(long, global = true)]
    config: Option<String>,
    /// Override endpoint.base_url
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Write JSONL traces into this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Query the typo-correction endpoint for a word
    Typo {
        word: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Query the autocomplete endpoint for a prefix
    Complete {
        prefix: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay an interaction script against an in-memory page
    Replay {
        /// Path to the script file
        script: String,
        /// Discard out-of-order and suppressed responses
        #[arg(long)]
        sequence: bool,
    },

    /// Print the embedded default settings TOML
    SettingsExport,

    /// Validate a settings TOML file
    SettingsValidate { file: String },
}

fn main() {
    let cli = Cli::parse();

    match &cli.trace_dir {
        Some(dir) if cfg!(feature = "trace") => assist_engine::init_tracing(Path::new(dir)),
        _ => logging::init_stderr_warnings(),
    }

    let load = || config_ops::load(cli.config.as_deref(), cli.base_url.as_deref());

    match cli.command {
        Command::Typo { word, json } => query_ops::typo(&load(), &word, json),
        Command::Complete { prefix, json } => query_ops::complete(&load(), &prefix, json),
        Command::Replay { script, sequence } => replay_ops::replay(&load(), &script, sequence),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
