//! quizscore CLI: scores answer sets described in TOML files.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "quizscore", version, about = "Weighted scoring for graded quiz answers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an answer set
    Score {
        /// Path to a .toml answer set or .json dump
        #[arg(long)]
        answers: PathBuf,

        /// Extra answers to toggle (0-based, comma-separated, e.g. "0,2")
        #[arg(long)]
        toggle: Option<String>,

        /// Output format: text, json, table
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the full answer sequence as JSON
    Dump {
        /// Path to a .toml answer set or .json dump
        #[arg(long)]
        answers: PathBuf,

        /// Write the dump to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate answer set TOML files
    Validate {
        /// Path to an answer set file or directory
        #[arg(long)]
        answers: PathBuf,

        /// Exit with an error if any warning is found
        #[arg(long)]
        strict: bool,
    },

    /// Create starter config and example answer set
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            // RUST_LOG wins outright; the default only applies when it is unset.
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quizscore=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            answers,
            toggle,
            format,
            config,
        } => commands::score::execute(answers, toggle, format, config),
        Commands::Dump { answers, output } => commands::dump::execute(answers, output),
        Commands::Validate { answers, strict } => commands::validate::execute(answers, strict),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
