//! Command-line interface for tokometer
//!
//! Provides `estimate`, `analyze`, and `presets` subcommands over the
//! estimation library, plus shell completion generation.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod analyze;
mod estimate;
mod presets;
mod utils;

/// Estimate LLM token counts without running a tokenizer
#[derive(Parser)]
#[command(name = "tokometer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the token count of a text, files, or stdin
    Estimate(estimate::EstimateArgs),

    /// Show the per-category character breakdown behind an estimate
    Analyze(analyze::AnalyzeArgs),

    /// List registered presets
    Presets(presets::PresetsArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Estimate(args) => estimate::run(args),
        Commands::Analyze(args) => analyze::run(args),
        Commands::Presets(args) => presets::run(args),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
