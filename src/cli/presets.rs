//! Presets command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;
use serde_json::json;

use super::utils::load_registry;

#[derive(Args)]
pub struct PresetsArgs {
    /// Presets file with additional models (TOML or YAML)
    #[arg(long, value_name = "PATH")]
    pub presets: Option<PathBuf>,

    /// Emit JSON instead of text output
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PresetsArgs) -> Result<()> {
    let registry = load_registry(args.presets.as_deref())?;

    if args.json {
        let entries = registry
            .iter()
            .map(|e| {
                json!({
                    "name": e.name(),
                    "description": e.description(),
                    "taxonomy": e.taxonomy().to_string(),
                    "intercept": e.intercept(),
                    "sampling": e.sampling(),
                })
            })
            .collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for estimator in registry.iter() {
        let sampling = match estimator.sampling() {
            Some(s) => format!(", samples {} above {} code points", s.size, s.threshold),
            None => String::new(),
        };
        println!("{} ({}{})", style(estimator.name()).bold(), estimator.taxonomy(), sampling);
        if !estimator.description().is_empty() {
            println!("    {}", estimator.description());
        }
    }

    Ok(())
}
