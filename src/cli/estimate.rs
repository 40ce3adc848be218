//! Estimate command implementation

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde_json::json;

use tokometer::utils::{format_with_commas, read_text_file};

use super::utils::{load_registry, read_stdin, resolve_estimator};

#[derive(Args)]
pub struct EstimateArgs {
    /// Text to estimate (reads stdin if neither TEXT nor --file is given)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Input file; repeat for batch estimation
    #[arg(short, long, value_name = "PATH")]
    pub file: Vec<PathBuf>,

    /// Preset to estimate with
    #[arg(short, long, default_value = tokometer::DEFAULT_PRESET)]
    pub preset: String,

    /// Presets file with additional models (TOML or YAML)
    #[arg(long, value_name = "PATH")]
    pub presets: Option<PathBuf>,

    /// Sample inputs longer than this many code points
    #[arg(long, value_name = "CODEPOINTS", requires = "sample_size")]
    pub sample_threshold: Option<usize>,

    /// Number of code points to sample
    #[arg(long, value_name = "COUNT", requires = "sample_threshold")]
    pub sample_size: Option<usize>,

    /// Emit a JSON report instead of text output
    #[arg(long)]
    pub json: bool,

    /// Omit the generated_at timestamp from JSON output
    #[arg(long, requires = "json")]
    pub no_timestamp: bool,
}

pub fn run(args: EstimateArgs) -> Result<()> {
    let registry = load_registry(args.presets.as_deref())?;
    let estimator =
        resolve_estimator(&registry, &args.preset, args.sample_threshold, args.sample_size)?;

    if args.file.is_empty() {
        let text = match args.text {
            Some(text) => text,
            None => read_stdin()?,
        };
        let tokens = estimator.estimate(&text);

        if args.json {
            let mut report = json!({
                "preset": estimator.name(),
                "tokens": tokens,
            });
            if !args.no_timestamp {
                report["generated_at"] = json!(timestamp());
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", format_with_commas(tokens));
        }
        return Ok(());
    }

    // Batch mode: decode and estimate each file in parallel, all workers
    // sharing the one estimator.
    let bar = if args.file.len() > 1 && !args.json {
        let bar = ProgressBar::new(args.file.len() as u64);
        bar.set_style(ProgressStyle::with_template("{bar:30} {pos}/{len} files")?);
        bar
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<Result<(PathBuf, usize)>> = args
        .file
        .par_iter()
        .map(|path| {
            let (content, encoding) = read_text_file(path)?;
            tracing::debug!("{}: decoded as {}", path.display(), encoding);
            let tokens = estimator.estimate(&content);
            bar.inc(1);
            Ok((path.clone(), tokens))
        })
        .collect();
    bar.finish_and_clear();

    let mut entries = Vec::with_capacity(results.len());
    for result in results {
        entries.push(result?);
    }

    let total: usize = entries.iter().map(|(_, tokens)| tokens).sum();

    if args.json {
        let files = entries
            .iter()
            .map(|(path, tokens)| {
                json!({
                    "path": path.display().to_string(),
                    "tokens": tokens,
                })
            })
            .collect::<Vec<_>>();

        let mut report = json!({
            "preset": estimator.name(),
            "files": files,
            "total": total,
        });
        if !args.no_timestamp {
            report["generated_at"] = json!(timestamp());
        }
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (path, tokens) in &entries {
            println!("{:>12}  {}", format_with_commas(*tokens), path.display());
        }
        if entries.len() > 1 {
            println!(
                "{:>12}  {}",
                style(format_with_commas(total)).bold(),
                style("total").bold()
            );
        }
    }

    Ok(())
}

fn timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S+00:00").to_string()
}
