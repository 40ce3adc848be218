//! Analyze command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;
use serde_json::json;

use tokometer::utils::{format_with_commas, read_text_file};
use tokometer::Stats;

use super::utils::{load_registry, read_stdin, resolve_estimator};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Text to analyze (reads stdin if neither TEXT nor --file is given)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Input file to analyze
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Preset to analyze with
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

    /// Emit JSON instead of text output
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let registry = load_registry(args.presets.as_deref())?;
    let estimator =
        resolve_estimator(&registry, &args.preset, args.sample_threshold, args.sample_size)?;

    let text = if let Some(path) = &args.file {
        read_text_file(path)?.0
    } else if let Some(text) = args.text {
        text
    } else {
        read_stdin()?
    };

    let stats = estimator.analyze(&text);
    let tokens = estimator.score(&stats)?;

    if args.json {
        let counts = match &stats {
            Stats::Coarse(s) => serde_json::to_value(s)?,
            Stats::Script(s) => serde_json::to_value(s)?,
        };
        let report = json!({
            "preset": estimator.name(),
            "taxonomy": stats.taxonomy().to_string(),
            "counts": counts,
            "total_code_points": stats.total(),
            "tokens": tokens,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Preset: {} ({} taxonomy)", estimator.name(), stats.taxonomy());
        println!("Categories:");
        for (name, count) in category_rows(&stats) {
            println!("  {:<10} {}", name, format_with_commas(count));
        }
        println!("Total code points: {}", format_with_commas(stats.total()));
        println!("Estimated tokens: {}", style(format_with_commas(tokens)).bold());
    }

    Ok(())
}

fn category_rows(stats: &Stats) -> Vec<(&'static str, usize)> {
    match stats {
        Stats::Coarse(s) => vec![
            ("symbols", s.symbols),
            ("letters", s.letters),
            ("digits", s.digits),
            ("cjk", s.cjk),
            ("spaces", s.spaces),
            ("other", s.other),
        ],
        Stats::Script(s) => vec![
            ("symbols", s.symbols),
            ("latin", s.latin),
            ("latin_ext", s.latin_ext),
            ("digits", s.digits),
            ("han", s.han),
            ("kana", s.kana),
            ("hangul", s.hangul),
            ("cyrillic", s.cyrillic),
            ("arabic", s.arabic),
            ("spaces", s.spaces),
        ],
    }
}
