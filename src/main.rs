//! tokometer: estimate LLM token counts without running a tokenizer.
//!
//! Classifies text into per-category character counts and scores them with
//! trained linear-regression presets, cheap enough to run on every request.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
