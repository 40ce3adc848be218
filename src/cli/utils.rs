//! Shared argument plumbing for the subcommands.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use tokometer::presets::loader::{discover_presets_file, load_presets};
use tokometer::{Estimator, PresetRegistry};

/// Build the preset registry: built-ins first, then presets from an
/// explicit file or one discovered in the working directory. An explicit
/// file must parse; a discovered one only warns.
pub fn load_registry(presets_file: Option<&Path>) -> Result<PresetRegistry> {
    let mut registry = PresetRegistry::builtin();

    let (path, explicit) = match presets_file {
        Some(path) => (Some(path.to_path_buf()), true),
        None => {
            (std::env::current_dir().ok().and_then(|dir| discover_presets_file(&dir)), false)
        }
    };

    if let Some(path) = path {
        match load_presets(&path) {
            Ok(loaded) => {
                tracing::debug!("Loaded {} preset(s) from {}", loaded.len(), path.display());
                for estimator in loaded {
                    registry.register(estimator);
                }
            }
            Err(e) if explicit => return Err(e),
            Err(e) => {
                tracing::warn!("Ignoring discovered presets file {}: {:#}", path.display(), e);
            }
        }
    }

    Ok(registry)
}

/// Look up the preset and apply CLI sampling overrides as a derived
/// estimator.
pub fn resolve_estimator(
    registry: &PresetRegistry,
    preset: &str,
    sample_threshold: Option<usize>,
    sample_size: Option<usize>,
) -> Result<Estimator> {
    let mut estimator = registry.get(preset)?.clone();
    if let (Some(threshold), Some(size)) = (sample_threshold, sample_size) {
        estimator = estimator.with_sampling(threshold, size);
    }
    Ok(estimator)
}

pub fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf).context("Failed reading stdin")?;
    Ok(buf)
}
