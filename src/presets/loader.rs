//! Presets file loading.
//!
//! Callers can define additional presets in a TOML or YAML file. Each entry
//! names its taxonomy, which selects the weight shape the `weights` table
//! must match.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::classify::Taxonomy;
use crate::estimate::{CoarseWeights, Estimator, Sampling, ScriptWeights, Weights};

#[derive(Debug, Deserialize)]
struct PresetsFile {
    #[serde(default)]
    presets: BTreeMap<String, PresetEntry>,
}

#[derive(Debug, Deserialize)]
struct PresetEntry {
    #[serde(default)]
    description: String,
    #[serde(default)]
    intercept: f64,
    taxonomy: Taxonomy,
    weights: serde_json::Value,
    #[serde(default)]
    sampling: Option<Sampling>,
}

/// Load estimators from a presets file. The extension picks the parser;
/// both formats funnel through a common generic value so the per-preset
/// conversion happens once.
pub fn load_presets(path: &Path) -> Result<Vec<Estimator>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading presets file: {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    let root: serde_json::Value = match ext.as_str() {
        "toml" => {
            let raw: toml::Value = toml::from_str(&content)
                .with_context(|| format!("Invalid TOML syntax: {}", path.display()))?;
            serde_json::to_value(raw)
                .with_context(|| format!("Unrepresentable TOML value in {}", path.display()))?
        }
        "yaml" | "yml" => {
            let raw: serde_yaml::Value = serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML syntax: {}", path.display()))?;
            serde_json::to_value(raw)
                .with_context(|| format!("Unrepresentable YAML value in {}", path.display()))?
        }
        other => anyhow::bail!(
            "Unsupported presets extension '.{}' for file {}",
            other,
            path.display()
        ),
    };

    let file: PresetsFile = serde_json::from_value(root)
        .with_context(|| format!("Invalid presets file: {}", path.display()))?;

    let mut estimators = Vec::with_capacity(file.presets.len());
    for (name, entry) in file.presets {
        let weights = match entry.taxonomy {
            Taxonomy::Coarse => {
                let w: CoarseWeights = serde_json::from_value(entry.weights).with_context(|| {
                    format!("Preset '{name}': weights do not match the coarse taxonomy")
                })?;
                Weights::Coarse(w)
            }
            Taxonomy::Script => {
                let w: ScriptWeights = serde_json::from_value(entry.weights).with_context(|| {
                    format!("Preset '{name}': weights do not match the script taxonomy")
                })?;
                Weights::Script(w)
            }
        };

        let mut estimator = Estimator::new(name, entry.description, entry.intercept, weights);
        estimator.set_sampling(entry.sampling);
        estimators.push(estimator);
    }

    Ok(estimators)
}

/// Look for a presets file in `dir`. First existing candidate wins.
pub fn discover_presets_file(dir: &Path) -> Option<PathBuf> {
    let candidates = [
        "tokometer.toml",
        ".tokometer.toml",
        "tokometer.yaml",
        ".tokometer.yaml",
        "tokometer.yml",
        ".tokometer.yml",
    ];

    for candidate in candidates {
        let path = dir.join(candidate);
        if path.exists() {
            return Some(path);
        }
    }

    None
}
