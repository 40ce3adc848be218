//! Built-in estimator presets and the name → estimator registry.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::Error;
use crate::estimate::{CoarseWeights, Estimator, ScriptWeights, Weights};

pub mod loader;

/// Name of the preset used when the caller does not pick one.
pub const DEFAULT_PRESET: &str = "general";

/// General-purpose preset over the coarse taxonomy, trained on mixed
/// English/CJK web text.
pub static GENERAL: Lazy<Estimator> = Lazy::new(|| {
    Estimator::new(
        "general",
        "General mixed English/CJK preset over the coarse taxonomy",
        0.0,
        Weights::Coarse(CoarseWeights {
            symbols: 0.488,
            letters: 0.206,
            digits: 0.746,
            cjk: 0.507,
            spaces: 0.043,
            other: 1.830,
        }),
    )
});

/// Preset fit against Kimi-K2 tokenizer output. The constants are the
/// trained regression coefficients and must not be re-rounded.
pub static KIMI_K2: Lazy<Estimator> = Lazy::new(|| {
    Estimator::new(
        "kimi-k2",
        "Kimi-K2 tokenizer preset (~8.5% avg error)",
        0.0,
        Weights::Script(ScriptWeights {
            symbols: 0.5671194745036742,
            latin: 0.20601617930567592,
            latin_ext: 5.87908499852652,
            digits: 0.8030572147361226,
            han: 0.6627122076124944,
            kana: 1.0879350533022305,
            hangul: 1.0509515625240804,
            cyrillic: 0.5306900990158002,
            arabic: 0.6352704975749803,
            spaces: 0.02578661842488973,
        }),
    )
});

/// Mutable mapping from preset name to estimator, seeded with the
/// built-ins. Owned by the caller; concurrent mutation wants an external
/// lock, but lookups on a registry nobody mutates are freely shareable.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: HashMap<String, Estimator>,
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PresetRegistry {
    /// Registry seeded with the built-in presets.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(GENERAL.clone());
        registry.register(KIMI_K2.clone());
        registry
    }

    /// Registry with no presets at all.
    pub fn empty() -> Self {
        Self { presets: HashMap::new() }
    }

    /// Look up a preset by name.
    pub fn get(&self, name: &str) -> Result<&Estimator, Error> {
        self.presets.get(name).ok_or_else(|| Error::UnknownPreset(name.to_string()))
    }

    /// Insert a preset under its own name, overwriting any existing entry.
    pub fn register(&mut self, estimator: Estimator) {
        self.presets.insert(estimator.name().to_string(), estimator);
    }

    /// Registered preset names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered presets in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Estimator> {
        let mut entries: Vec<&Estimator> = self.presets.values().collect();
        entries.sort_unstable_by(|a, b| a.name().cmp(b.name()));
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
