//! Token-count estimation: a linear regression over per-category character
//! counts.
//!
//! An [`Estimator`] bundles trained weights with optional sampling
//! parameters. Construction fixes the weights; sharing an estimator across
//! threads needs no synchronization because estimation only ever borrows it
//! immutably. Deriving a variant ([`Estimator::with_sampling`]) produces a
//! new value instead of mutating the original.

use serde::{Deserialize, Serialize};

use crate::classify::{classify_full, Accumulator, CoarseStats, ScriptStats, Stats, Taxonomy};
use crate::error::Error;

mod sampler;

/// Regression weights for the coarse taxonomy, one per counter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoarseWeights {
    pub symbols: f64,
    pub letters: f64,
    pub digits: f64,
    pub cjk: f64,
    pub spaces: f64,
    pub other: f64,
}

impl CoarseWeights {
    fn weighted_sum(&self, stats: &CoarseStats) -> f64 {
        self.symbols * stats.symbols as f64
            + self.letters * stats.letters as f64
            + self.digits * stats.digits as f64
            + self.cjk * stats.cjk as f64
            + self.spaces * stats.spaces as f64
            + self.other * stats.other as f64
    }
}

/// Regression weights for the script taxonomy, one per counter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptWeights {
    pub symbols: f64,
    pub latin: f64,
    pub latin_ext: f64,
    pub digits: f64,
    pub han: f64,
    pub kana: f64,
    pub hangul: f64,
    pub cyrillic: f64,
    pub arabic: f64,
    pub spaces: f64,
}

impl ScriptWeights {
    fn weighted_sum(&self, stats: &ScriptStats) -> f64 {
        self.symbols * stats.symbols as f64
            + self.latin * stats.latin as f64
            + self.latin_ext * stats.latin_ext as f64
            + self.digits * stats.digits as f64
            + self.han * stats.han as f64
            + self.kana * stats.kana as f64
            + self.hangul * stats.hangul as f64
            + self.cyrillic * stats.cyrillic as f64
            + self.arabic * stats.arabic as f64
            + self.spaces * stats.spaces as f64
    }
}

/// Weights for one taxonomy profile. The variant fixes which Stats shape the
/// estimator produces and accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Weights {
    Coarse(CoarseWeights),
    Script(ScriptWeights),
}

impl Weights {
    pub fn taxonomy(&self) -> Taxonomy {
        match self {
            Weights::Coarse(_) => Taxonomy::Coarse,
            Weights::Script(_) => Taxonomy::Script,
        }
    }
}

/// Sampling parameters for long inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sampling {
    /// Code-point length above which sampling activates.
    pub threshold: usize,
    /// Number of code points to sample.
    pub size: usize,
}

impl Sampling {
    /// Sampling engages only when both parameters are positive and the text
    /// is strictly longer than the threshold.
    fn engages(&self, text_len: usize) -> bool {
        self.threshold > 0 && self.size > 0 && text_len > self.threshold
    }
}

/// A named token-count estimator: trained regression weights plus optional
/// sampling parameters.
#[derive(Debug, Clone)]
pub struct Estimator {
    name: String,
    description: String,
    intercept: f64,
    weights: Weights,
    sampling: Option<Sampling>,
}

impl Estimator {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        intercept: f64,
        weights: Weights,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            intercept,
            weights,
            sampling: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn taxonomy(&self) -> Taxonomy {
        self.weights.taxonomy()
    }

    pub fn sampling(&self) -> Option<Sampling> {
        self.sampling
    }

    /// Derive a sampling-enabled variant. The original is untouched; the
    /// returned estimator is an independent value.
    #[must_use]
    pub fn with_sampling(&self, threshold: usize, size: usize) -> Self {
        let mut derived = self.clone();
        derived.sampling = Some(Sampling { threshold, size });
        derived
    }

    /// Set or replace the sampling parameters on a freshly built estimator.
    /// Loader-side convenience; published estimators are treated as
    /// immutable.
    pub(crate) fn set_sampling(&mut self, sampling: Option<Sampling>) {
        self.sampling = sampling;
    }

    /// Estimated token count for `text`. Never negative.
    pub fn estimate(&self, text: &str) -> usize {
        let text_len = text.chars().count();
        let raw = match &self.weights {
            Weights::Coarse(w) => w.weighted_sum(&self.counts::<CoarseStats>(text, text_len)),
            Weights::Script(w) => w.weighted_sum(&self.counts::<ScriptStats>(text, text_len)),
        };
        clamp_round(self.intercept + raw)
    }

    /// Detailed character statistics for `text`, full or sampled per the
    /// estimator's sampling parameters. Pure: identical input yields
    /// identical stats.
    pub fn analyze(&self, text: &str) -> Stats {
        let text_len = text.chars().count();
        match self.weights {
            Weights::Coarse(_) => Stats::Coarse(self.counts(text, text_len)),
            Weights::Script(_) => Stats::Script(self.counts(text, text_len)),
        }
    }

    /// Score pre-computed statistics, e.g. stats obtained from [`analyze`]
    /// earlier or classified by the caller. Fails only when the stats shape
    /// does not match this estimator's taxonomy.
    ///
    /// [`analyze`]: Estimator::analyze
    pub fn score(&self, stats: &Stats) -> Result<usize, Error> {
        let raw = match (&self.weights, stats) {
            (Weights::Coarse(w), Stats::Coarse(s)) => w.weighted_sum(s),
            (Weights::Script(w), Stats::Script(s)) => w.weighted_sum(s),
            _ => {
                return Err(Error::TaxonomyMismatch {
                    expected: self.taxonomy(),
                    found: stats.taxonomy(),
                })
            }
        };
        Ok(clamp_round(self.intercept + raw))
    }

    fn counts<S: Accumulator>(&self, text: &str, text_len: usize) -> S {
        match self.sampling {
            Some(s) if s.engages(text_len) => sampler::classify_sampled(text, text_len, s.size),
            _ => classify_full(text),
        }
    }
}

/// Clamp negative regression output to zero, then round half-up.
fn clamp_round(value: f64) -> usize {
    if value < 0.0 {
        0
    } else {
        (value + 0.5) as usize
    }
}
