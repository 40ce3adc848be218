//! Character classification: bucket every code point of a text into exactly
//! one category and count per category.
//!
//! Two closed taxonomy profiles exist, each with its own counter shape and
//! rule table. They share only the classification seam, not a counter
//! layout: the regression weights of a preset are fit to one shape and are
//! meaningless against the other.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod coarse;
pub mod ranges;
pub mod script;

pub use coarse::CoarseStats;
pub use script::ScriptStats;

/// Which character taxonomy a preset classifies against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Taxonomy {
    /// Six buckets: letters, digits, CJK, symbols, spaces, other.
    Coarse,
    /// Ten counters with per-script buckets and the extended-letter cap.
    Script,
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Taxonomy::Coarse => write!(f, "coarse"),
            Taxonomy::Script => write!(f, "script"),
        }
    }
}

/// Per-category counts for a text. The variant matches the taxonomy of the
/// estimator that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stats {
    Coarse(CoarseStats),
    Script(ScriptStats),
}

impl Stats {
    pub fn taxonomy(&self) -> Taxonomy {
        match self {
            Stats::Coarse(_) => Taxonomy::Coarse,
            Stats::Script(_) => Taxonomy::Script,
        }
    }

    /// Sum of all counters.
    pub fn total(&self) -> usize {
        match self {
            Stats::Coarse(s) => s.total(),
            Stats::Script(s) => s.total(),
        }
    }
}

/// The seam shared by full and sampled analysis. Each counter shape supplies
/// its rule table (`record`), sample projection (`scale`), and post-pass
/// correction (`rebalance`).
pub(crate) trait Accumulator: Default {
    /// Increment exactly one counter for `c`, first matching rule wins.
    fn record(&mut self, c: char);

    /// Project sampled counts onto the full text: every counter multiplied
    /// by `factor`, rounded half-up.
    fn scale(&self, factor: f64) -> Self;

    /// Post-classification correction, applied to full counts and to scaled
    /// sample counts alike.
    fn rebalance(&mut self);
}

/// Round-half-up scaling for a single counter.
pub(crate) fn scale_count(count: usize, factor: f64) -> usize {
    (count as f64 * factor + 0.5) as usize
}

/// Classify every code point of `text`. Streams the input; nothing is
/// materialized.
pub(crate) fn classify_full<S: Accumulator>(text: &str) -> S {
    let mut stats = S::default();
    for c in text.chars() {
        stats.record(c);
    }
    stats.rebalance();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_display() {
        assert_eq!(Taxonomy::Coarse.to_string(), "coarse");
        assert_eq!(Taxonomy::Script.to_string(), "script");
    }

    #[test]
    fn test_taxonomy_serde_tag() {
        let tax: Taxonomy = serde_json::from_str("\"script\"").unwrap();
        assert_eq!(tax, Taxonomy::Script);
        assert_eq!(serde_json::to_string(&Taxonomy::Coarse).unwrap(), "\"coarse\"");
    }

    #[test]
    fn test_stats_accessors() {
        let stats = Stats::Coarse(classify_full("Hi 你"));
        assert_eq!(stats.taxonomy(), Taxonomy::Coarse);
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn test_scale_count_rounds_half_up() {
        assert_eq!(scale_count(3, 1.5), 5); // 4.5 rounds up
        assert_eq!(scale_count(3, 1.0), 3);
        assert_eq!(scale_count(1, 0.4), 0); // 0.4 rounds down
        assert_eq!(scale_count(0, 10.0), 0);
    }
}
