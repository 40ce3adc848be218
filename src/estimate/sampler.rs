//! Even-stride sampling for long inputs.
//!
//! Instead of classifying every code point, visit an evenly spaced subset
//! and scale the counts up to approximate full-text statistics. Positions
//! are deterministic, never random: the same text and parameters always
//! produce the same estimate.

use crate::classify::Accumulator;

/// Classify `sample_size` evenly strided code points of `text` and project
/// the counts onto the full length.
///
/// `text_len` is the code-point length of `text`, already computed by the
/// caller. The effective pick count is capped to `text_len`, and the stride
/// floor of 1 guards the degenerate case where the cap makes stride 0; when
/// picks == length this walks every code point with scale factor 1 and
/// matches full analysis exactly.
pub(crate) fn classify_sampled<S: Accumulator>(
    text: &str,
    text_len: usize,
    sample_size: usize,
) -> S {
    if text_len == 0 || sample_size == 0 {
        return S::default();
    }

    // Stride access needs random access, so materialize the code points.
    let chars: Vec<char> = text.chars().collect();

    let picks = sample_size.min(text_len);
    let stride = (text_len / picks).max(1);

    let mut sampled = S::default();
    let mut taken = 0;
    let mut pos = 0;
    while taken < picks && pos < text_len {
        sampled.record(chars[pos]);
        taken += 1;
        pos += stride;
    }

    // Project onto the full text, then correct the scaled counters the same
    // way full analysis corrects raw ones.
    let mut stats = sampled.scale(text_len as f64 / picks as f64);
    stats.rebalance();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify_full, CoarseStats, ScriptStats};

    #[test]
    fn test_sample_size_at_least_length_matches_full() {
        let text = "Hello, 世界! 123 and some more text.";
        let len = text.chars().count();

        let full: CoarseStats = classify_full(text);
        let sampled: CoarseStats = classify_sampled(text, len, len);
        assert_eq!(sampled, full);

        // Oversized sample caps to the length and still matches.
        let oversampled: CoarseStats = classify_sampled(text, len, len * 10);
        assert_eq!(oversampled, full);
    }

    #[test]
    fn test_uniform_text_scales_exactly() {
        let text = "a".repeat(1000);
        let sampled: CoarseStats = classify_sampled(&text, 1000, 100);
        assert_eq!(sampled.letters, 1000);
        assert_eq!(sampled.total(), 1000);
    }

    #[test]
    fn test_half_and_half_text_scales_exactly() {
        // 1000 ASCII letters then 1000 Han ideographs; stride 20 picks 50 of
        // each, scale factor 20 restores the exact counts.
        let text = format!("{}{}", "a".repeat(1000), "中".repeat(1000));
        let sampled: CoarseStats = classify_sampled(&text, 2000, 100);
        assert_eq!(sampled.letters, 1000);
        assert_eq!(sampled.cjk, 1000);
    }

    #[test]
    fn test_deterministic() {
        let text = format!("{}{}", "word ".repeat(400), "漢字".repeat(500));
        let len = text.chars().count();
        let a: ScriptStats = classify_sampled(&text, len, 128);
        let b: ScriptStats = classify_sampled(&text, len, 128);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rebalance_applies_to_scaled_counts() {
        // All extended letters, no basic ones: after scaling, the cap moves
        // everything into symbols.
        let text = "é".repeat(300);
        let sampled: ScriptStats = classify_sampled(&text, 300, 30);
        assert_eq!(sampled.latin_ext, 0);
        assert_eq!(sampled.symbols, 300);
    }

    #[test]
    fn test_zero_guards() {
        let empty: CoarseStats = classify_sampled("", 0, 100);
        assert_eq!(empty, CoarseStats::default());
        let none: CoarseStats = classify_sampled("abc", 3, 0);
        assert_eq!(none, CoarseStats::default());
    }
}
