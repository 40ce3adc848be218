//! The six-bucket taxonomy: English letters, digits, CJK, symbols, spaces,
//! and an explicit catch-all with its own trained weight.

use serde::Serialize;

use super::{ranges, scale_count, Accumulator};

/// Per-category counts for the coarse taxonomy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoarseStats {
    /// ASCII punctuation and symbols.
    pub symbols: usize,
    /// ASCII letters (a-z, A-Z).
    pub letters: usize,
    /// Decimal digits, any script.
    pub digits: usize,
    /// Han ideographs plus Japanese kana and Korean Hangul.
    pub cjk: usize,
    /// Unicode whitespace.
    pub spaces: usize,
    /// Everything else (accented letters, other scripts, emoji, ...).
    pub other: usize,
}

impl CoarseStats {
    /// Sum of all counters. Equals the code-point count of the analyzed text
    /// in full-analysis mode.
    pub fn total(&self) -> usize {
        self.symbols + self.letters + self.digits + self.cjk + self.spaces + self.other
    }
}

impl Accumulator for CoarseStats {
    fn record(&mut self, c: char) {
        if c.is_ascii_alphabetic() {
            self.letters += 1;
        } else if c.is_numeric() {
            self.digits += 1;
        } else if ranges::is_kana(c) || ranges::is_hangul(c) || ranges::is_han(c) {
            self.cjk += 1;
        } else if ranges::is_ascii_symbol(c) {
            self.symbols += 1;
        } else if c.is_whitespace() {
            self.spaces += 1;
        } else {
            self.other += 1;
        }
    }

    fn scale(&self, factor: f64) -> Self {
        Self {
            symbols: scale_count(self.symbols, factor),
            letters: scale_count(self.letters, factor),
            digits: scale_count(self.digits, factor),
            cjk: scale_count(self.cjk, factor),
            spaces: scale_count(self.spaces, factor),
            other: scale_count(self.other, factor),
        }
    }

    // No extended-letter bucket, so nothing to rebalance.
    fn rebalance(&mut self) {}
}
