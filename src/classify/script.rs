//! The script-specific taxonomy: ten counters with per-script buckets for
//! Han, kana, Hangul, Cyrillic, and Arabic. Unmatched code points fold into
//! `symbols`.

use serde::Serialize;

use super::{ranges, scale_count, Accumulator};

/// Divisor for the extended-letter cap: at most one extended letter per 15
/// basic Latin letters survives classification; the excess is recounted as
/// symbols. Trained alongside the weights, so the constant is part of the
/// model.
const LATIN_EXT_CAP_DIVISOR: usize = 15;

/// Per-category counts for the script taxonomy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScriptStats {
    /// ASCII punctuation/symbols, plus any code point no other rule matched.
    pub symbols: usize,
    /// ASCII Latin letters (a-z, A-Z).
    pub latin: usize,
    /// Non-ASCII Latin letters (à, ñ, ü, ...), after the cap.
    pub latin_ext: usize,
    /// Decimal digits, any script.
    pub digits: usize,
    /// Han ideographs.
    pub han: usize,
    /// Japanese Hiragana and Katakana.
    pub kana: usize,
    /// Korean Hangul.
    pub hangul: usize,
    /// Cyrillic letters.
    pub cyrillic: usize,
    /// Arabic letters.
    pub arabic: usize,
    /// Unicode whitespace.
    pub spaces: usize,
}

impl ScriptStats {
    /// Sum of all counters. Equals the code-point count of the analyzed text
    /// in full-analysis mode; the extended-letter cap conserves it.
    pub fn total(&self) -> usize {
        self.symbols
            + self.latin
            + self.latin_ext
            + self.digits
            + self.han
            + self.kana
            + self.hangul
            + self.cyrillic
            + self.arabic
            + self.spaces
    }
}

impl Accumulator for ScriptStats {
    fn record(&mut self, c: char) {
        if c.is_ascii_alphabetic() {
            self.latin += 1;
        } else if ranges::is_latin_extended(c) {
            self.latin_ext += 1;
        } else if c.is_numeric() {
            self.digits += 1;
        } else if ranges::is_kana(c) {
            self.kana += 1;
        } else if ranges::is_hangul(c) {
            self.hangul += 1;
        } else if ranges::is_han(c) {
            self.han += 1;
        } else if ranges::is_cyrillic(c) {
            self.cyrillic += 1;
        } else if ranges::is_arabic(c) {
            self.arabic += 1;
        } else if ranges::is_ascii_symbol(c) {
            self.symbols += 1;
        } else if c.is_whitespace() {
            self.spaces += 1;
        } else {
            self.symbols += 1;
        }
    }

    fn scale(&self, factor: f64) -> Self {
        Self {
            symbols: scale_count(self.symbols, factor),
            latin: scale_count(self.latin, factor),
            latin_ext: scale_count(self.latin_ext, factor),
            digits: scale_count(self.digits, factor),
            han: scale_count(self.han, factor),
            kana: scale_count(self.kana, factor),
            hangul: scale_count(self.hangul, factor),
            cyrillic: scale_count(self.cyrillic, factor),
            arabic: scale_count(self.arabic, factor),
            spaces: scale_count(self.spaces, factor),
        }
    }

    fn rebalance(&mut self) {
        let cap = self.latin / LATIN_EXT_CAP_DIVISOR;
        if self.latin_ext > cap {
            self.symbols += self.latin_ext - cap;
            self.latin_ext = cap;
        }
    }
}
