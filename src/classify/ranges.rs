//! Code-point range tables for script classification.
//!
//! Ranges are inclusive Unicode block boundaries. Classification never falls
//! through to a table lookup crate: these few blocks are all the regression
//! models were trained against.

/// Japanese Hiragana or Katakana.
pub fn is_kana(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309F}' // Hiragana
        | '\u{30A0}'..='\u{30FF}' // Katakana
    )
}

/// Korean Hangul, including the jamo blocks.
pub fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{AC00}'..='\u{D7AF}' // Hangul Syllables
        | '\u{1100}'..='\u{11FF}' // Hangul Jamo
        | '\u{3130}'..='\u{318F}' // Hangul Compatibility Jamo
        | '\u{A960}'..='\u{A97F}' // Hangul Jamo Extended-A
        | '\u{D7B0}'..='\u{D7FF}' // Hangul Jamo Extended-B
    )
}

/// Han ideographs (CJK Unified Ideographs and extensions A-G).
pub fn is_han(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}' // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}' // Extension A
        | '\u{20000}'..='\u{2A6DF}' // Extension B
        | '\u{2A700}'..='\u{2B73F}' // Extension C
        | '\u{2B740}'..='\u{2B81F}' // Extension D
        | '\u{2B820}'..='\u{2CEAF}' // Extension E
        | '\u{2CEB0}'..='\u{2EBEF}' // Extension F
        | '\u{30000}'..='\u{3134F}' // Extension G
    )
}

/// Non-ASCII Latin letters (accented and otherwise decorated).
pub fn is_latin_extended(c: char) -> bool {
    matches!(c,
        '\u{00C0}'..='\u{00FF}' // Latin-1 Supplement letters
        | '\u{0100}'..='\u{017F}' // Latin Extended-A
        | '\u{0180}'..='\u{024F}' // Latin Extended-B
        | '\u{1E00}'..='\u{1EFF}' // Latin Extended Additional
    )
}

/// Cyrillic letters.
pub fn is_cyrillic(c: char) -> bool {
    matches!(c,
        '\u{0400}'..='\u{04FF}' // Cyrillic
        | '\u{0500}'..='\u{052F}' // Cyrillic Supplement
        | '\u{2DE0}'..='\u{2DFF}' // Cyrillic Extended-A
        | '\u{A640}'..='\u{A69F}' // Cyrillic Extended-B
        | '\u{1C80}'..='\u{1C8F}' // Cyrillic Extended-C
    )
}

/// Arabic letters, including the presentation forms.
pub fn is_arabic(c: char) -> bool {
    matches!(c,
        '\u{0600}'..='\u{06FF}' // Arabic
        | '\u{0750}'..='\u{077F}' // Arabic Supplement
        | '\u{08A0}'..='\u{08FF}' // Arabic Extended-A
        | '\u{FB50}'..='\u{FDFF}' // Arabic Presentation Forms-A
        | '\u{FE70}'..='\u{FEFF}' // Arabic Presentation Forms-B
    )
}

/// ASCII punctuation and symbols.
pub fn is_ascii_symbol(c: char) -> bool {
    matches!(c,
        '\u{21}'..='\u{2F}' // !"#$%&'()*+,-./
        | '\u{3A}'..='\u{40}' // :;<=>?@
        | '\u{5B}'..='\u{60}' // [\]^_`
        | '\u{7B}'..='\u{7E}' // {|}~
    )
}
