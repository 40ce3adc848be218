//! Text-file reading with encoding detection.
//!
//! Estimation inputs are not always UTF-8. Reading strategy:
//! 1. Strict UTF-8 (fast path, covers almost everything)
//! 2. chardetng detection over a bounded sample, decode with replacement
//!
//! Replacement characters classify into the catch-all bucket, so a few of
//! them barely move an estimate; erroring out on a stray byte would.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

const DETECT_SAMPLE_SIZE: usize = 8192;

/// Read a file as text, detecting the encoding when it is not UTF-8.
/// Returns the decoded content and the encoding label that was used.
pub fn read_text_file(path: &Path) -> Result<(String, &'static str)> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    // Strict UTF-8 first; sniff only when that fails.
    match String::from_utf8(bytes) {
        Ok(content) => Ok((content, UTF_8.name())),
        Err(err) => {
            let bytes = err.into_bytes();
            let encoding = detect_encoding(&bytes);
            let (decoded, used, _had_errors) = encoding.decode(&bytes);
            Ok((decoded.into_owned(), used.name()))
        }
    }
}

fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let sample = &bytes[..bytes.len().min(DETECT_SAMPLE_SIZE)];

    let mut detector = EncodingDetector::new();
    detector.feed(sample, sample.len() == bytes.len());
    detector.guess(None, true)
}
