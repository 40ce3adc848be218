//! Library error type.

use thiserror::Error;

use crate::classify::Taxonomy;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No preset registered under the requested name.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// Externally supplied stats were scored against an estimator fit to a
    /// different taxonomy. Weights of one shape are meaningless against the
    /// counters of the other, so this never silently scores.
    #[error("stats have the {found} shape, but the estimator expects {expected}")]
    TaxonomyMismatch { expected: Taxonomy, found: Taxonomy },
}
