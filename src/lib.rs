//! Fast token-count estimation for LLM text, without running a tokenizer.
//!
//! Classifies the code points of a text into per-category counts and feeds
//! them through a trained linear regression. Useful for pre-validating
//! input sizes, estimating API costs, or rate limiting before an expensive
//! (or unavailable) tokenization step. Estimates, never exact counts.
//!
//! ```
//! use tokometer::PresetRegistry;
//!
//! let registry = PresetRegistry::default();
//! let estimator = registry.get("general")?;
//!
//! assert_eq!(estimator.estimate("Hello"), 1);
//!
//! // Long inputs can trade accuracy for speed with even-stride sampling.
//! let sampling = estimator.with_sampling(10_000, 1_000);
//! let _tokens = sampling.estimate(&"text ".repeat(50_000));
//! # Ok::<(), tokometer::Error>(())
//! ```

pub mod classify;
pub mod error;
pub mod estimate;
pub mod presets;
pub mod utils;

pub use classify::{CoarseStats, ScriptStats, Stats, Taxonomy};
pub use error::Error;
pub use estimate::{CoarseWeights, Estimator, Sampling, ScriptWeights, Weights};
pub use presets::{PresetRegistry, DEFAULT_PRESET};
