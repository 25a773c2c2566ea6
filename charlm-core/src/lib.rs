//! Character-level Markov text generation library.
//!
//! This crate learns a fixed-order character model from a corpus and
//! extends seed text by sampling from the learned distributions:
//! - Sliding-window training over any character source
//! - Per-context frequency tables with precomputed cumulative probabilities
//! - Inverse-CDF sampling with a caller-owned random source
//!
//! The trained model is immutable; generation only reads it.

/// Crate-wide error type.
pub mod error;

/// Construction parameters (window length, seed mode).
pub mod config;

/// Character sources consumed by the trainer.
pub mod source;

/// Core model data structures, training, sampling and generation.
pub mod model;

/// File helpers.
///
/// Not exposed
pub(crate) mod io;

pub use config::{ModelConfig, Seed};
pub use error::{LanguageModelError, Result};
pub use model::generator::Generator;
pub use model::language_model::{LanguageModel, TrainingStatus};
pub use model::trainer::Trainer;
