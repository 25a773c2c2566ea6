//! Character-level Markov model.
//!
//! Data flow: character source → `Trainer` → `LanguageModel` (its
//! `ModelStore` of `ContextDistribution`s) → `Generator` + sampler →
//! generated text.

/// Frequency records and per-context distributions.
pub mod distribution;

/// Mapping from context to distribution.
pub mod store;

/// Trained, read-only model and its textual dump.
pub mod language_model;

/// Single-pass sliding-window training.
pub mod trainer;

/// Stateless inverse-CDF sampling.
pub mod sampler;

/// Seed text extension with a caller-owned random source.
pub mod generator;
