//! Error types for model construction and training.

use thiserror::Error;

/// Errors raised while configuring or training a language model.
///
/// Lookup misses during generation are not errors: generation simply
/// stops and returns what it has produced so far.
#[derive(Error, Debug)]
pub enum LanguageModelError {
	/// Construction parameters were rejected before training started
	#[error("Invalid configuration: {0}")]
	InvalidConfiguration(String),

	/// A character was requested from a source that has none left
	#[error("Character source exhausted")]
	SourceExhausted,

	/// The corpus could not be read
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LanguageModelError>;
