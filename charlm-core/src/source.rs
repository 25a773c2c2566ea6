use std::path::Path;

use tracing::debug;

use crate::error::{LanguageModelError, Result};
use crate::io::read_text;

/// A sequence of characters read one at a time.
///
/// The trainer is the sole consumer. Implementations must report
/// exhaustion through `is_exhausted` and fail with `SourceExhausted`
/// if `read_char` is called afterwards.
pub trait CharSource {
	/// Returns `true` once every character has been read.
	fn is_exhausted(&self) -> bool;

	/// Reads the next character.
	///
	/// # Errors
	/// Returns `SourceExhausted` if no character is left.
	fn read_char(&mut self) -> Result<char>;
}

/// In-memory character source over a decoded text.
///
/// Characters are Unicode scalar values; no grapheme clustering
/// or normalization is applied.
#[derive(Clone, Debug)]
pub struct TextSource {
	chars: Vec<char>,
	position: usize,
}

impl TextSource {
	/// Creates a source over the given text.
	pub fn new(text: &str) -> Self {
		Self { chars: text.chars().collect(), position: 0 }
	}

	/// Loads a whole corpus file into a source.
	///
	/// # Errors
	/// Returns an IO error if the file cannot be opened or is not valid UTF-8.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let text = read_text(&path)?;
		let source = Self::new(&text);
		debug!(path = %path.as_ref().display(), chars = source.len(), "corpus loaded");
		Ok(source)
	}

	/// Total number of characters, read or not.
	pub fn len(&self) -> usize {
		self.chars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chars.is_empty()
	}
}

impl From<&str> for TextSource {
	fn from(text: &str) -> Self {
		Self::new(text)
	}
}

impl CharSource for TextSource {
	fn is_exhausted(&self) -> bool {
		self.position >= self.chars.len()
	}

	fn read_char(&mut self) -> Result<char> {
		let c = *self.chars.get(self.position).ok_or(LanguageModelError::SourceExhausted)?;
		self.position += 1;
		Ok(c)
	}
}
