use std::collections::VecDeque;

use tracing::{debug, info, instrument, warn};

use super::language_model::{LanguageModel, TrainingStatus};
use super::store::ModelStore;
use crate::config::{validate_window_length, ModelConfig};
use crate::error::Result;
use crate::source::CharSource;

/// Builds a `LanguageModel` from a character source in a single pass.
///
/// # Behavior
/// - Reads `window_length` characters to form the first context.
/// - Slides the context one character at a time, counting each
///   (context, next character) pair.
/// - Finalizes every distribution once the source is exhausted.
#[derive(Clone, Copy, Debug)]
pub struct Trainer {
	window_length: usize,
}

impl Trainer {
	/// Creates a trainer for contexts of `window_length` characters.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `window_length` is zero.
	pub fn new(window_length: usize) -> Result<Self> {
		validate_window_length(window_length)?;
		Ok(Self { window_length })
	}

	/// Creates a trainer from an already validated configuration.
	pub fn from_config(config: &ModelConfig) -> Self {
		Self { window_length: config.window_length() }
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Consumes `source` and returns the trained model.
	///
	/// If the source runs out before the first context is complete, the
	/// returned model is empty and reports `TrainingStatus::InsufficientData`.
	///
	/// # Errors
	/// Only errors raised by the source itself are propagated.
	#[instrument(skip_all, fields(window_length = self.window_length))]
	pub fn train<S: CharSource + ?Sized>(&self, source: &mut S) -> Result<LanguageModel> {
		let mut store = ModelStore::new();

		// Initial context
		let mut window: VecDeque<char> = VecDeque::with_capacity(self.window_length);
		while window.len() < self.window_length {
			if source.is_exhausted() {
				warn!(available = window.len(), "corpus shorter than window, model is empty");
				let status = TrainingStatus::InsufficientData {
					required: self.window_length,
					available: window.len(),
				};
				return Ok(LanguageModel::new(self.window_length, store, status));
			}
			window.push_back(source.read_char()?);
		}

		// Slide over the rest of the source
		let mut context = String::with_capacity(self.window_length);
		let mut observations = 0;
		while !source.is_exhausted() {
			let next_char = source.read_char()?;

			context.clear();
			context.extend(window.iter());
			store.observe(&context, next_char);
			observations += 1;

			window.pop_front();
			window.push_back(next_char);
		}

		debug!(contexts = store.len(), observations, "finalizing distributions");
		store.finalize();

		let status = TrainingStatus::Trained { contexts: store.len(), observations };
		info!(contexts = store.len(), observations, "training complete");
		Ok(LanguageModel::new(self.window_length, store, status))
	}
}
