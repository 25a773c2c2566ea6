use std::fmt;

use super::distribution::ContextDistribution;
use super::store::ModelStore;
use super::trainer::Trainer;
use crate::config::ModelConfig;
use crate::error::Result;
use crate::source::CharSource;

/// Outcome of a training pass.
///
/// A corpus shorter than the window is not an error: the resulting model
/// is empty and its generation always returns the seed text unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrainingStatus {
	/// The corpus filled at least one window.
	Trained {
		/// Distinct contexts in the store.
		contexts: usize,
		/// (context, next character) pairs counted.
		observations: usize,
	},
	/// The corpus ended before a full window could be read.
	InsufficientData { required: usize, available: usize },
}

/// A trained fixed-order character model.
///
/// Holds the window length, the store of per-context distributions and
/// the status of the training pass that built it. A model is only built
/// by the `Trainer` and never mutated afterwards, so it can be shared
/// read-only between generators (and threads).
#[derive(Clone, Debug)]
pub struct LanguageModel {
	window_length: usize,
	store: ModelStore,
	status: TrainingStatus,
}

impl LanguageModel {
	pub(crate) fn new(window_length: usize, store: ModelStore, status: TrainingStatus) -> Self {
		Self { window_length, store, status }
	}

	/// Trains a model on `source` with the window length of `config`.
	///
	/// Shorthand for `Trainer::from_config(config).train(source)`.
	pub fn train<S: CharSource + ?Sized>(config: &ModelConfig, source: &mut S) -> Result<Self> {
		Trainer::from_config(config).train(source)
	}

	/// Number of characters in every context.
	pub fn window_length(&self) -> usize {
		self.window_length
	}

	pub fn status(&self) -> TrainingStatus {
		self.status
	}

	pub fn store(&self) -> &ModelStore {
		&self.store
	}

	/// Returns the distribution following `context`, if it was observed.
	pub fn distribution(&self, context: &str) -> Option<&ContextDistribution> {
		self.store.get(context)
	}

	/// `true` if no context was learned.
	pub fn is_empty(&self) -> bool {
		self.store.is_empty()
	}
}

/// Debug dump: one `context : distribution` line per context, sorted.
///
/// For inspection only, not a durable format.
impl fmt::Display for LanguageModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for context in self.store.contexts_sorted() {
			if let Some(distribution) = self.store.get(context) {
				writeln!(f, "{context} : {distribution}")?;
			}
		}
		Ok(())
	}
}
