use std::collections::HashMap;

use super::distribution::ContextDistribution;

/// Mapping from a context (exactly `window_length` characters) to the
/// distribution of characters observed right after it.
///
/// # Invariants
/// - Keys are unique and all have the same character length
/// - Only the trainer mutates a store; a trained model exposes it read-only
#[derive(Clone, Debug, Default)]
pub struct ModelStore {
	contexts: HashMap<String, ContextDistribution>,
}

impl ModelStore {
	/// Creates a new empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records that `next_char` followed `context`.
	///
	/// Creates the distribution for `context` on first sight.
	pub(crate) fn observe(&mut self, context: &str, next_char: char) {
		match self.contexts.get_mut(context) {
			Some(distribution) => distribution.observe(next_char),
			None => {
				let mut distribution = ContextDistribution::new();
				distribution.observe(next_char);
				self.contexts.insert(context.to_owned(), distribution);
			}
		}
	}

	/// Finalizes the probabilities of every distribution.
	pub(crate) fn finalize(&mut self) {
		for distribution in self.contexts.values_mut() {
			distribution.finalize();
		}
	}

	/// Returns the distribution following `context`, if it was observed.
	pub fn get(&self, context: &str) -> Option<&ContextDistribution> {
		self.contexts.get(context)
	}

	/// Iterates over all contexts in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextDistribution)> {
		self.contexts.iter().map(|(context, distribution)| (context.as_str(), distribution))
	}

	/// Contexts sorted lexicographically, for deterministic dumps.
	pub fn contexts_sorted(&self) -> Vec<&str> {
		let mut contexts: Vec<&str> = self.contexts.keys().map(String::as_str).collect();
		contexts.sort_unstable();
		contexts
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}
}
