use std::fmt;

/// One observed next-character outcome for a context.
///
/// `probability` and `cumulative_probability` are derived values and stay
/// at `0.0` until the owning distribution is finalized.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyRecord {
	character: char,
	count: usize,
	probability: f64,
	cumulative_probability: f64,
}

impl FrequencyRecord {
	/// First observation of `character`.
	fn new(character: char) -> Self {
		Self { character, count: 1, probability: 0.0, cumulative_probability: 0.0 }
	}

	pub fn character(&self) -> char {
		self.character
	}

	/// Number of times `character` followed the owning context.
	pub fn count(&self) -> usize {
		self.count
	}

	/// `count / total`, defined after finalization.
	pub fn probability(&self) -> f64 {
		self.probability
	}

	/// Running sum of probabilities up to and including this record.
	pub fn cumulative_probability(&self) -> f64 {
		self.cumulative_probability
	}
}

impl fmt::Display for FrequencyRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({} {} {} {})", self.character, self.count, self.probability, self.cumulative_probability)
	}
}

/// Next-character distribution of a single context.
///
/// Conceptually this is a node of a Markov chain: outgoing edges are
/// weighted by how often they were observed. Records are kept in the
/// order their character was first seen, which is also the enumeration
/// order of the cumulative probabilities (an inverse-CDF table).
///
/// ## Invariants
/// - Each character appears in at most one record
/// - Once finalized with a non-zero total, cumulative probabilities are
///   non-decreasing and the last one is 1.0 within rounding
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContextDistribution {
	records: Vec<FrequencyRecord>,
}

impl ContextDistribution {
	/// Creates a new empty distribution.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records an occurrence of `next_char`.
	///
	/// - If a record already exists, its count is increased.
	/// - Otherwise, a new record is appended with a count of 1.
	///
	/// Distributions are small (bounded by the alphabet), a linear scan
	/// keeps insertion order without a side index.
	pub fn observe(&mut self, next_char: char) {
		if let Some(record) = self.records.iter_mut().find(|record| record.character == next_char) {
			record.count += 1;
			return;
		}
		self.records.push(FrequencyRecord::new(next_char));
	}

	/// Computes `probability` and `cumulative_probability` of every record.
	///
	/// Two passes: the total is summed first so no division happens before
	/// all counts are known. A zero total leaves the distribution vacuous.
	pub fn finalize(&mut self) {
		let total = self.total_count();
		if total == 0 {
			return;
		}

		let mut cumulative = 0.0;
		for record in &mut self.records {
			record.probability = record.count as f64 / total as f64;
			cumulative += record.probability;
			record.cumulative_probability = cumulative;
		}
	}

	/// Sum of all record counts.
	pub fn total_count(&self) -> usize {
		self.records.iter().map(|record| record.count).sum()
	}

	/// `true` if no outcome was ever counted; such a distribution cannot be sampled.
	pub fn is_vacuous(&self) -> bool {
		self.total_count() == 0
	}

	/// Records in first-seen order.
	pub fn records(&self) -> &[FrequencyRecord] {
		&self.records
	}

	/// Returns the record for `character`, if observed.
	pub fn get(&self, character: char) -> Option<&FrequencyRecord> {
		self.records.iter().find(|record| record.character == character)
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl fmt::Display for ContextDistribution {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "(")?;
		for (i, record) in self.records.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{record}")?;
		}
		write!(f, ")")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn distribution_of(chars: &str) -> ContextDistribution {
		let mut distribution = ContextDistribution::new();
		for c in chars.chars() {
			distribution.observe(c);
		}
		distribution
	}

	#[test]
	fn test_counts_are_aggregated_in_first_seen_order() {
		let distribution = distribution_of("cbcac");
		let order: Vec<char> = distribution.records().iter().map(FrequencyRecord::character).collect();
		assert_eq!(order, vec!['c', 'b', 'a']);
		assert_eq!(distribution.get('c').unwrap().count(), 3);
		assert_eq!(distribution.get('b').unwrap().count(), 1);
		assert_eq!(distribution.total_count(), 5);
	}

	#[test]
	fn test_finalize_probabilities() {
		let mut distribution = distribution_of("aab");
		distribution.finalize();

		let a = distribution.get('a').unwrap();
		let b = distribution.get('b').unwrap();
		assert!((a.probability() - 2.0 / 3.0).abs() < 1e-12);
		assert!((a.cumulative_probability() - 2.0 / 3.0).abs() < 1e-12);
		assert!((b.probability() - 1.0 / 3.0).abs() < 1e-12);
		assert!((b.cumulative_probability() - 1.0).abs() < 1e-9);
	}

	#[test]
	fn test_cumulative_is_monotonic_and_sums_to_one() {
		let mut distribution = distribution_of("the quick brown fox jumps over the lazy dog");
		distribution.finalize();

		let sum: f64 = distribution.records().iter().map(FrequencyRecord::probability).sum();
		assert!((sum - 1.0).abs() < 1e-9);

		let mut previous = 0.0;
		for record in distribution.records() {
			assert!(record.cumulative_probability() >= previous);
			previous = record.cumulative_probability();
		}
		assert!((previous - sum).abs() < 1e-9);
	}

	#[test]
	fn test_empty_distribution_stays_vacuous() {
		let mut distribution = ContextDistribution::new();
		distribution.finalize();
		assert!(distribution.is_vacuous());
		assert!(distribution.is_empty());
	}

	#[test]
	fn test_display() {
		let mut distribution = distribution_of("ab");
		distribution.finalize();
		assert_eq!(distribution.to_string(), "((a 1 0.5 0.5) (b 1 0.5 1))");
	}
}
