use rand::Rng;

use super::distribution::ContextDistribution;

/// Character returned when there is nothing to sample from.
pub const FALLBACK_CHAR: char = ' ';

/// Picks a character from `distribution` by inverse-CDF lookup.
///
/// Returns the character of the first record whose cumulative probability
/// is strictly greater than `r`, where `r` is a draw in `[0, 1)`.
///
/// # Fallbacks
/// - If no record exceeds `r` (rounding left the last cumulative value
///   just below 1.0), the last record's character is returned.
/// - An absent or empty distribution yields `FALLBACK_CHAR`.
///
/// This function never fails.
pub fn sample(distribution: Option<&ContextDistribution>, r: f64) -> char {
	let Some(distribution) = distribution else {
		return FALLBACK_CHAR;
	};

	let mut fallback = FALLBACK_CHAR;
	for record in distribution.records() {
		if record.cumulative_probability() > r {
			return record.character();
		}
		fallback = record.character();
	}

	fallback
}

/// Draws `r` uniformly from `[0, 1)` with `rng` and calls `sample`.
pub fn sample_with<R: Rng + ?Sized>(distribution: Option<&ContextDistribution>, rng: &mut R) -> char {
	sample(distribution, rng.random::<f64>())
}
