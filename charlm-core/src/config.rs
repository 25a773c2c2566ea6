use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{LanguageModelError, Result};

/// Seed used by the reproducible generation mode when none is given.
pub const DEFAULT_SEED: u64 = 20;

/// How the random source of a generator is seeded.
///
/// # Variants
/// - `Fixed(u64)`: reproducible draws. Same seed, same corpus and same
///   generation calls produce identical text.
/// - `Entropy`: seeded from the operating system, output differs per run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seed {
	Fixed(u64),
	Entropy,
}

impl Seed {
	/// Reproducible seed using `DEFAULT_SEED`.
	pub fn default_fixed() -> Self {
		Seed::Fixed(DEFAULT_SEED)
	}

	/// Builds a fresh random source for this seed mode.
	pub fn rng(&self) -> StdRng {
		match self {
			Seed::Fixed(seed) => StdRng::seed_from_u64(*seed),
			Seed::Entropy => StdRng::from_os_rng(),
		}
	}
}

/// Construction parameters of a language model.
///
/// # Invariants
/// - `window_length >= 1`
/// - The window length is fixed for the lifetime of a trained model;
///   changing it requires retraining.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelConfig {
	window_length: usize,
	seed: Seed,
}

impl ModelConfig {
	/// Creates a configuration with an entropy-seeded random source.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `window_length` is zero.
	pub fn new(window_length: usize) -> Result<Self> {
		validate_window_length(window_length)?;
		Ok(Self { window_length, seed: Seed::Entropy })
	}

	/// Replaces the seed mode.
	pub fn with_seed(mut self, seed: Seed) -> Self {
		self.seed = seed;
		self
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	pub fn seed(&self) -> Seed {
		self.seed
	}

	/// Builds the random source for one generator.
	pub fn rng(&self) -> StdRng {
		self.seed.rng()
	}
}

/// Rejects window lengths that cannot form a context.
pub(crate) fn validate_window_length(window_length: usize) -> Result<()> {
	if window_length == 0 {
		return Err(LanguageModelError::InvalidConfiguration(
			"window length must be >= 1".to_owned(),
		));
	}
	Ok(())
}
