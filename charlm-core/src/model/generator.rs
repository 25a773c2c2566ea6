use rand::Rng;
use rand::rngs::StdRng;
use tracing::{instrument, trace};

use super::language_model::LanguageModel;
use super::sampler::sample_with;
use crate::config::Seed;

/// Extends seed text with characters sampled from a trained model.
///
/// # Responsibilities
/// - Look up the context formed by the last `window_length` characters
/// - Draw the next character with the sampler
/// - Own the random source, so each generator has its own draw sequence
///
/// Several generators may borrow the same model concurrently; the model
/// is never mutated.
#[derive(Debug)]
pub struct Generator<'m, R = StdRng> {
	model: &'m LanguageModel,
	rng: R,
}

impl<'m> Generator<'m, StdRng> {
	/// Creates a generator whose random source is built from `seed`.
	pub fn new(model: &'m LanguageModel, seed: Seed) -> Self {
		Self { model, rng: seed.rng() }
	}
}

impl<'m, R: Rng> Generator<'m, R> {
	/// Creates a generator drawing from the given random source.
	pub fn with_rng(model: &'m LanguageModel, rng: R) -> Self {
		Self { model, rng }
	}

	pub fn model(&self) -> &'m LanguageModel {
		self.model
	}

	/// Generates up to `extra_length` characters after `seed_text`.
	///
	/// # Returns
	/// - An empty string if `seed_text` is `None`.
	/// - `seed_text` unchanged if it is shorter than the window or if
	///   `extra_length` is zero.
	/// - Otherwise `seed_text` followed by sampled characters, stopping
	///   early when the current context was never seen in training.
	///
	/// The result is never shorter than `seed_text` and never longer than
	/// `seed_text` plus `extra_length` characters.
	#[instrument(skip_all, fields(extra_length = extra_length))]
	pub fn generate(&mut self, seed_text: Option<&str>, extra_length: usize) -> String {
		let Some(seed_text) = seed_text else {
			return String::new();
		};

		let window_length = self.model.window_length();
		let mut text: Vec<char> = seed_text.chars().collect();
		if text.len() < window_length || extra_length == 0 {
			return seed_text.to_owned();
		}

		let target = text.len().saturating_add(extra_length);
		let mut context = String::with_capacity(window_length);
		while text.len() < target {
			context.clear();
			context.extend(&text[text.len() - window_length..]);

			// Unseen (or vacuous) context: stop, this is not an error
			let distribution = match self.model.distribution(&context) {
				Some(distribution) if !distribution.is_vacuous() => distribution,
				_ => {
					trace!(context = %context, generated = text.len(), "context not in model, stopping");
					break;
				}
			};

			text.push(sample_with(Some(distribution), &mut self.rng));
		}

		text.into_iter().collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::ModelConfig;
	use crate::source::TextSource;
	use rand::SeedableRng;

	fn train(window_length: usize, corpus: &str) -> LanguageModel {
		let config = ModelConfig::new(window_length).unwrap();
		LanguageModel::train(&config, &mut TextSource::from(corpus)).unwrap()
	}

	#[test]
	fn test_single_successor_chain_is_deterministic() {
		let model = train(2, "aabaabaab");
		for seed in [0, 1, 20, 12345] {
			let mut generator = Generator::new(&model, Seed::Fixed(seed));
			assert_eq!(generator.generate(Some("aa"), 6), "aabaabaa");
		}
		let mut generator = Generator::new(&model, Seed::Entropy);
		assert_eq!(generator.generate(Some("aa"), 6), "aabaabaa");
	}

	#[test]
	fn test_missing_seed_text_is_empty() {
		let model = train(2, "aabaabaab");
		let mut generator = Generator::new(&model, Seed::default_fixed());
		assert_eq!(generator.generate(None, 10), "");
	}

	#[test]
	fn test_seed_shorter_than_window_is_unchanged() {
		let model = train(3, "abcabcabc");
		let mut generator = Generator::new(&model, Seed::default_fixed());
		for extra_length in [0, 1, 5, 100] {
			assert_eq!(generator.generate(Some("ab"), extra_length), "ab");
		}
	}

	#[test]
	fn test_zero_extra_length_is_unchanged() {
		let model = train(2, "aabaabaab");
		let mut generator = Generator::new(&model, Seed::default_fixed());
		assert_eq!(generator.generate(Some("aab"), 0), "aab");
	}

	#[test]
	fn test_unseen_context_stops_early() {
		// "ab" is only ever followed by 'c', and "bc" ends the corpus
		let model = train(2, "abc");
		let mut generator = Generator::new(&model, Seed::default_fixed());
		assert_eq!(generator.generate(Some("ab"), 10), "abc");
		assert_eq!(generator.generate(Some("zz"), 10), "zz");
	}

	#[test]
	fn test_empty_model_returns_seed() {
		let model = train(5, "abc");
		let mut generator = Generator::new(&model, Seed::default_fixed());
		assert_eq!(generator.generate(Some("abcdefg"), 20), "abcdefg");
	}

	#[test]
	fn test_length_stays_within_bounds() {
		let model = train(2, "the rain in spain stays mainly in the plain");
		let mut generator = Generator::with_rng(&model, StdRng::seed_from_u64(3));
		for extra_length in 0..50 {
			let text = generator.generate(Some("in"), extra_length);
			let len = text.chars().count();
			assert!(len >= 2);
			assert!(len <= 2 + extra_length);
			assert!(text.starts_with("in"));
		}
	}

	#[test]
	fn test_same_seed_same_output() {
		let corpus = "it was the best of times, it was the worst of times, it was the age of wisdom";
		let a = train(3, corpus);
		let b = train(3, corpus);
		let first = Generator::new(&a, Seed::Fixed(99)).generate(Some("it "), 200);
		let second = Generator::new(&b, Seed::Fixed(99)).generate(Some("it "), 200);
		assert_eq!(first, second);
	}

	#[test]
	fn test_generators_share_model_across_threads() {
		let model = train(1, "abababababab");
		std::thread::scope(|scope| {
			let handles: Vec<_> = (0..4)
				.map(|seed| {
					let model = &model;
					scope.spawn(move || Generator::new(model, Seed::Fixed(seed)).generate(Some("a"), 5))
				})
				.collect();
			for handle in handles {
				assert_eq!(handle.join().unwrap(), "ababab");
			}
		});
	}
}
