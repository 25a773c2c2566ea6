use std::path::PathBuf;

use charlm_core::Seed;
use charlm_core::config::DEFAULT_SEED;
use clap::{Parser, ValueEnum};

/// How the generator's random source is seeded.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
	/// Different text on every run
	Random,
	/// Reproducible text for a given seed
	Fixed,
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "charlm")]
#[command(about = "Train a character-level Markov model on a corpus and extend a seed text")]
#[command(version)]
pub struct Cli {
	/// Number of characters in each context window
	pub window_length: usize,

	/// Text to start generating from
	pub initial_text: String,

	/// Number of characters to add; zero or negative returns the initial text
	#[arg(allow_negative_numbers = true)]
	pub text_length: i64,

	/// Seeding mode of the random source
	#[arg(value_enum)]
	pub mode: Mode,

	/// Corpus file to train on
	pub corpus_path: PathBuf,

	/// Seed of the `fixed` mode
	#[arg(long, default_value_t = DEFAULT_SEED)]
	pub seed: u64,

	/// Print the trained model to stderr
	#[arg(long)]
	pub dump: bool,

	/// Enable debug logging
	#[arg(short, long)]
	pub verbose: bool,
}

impl Cli {
	/// Seed mode selected by `mode` and `--seed`.
	pub fn seed(&self) -> Seed {
		match self.mode {
			Mode::Random => Seed::Entropy,
			Mode::Fixed => Seed::Fixed(self.seed),
		}
	}

	/// Requested extra length, negative values clamped to zero.
	pub fn extra_length(&self) -> usize {
		usize::try_from(self.text_length).unwrap_or(0)
	}
}
