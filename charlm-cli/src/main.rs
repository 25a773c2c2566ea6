mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use charlm_core::source::TextSource;
use charlm_core::{Generator, LanguageModel, ModelConfig};
use tracing::{Level, debug};

use crate::cli::Cli;

/// Trains a model on the corpus and prints the extended initial text.
///
/// Logs go to stderr so stdout only carries the generated text.
fn main() -> Result<()> {
	let cli = Cli::parse();

	let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
	tracing_subscriber::fmt()
		.with_max_level(level)
		.with_writer(std::io::stderr)
		.init();

	let config = ModelConfig::new(cli.window_length)?.with_seed(cli.seed());
	debug!(?config, "configuration");

	let mut source = TextSource::from_file(&cli.corpus_path)
		.with_context(|| format!("Failed to read corpus {}", cli.corpus_path.display()))?;
	let model = LanguageModel::train(&config, &mut source)?;

	if cli.dump {
		eprint!("{model}");
	}

	let mut generator = Generator::new(&model, config.seed());
	println!("{}", generator.generate(Some(&cli.initial_text), cli.extra_length()));

	Ok(())
}
