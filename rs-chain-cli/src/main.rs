use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::{LevelFilter, info, warn};

use rs_chain_core::ChainError;
use rs_chain_core::io::{read_file, read_lines, write_generated};
use rs_chain_core::model::generation_input::GenerationInput;
use rs_chain_core::model::generator::Generator;

/// Reads a corpus one line at a time and prints `<new|exists>\t<sequence>` rows.
#[derive(Parser, Debug)]
#[command(version, about = "Generate text that resembles a corpus with an n-gram Markov chain", long_about = None)]
struct Cli {
	/// Length of n-gram
	#[arg(short = 'n', long = "ngram", default_value_t = 2, allow_negative_numbers = true)]
	n: i64,

	/// Split text into words
	#[arg(short = 'w', long)]
	words: bool,

	/// Number of results to generate
	#[arg(short = 'c', long, default_value_t = 10, allow_negative_numbers = true)]
	count: i64,

	/// Seed for reproducible output
	#[arg(long, value_name = "SEED")]
	seed: Option<u64>,

	/// Give up on a walk after this many n-grams
	#[arg(long, value_name = "STEPS")]
	max_steps: Option<usize>,

	/// Increase verbosity (-v, -vv, -vvv)
	#[arg(short = 'v', long, action = ArgAction::Count)]
	verbose: u8,

	/// Decrease verbosity (-q, -qq)
	#[arg(short = 'q', long, action = ArgAction::Count)]
	quiet: u8,

	/// Corpus file, standard input when omitted
	input: Option<PathBuf>,
}

impl Cli {
	fn generation_input(&self) -> Result<GenerationInput, ChainError> {
		let mut input = GenerationInput::new(self.n, self.words, self.count)?;
		input.seed = self.seed;
		if let Some(max_steps) = self.max_steps {
			input.set_max_steps(max_steps)?;
		}
		Ok(input)
	}
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose, cli.quiet);

	let input = cli.generation_input()?;
	let lines = match &cli.input {
		Some(path) => read_file(path).with_context(|| format!("failed to read {}", path.display()))?,
		None => read_lines(io::stdin().lock()).context("failed to read standard input")?,
	};

	let mut out = BufWriter::new(io::stdout().lock());
	run(&input, &lines, &mut out)?;
	out.flush().context("failed to write output")?;
	Ok(())
}

/// Logs go to stderr so stdout stays tabular.
fn init_logging(verbose: u8, quiet: u8) {
	let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
	let level = match (quiet, verbose) {
		(0, 0) => None,
		(0, 1) => Some(LevelFilter::Info),
		(0, 2) => Some(LevelFilter::Debug),
		(0, _) => Some(LevelFilter::Trace),
		(1, _) => Some(LevelFilter::Error),
		_ => Some(LevelFilter::Off),
	};
	if let Some(level) = level {
		builder.filter_level(level);
	}
	let _ = builder.try_init();
}

/// Digests `lines`, then writes one row per successful generation.
///
/// Failed walks are skipped with a warning. Returns the number of rows
/// written, or the last failure if nothing could be generated at all.
fn run<W: Write>(input: &GenerationInput, lines: &[String], out: &mut W) -> Result<usize> {
	let mut generator = Generator::new(input)?;
	generator.digest_all(lines);

	let mut written = 0;
	let mut last_error = None;
	for attempt in 1..=input.count() {
		match generator.generate() {
			Ok(generated) => {
				write_generated(out, &generated).context("failed to write output")?;
				written += 1;
			}
			Err(err) => {
				warn!("generation {attempt}/{} skipped: {err}", input.count());
				last_error = Some(err);
			}
		}
	}

	match last_error {
		Some(err) if written == 0 => Err(err).context("no sequence could be generated"),
		_ => {
			info!("wrote {written} of {} sequences", input.count());
			Ok(written)
		}
	}
}
