use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::chain_model::ChainModel;
use super::generation_input::GenerationInput;
use crate::error::ChainError;

/// Whether a generated sequence already appears in the corpus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Novelty {
	New,
	Exists,
}

impl fmt::Display for Novelty {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Novelty::New => f.write_str("new"),
			Novelty::Exists => f.write_str("exists"),
		}
	}
}

/// One generated sequence and its novelty label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
	pub text: String,
	pub novelty: Novelty,
}

/// High-level generator owning a chain and its random source.
///
/// # Responsibilities
/// - Build the `ChainModel` described by a `GenerationInput`
/// - Seed a single `StdRng` once, from the input seed or the OS
/// - Generate sequences and label them against the digested lines
///
/// Generated sequences are never fed back into the model.
#[derive(Debug)]
pub struct Generator {
	model: ChainModel,
	rng: StdRng,
	max_steps: Option<usize>,
}

impl Generator {
	/// Creates a generator with an empty model.
	///
	/// # Errors
	/// Returns an error if the input describes an invalid model.
	pub fn new(input: &GenerationInput) -> Result<Self, ChainError> {
		let model = ChainModel::new(input.n(), input.mode)?;
		let rng = match input.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Ok(Self { model, rng, max_steps: input.max_steps() })
	}

	pub fn model(&self) -> &ChainModel {
		&self.model
	}

	/// Digests every line into the underlying model.
	pub fn digest_all<I, S>(&mut self, lines: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.model.digest_all(lines);
	}

	/// Generates one sequence and labels it.
	///
	/// # Errors
	/// Propagates walk failures from `ChainModel::generate`.
	pub fn generate(&mut self) -> Result<Generated, ChainError> {
		let text = self.model.generate(&mut self.rng, self.max_steps)?;
		let novelty = if self.model.contains_line(&text) { Novelty::Exists } else { Novelty::New };
		Ok(Generated { text, novelty })
	}

	/// Runs `count` independent generations, in order.
	pub fn generate_many(&mut self, count: usize) -> Vec<Result<Generated, ChainError>> {
		(0..count).map(|_| self.generate()).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::segmenter::Mode;

	fn seeded(n: i64, words: bool, seed: u64) -> Generator {
		let mut input = GenerationInput::new(n, words, 10).unwrap();
		input.seed = Some(seed);
		Generator::new(&input).unwrap()
	}

	#[test]
	fn novelty_labels() {
		assert_eq!(Novelty::New.to_string(), "new");
		assert_eq!(Novelty::Exists.to_string(), "exists");
	}

	#[test]
	fn single_line_corpus_always_exists() {
		let mut generator = seeded(3, false, 1);
		generator.digest_all(["hello"]);
		for result in generator.generate_many(5) {
			assert_eq!(result.unwrap(), Generated { text: "hello".to_owned(), novelty: Novelty::Exists });
		}
	}

	#[test]
	fn recombined_line_is_new() {
		// "a b" is followed by "b c" in one line and "b d" in the other.
		let mut generator = seeded(2, true, 9);
		generator.digest_all(["a b c", "x a b d"]);
		let results: Vec<Generated> = generator.generate_many(200).into_iter().map(Result::unwrap).collect();
		assert!(results.iter().any(|g| g.novelty == Novelty::New));
		assert!(results.iter().any(|g| g.novelty == Novelty::Exists));
		for g in &results {
			let expected = if g.text == "a b c" || g.text == "x a b d" { Novelty::Exists } else { Novelty::New };
			assert_eq!(g.novelty, expected, "{}", g.text);
		}
	}

	#[test]
	fn same_seed_same_output() {
		let corpus = ["the cat sat", "the dog sat", "a cat ran"];
		let mut first = seeded(2, false, 1234);
		let mut second = seeded(2, false, 1234);
		first.digest_all(corpus);
		second.digest_all(corpus);
		assert_eq!(first.generate_many(20), second.generate_many(20));
	}

	#[test]
	fn stuck_generation_does_not_poison_the_next() {
		let mut generator = seeded(4, false, 2);
		generator.digest_all(["abc"]);
		let results = generator.generate_many(2);
		assert_eq!(results.len(), 2);
		assert!(results.iter().all(|r| matches!(r, Err(ChainError::NoTransition { .. }))));
	}

	#[test]
	fn generation_does_not_grow_the_model() {
		let mut generator = seeded(2, false, 3);
		generator.digest_all(["abab", "baba"]);
		let transitions = generator.model().transition_count();
		let lines = generator.model().lines().len();
		let _ = generator.generate_many(10);
		assert_eq!(generator.model().transition_count(), transitions);
		assert_eq!(generator.model().lines().len(), lines);
		assert_eq!(generator.model().mode(), Mode::Characters);
	}
}
