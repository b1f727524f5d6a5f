use super::segmenter::Mode;
use crate::error::ChainError;

/// Input parameters for building a chain and generating from it.
///
/// # Responsibilities
/// - Hold the gram order, unit mode and number of sequences to produce
/// - Hold the optional walk bound and random seed
/// - Reject out-of-range values before any model is built
///
/// # Invariants
/// - `n >= 1`
/// - `max_steps`, when set, is >= 1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Unit kind the corpus is cut into.
	pub mode: Mode,

	/// Seed for the random source. `None` draws one from the OS.
	pub seed: Option<u64>,

	/// Number of units per gram.
	n: usize,

	/// Number of sequences to generate.
	count: usize,

	/// Maximum number of grams per walk. `None` is unbounded.
	max_steps: Option<usize>,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self { mode: Mode::Characters, seed: None, n: 2, count: 10, max_steps: None }
	}
}

impl GenerationInput {
	/// Creates a validated input from raw command-line style values.
	///
	/// # Errors
	/// Returns an error if `n <= 0` or `count < 0`.
	pub fn new(n: i64, words: bool, count: i64) -> Result<Self, ChainError> {
		let mut input = Self {
			mode: if words { Mode::Words } else { Mode::Characters },
			..Self::default()
		};
		input.set_n(n)?;
		input.set_count(count)?;
		Ok(input)
	}

	pub fn n(&self) -> usize {
		self.n
	}

	pub fn count(&self) -> usize {
		self.count
	}

	pub fn max_steps(&self) -> Option<usize> {
		self.max_steps
	}

	/// Sets the gram order.
	///
	/// # Errors
	/// Returns an error if `n <= 0`.
	pub fn set_n(&mut self, n: i64) -> Result<(), ChainError> {
		self.n = match usize::try_from(n) {
			Ok(n) if n >= 1 => n,
			_ => return Err(ChainError::invalid_config("n", format!("must be >= 1, got {n}"))),
		};
		Ok(())
	}

	/// Sets the number of sequences to generate.
	///
	/// # Errors
	/// Returns an error if `count < 0`.
	pub fn set_count(&mut self, count: i64) -> Result<(), ChainError> {
		self.count = usize::try_from(count)
			.map_err(|_| ChainError::invalid_config("count", format!("must be >= 0, got {count}")))?;
		Ok(())
	}

	/// Bounds every walk to `max_steps` grams.
	///
	/// # Errors
	/// Returns an error if `max_steps == 0`.
	pub fn set_max_steps(&mut self, max_steps: usize) -> Result<(), ChainError> {
		if max_steps == 0 {
			return Err(ChainError::invalid_config("max_steps", "must be >= 1, got 0"));
		}
		self.max_steps = Some(max_steps);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_command_line() {
		let input = GenerationInput::default();
		assert_eq!(input.n(), 2);
		assert_eq!(input.count(), 10);
		assert_eq!(input.mode, Mode::Characters);
		assert_eq!(input.max_steps(), None);
		assert_eq!(input.seed, None);
	}

	#[test]
	fn words_flag_selects_word_mode() {
		let input = GenerationInput::new(3, true, 4).unwrap();
		assert_eq!(input.mode, Mode::Words);
		assert_eq!(input.n(), 3);
		assert_eq!(input.count(), 4);
	}

	#[test]
	fn non_positive_n_is_rejected() {
		for n in [0, -1, i64::MIN] {
			let err = GenerationInput::new(n, false, 10).unwrap_err();
			assert!(matches!(err, ChainError::InvalidConfig { field: "n", .. }), "{n}: {err}");
		}
	}

	#[test]
	fn negative_count_is_rejected() {
		let err = GenerationInput::new(2, false, -5).unwrap_err();
		assert_eq!(err.to_string(), "invalid configuration: count must be >= 0, got -5");
	}

	#[test]
	fn zero_count_is_allowed() {
		assert_eq!(GenerationInput::new(2, false, 0).unwrap().count(), 0);
	}

	#[test]
	fn zero_step_bound_is_rejected() {
		let mut input = GenerationInput::default();
		assert!(input.set_max_steps(0).is_err());
		input.set_max_steps(500).unwrap();
		assert_eq!(input.max_steps(), Some(500));
	}
}
