use std::collections::HashMap;
use std::iter;

use log::{debug, info, trace};
use rand::Rng;

use super::segmenter::{Mode, ngrams};
use super::token::{State, Token};
use crate::error::ChainError;

/// Characters stripped from both ends of every word in word mode.
const WORD_TRIM: &[char] = &['!', '“', '”', '(', ')'];

/// Outcome of a single successful transition.
#[derive(Debug, PartialEq, Eq)]
pub enum Step<'a> {
	/// Moved to a content state.
	Advance {
		token: &'a Token,
		gram: &'a str,
	},
	/// Drew the end marker.
	Finished,
}

/// Represents a Markov chain over overlapping n-grams.
///
/// The model maps every observed state to the ordered list of states seen
/// right after it, and keeps the raw lines for novelty checks.
///
/// # Responsibilities
/// - Digest lines into transitions, bounded by `Token::Start` / `Token::End`
/// - Take single uniform random steps through the table
/// - Rebuild text from a walk, collapsing the overlap between grams
/// - Tell whether a text is a verbatim corpus line
///
/// # Invariants
/// - `n` is always >= 1
/// - Transitions are only ever appended
/// - `Token::Start -> Token::End` is never recorded
#[derive(Clone, Debug)]
pub struct ChainModel {
	/// Number of units in a gram.
	n: usize,
	/// Unit kind, fixed for the lifetime of the model.
	mode: Mode,
	/// Mapping from a state to its observed successors.
	states: HashMap<Token, State>,
	/// Digested lines, in input order.
	lines: Vec<String>,
}

impl ChainModel {
	/// Creates an empty model of order `n`.
	///
	/// # Errors
	/// Returns an error if `n == 0`.
	pub fn new(n: usize, mode: Mode) -> Result<Self, ChainError> {
		if n == 0 {
			return Err(ChainError::invalid_config("n", "must be >= 1, got 0"));
		}
		Ok(Self { n, mode, states: HashMap::new(), lines: Vec::new() })
	}

	pub fn n(&self) -> usize {
		self.n
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	/// Lines digested so far, in input order.
	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	/// Number of states with at least one successor.
	pub fn state_count(&self) -> usize {
		self.states.len()
	}

	/// Number of recorded transitions, duplicates included.
	pub fn transition_count(&self) -> usize {
		self.states.values().map(State::len).sum()
	}

	/// Returns the successors recorded for `token`, in observation order.
	pub fn successors(&self, token: &Token) -> Option<&[Token]> {
		self.states.get(token).map(State::successors)
	}

	/// Adds a line to the model.
	///
	/// Cuts the line into grams, appends `Token::End`, then records each
	/// consecutive pair starting from `Token::Start`. A line too short to
	/// hold a single gram only produces `Start -> End`, which is skipped.
	pub fn digest(&mut self, line: &str) {
		self.lines.push(line.to_owned());

		let grams = ngrams(line, self.n, self.mode);
		debug!("digesting {} grams from {:?}", grams.len(), line);

		let tokens = grams.into_iter().map(Token::Gram).chain(iter::once(Token::End));
		let mut current = Token::Start;
		for next in tokens {
			if !(current == Token::Start && next == Token::End) {
				self.record(&current, next.clone());
			}
			current = next;
		}
	}

	/// Digests every line in order.
	pub fn digest_all<I, S>(&mut self, lines: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		for line in lines {
			self.digest(line.as_ref());
		}
		info!(
			"chain built from {} lines: {} states, {} transitions",
			self.lines.len(),
			self.state_count(),
			self.transition_count()
		);
	}

	fn record(&mut self, from: &Token, to: Token) {
		if let Some(state) = self.states.get_mut(from) {
			state.push(to);
		} else {
			let mut state = State::new(from.clone());
			state.push(to);
			self.states.insert(from.clone(), state);
		}
	}

	/// Draws the successor of `current` uniformly at random.
	///
	/// # Errors
	/// Returns `ChainError::NoTransition` if `current` has no successor.
	pub fn step<'a, R: Rng>(&'a self, current: &Token, rng: &mut R) -> Result<Step<'a>, ChainError> {
		let stuck = || ChainError::NoTransition { state: current.to_string() };
		let next = self.states.get(current).and_then(|state| state.pick(rng)).ok_or_else(stuck)?;
		match next {
			Token::End => Ok(Step::Finished),
			Token::Gram(gram) => Ok(Step::Advance { token: next, gram }),
			// Never recorded as a successor.
			Token::Start => Err(stuck()),
		}
	}

	/// Walks from `Token::Start` to `Token::End`, handing every gram to `on_gram`.
	fn walk<R, F>(&self, rng: &mut R, max_steps: Option<usize>, mut on_gram: F) -> Result<(), ChainError>
	where
		R: Rng,
		F: FnMut(&str),
	{
		let start = Token::Start;
		let mut current = &start;
		let mut steps = 0;
		loop {
			match self.step(current, rng)? {
				Step::Finished => {
					trace!("{current} -> END after {steps} steps");
					return Ok(());
				}
				Step::Advance { token, gram } => {
					if let Some(limit) = max_steps {
						if steps >= limit {
							return Err(ChainError::StepLimit { limit });
						}
					}
					steps += 1;
					trace!("{current} -> {token}");
					on_gram(gram);
					current = token;
				}
			}
		}
	}

	/// Generates a new sequence by walking the chain.
	///
	/// `max_steps` bounds the number of grams taken; `None` walks until
	/// `Token::End` however long that takes.
	///
	/// # Errors
	/// - `ChainError::NoTransition` if the walk reaches a state with no successor
	/// - `ChainError::StepLimit` if the bound is hit first
	pub fn generate<R: Rng>(&self, rng: &mut R, max_steps: Option<usize>) -> Result<String, ChainError> {
		match self.mode {
			Mode::Characters => self.generate_chars(rng, max_steps),
			Mode::Words => self.generate_words(rng, max_steps),
		}
	}

	fn generate_chars<R: Rng>(&self, rng: &mut R, max_steps: Option<usize>) -> Result<String, ChainError> {
		let overlap = self.n - 1;
		let mut result = String::new();
		self.walk(rng, max_steps, |gram| {
			// hel + ell => hell
			drop_last_chars(&mut result, overlap);
			result.push_str(gram);
		})?;
		Ok(result)
	}

	fn generate_words<R: Rng>(&self, rng: &mut R, max_steps: Option<usize>) -> Result<String, ChainError> {
		let overlap = self.n - 1;
		let divider = self.mode.divider();
		let mut result: Vec<String> = Vec::new();
		self.walk(rng, max_steps, |gram| {
			if result.len() >= overlap {
				result.truncate(result.len() - overlap);
			}
			// Split back into words so the next overlap counts them.
			result.extend(gram.split(divider).map(|word| word.trim_matches(WORD_TRIM).to_owned()));
		})?;
		Ok(result.join(divider))
	}

	/// Does the given text exist verbatim in the digested lines?
	///
	/// Surrounding whitespace is ignored on both sides.
	pub fn contains_line(&self, text: &str) -> bool {
		let text = text.trim();
		self.lines.iter().any(|line| line.trim() == text)
	}
}

/// Removes the last `count` characters of `s`, or nothing if `s` is shorter.
fn drop_last_chars(s: &mut String, count: usize) {
	if count == 0 {
		return;
	}
	if let Some((index, _)) = s.char_indices().rev().nth(count - 1) {
		s.truncate(index);
	}
}
