use std::fmt;

use rand::Rng;

/// A node of the chain.
///
/// `Start` and `End` bound every digested line. They are distinct variants,
/// so no gram text can ever be confused with them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
	Start,
	Gram(String),
	End,
}

impl Token {
	/// Returns the gram text, or `None` for the two markers.
	pub fn gram(&self) -> Option<&str> {
		match self {
			Token::Gram(text) => Some(text),
			_ => None,
		}
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Token::Start => f.write_str("START"),
			Token::Gram(text) => f.write_str(text),
			Token::End => f.write_str("END"),
		}
	}
}

/// Represents a state of the chain and everything observed after it.
///
/// ## Invariants
/// - Successors are kept in observation order, duplicates included
/// - A successor observed twice is twice as likely to be picked
#[derive(Clone, Debug)]
pub struct State {
	/// Identifier of the state.
	key: Token,
	/// Observed successors, in digestion order.
	successors: Vec<Token>,
}

impl State {
	/// Creates a new state with no successor.
	pub fn new(key: Token) -> Self {
		Self { key, successors: Vec::new() }
	}

	pub fn key(&self) -> &Token {
		&self.key
	}

	/// Records one more observation of `next` following this state.
	pub fn push(&mut self, next: Token) {
		self.successors.push(next);
	}

	pub fn successors(&self) -> &[Token] {
		&self.successors
	}

	pub fn len(&self) -> usize {
		self.successors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.successors.is_empty()
	}

	/// Picks a successor uniformly over list positions.
	///
	/// Returns `None` if the state has no successor.
	pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<&Token> {
		if self.successors.is_empty() {
			return None;
		}
		let index = rng.random_range(0..self.successors.len());
		self.successors.get(index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn markers_render_as_names() {
		assert_eq!(Token::Start.to_string(), "START");
		assert_eq!(Token::End.to_string(), "END");
		assert_eq!(Token::Gram("he".to_owned()).to_string(), "he");
	}

	#[test]
	fn gram_text_named_like_a_marker_is_still_a_gram() {
		let gram = Token::Gram("END".to_owned());
		assert_ne!(gram, Token::End);
		assert_eq!(gram.gram(), Some("END"));
		assert_eq!(Token::End.gram(), None);
	}

	#[test]
	fn empty_state_picks_nothing() {
		let state = State::new(Token::Start);
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(state.key(), &Token::Start);
		assert!(state.is_empty());
		assert_eq!(state.pick(&mut rng), None);
	}

	#[test]
	fn duplicates_are_kept_and_weigh_the_draw() {
		let mut state = State::new(Token::Gram("a".to_owned()));
		state.push(Token::Gram("b".to_owned()));
		state.push(Token::Gram("b".to_owned()));
		state.push(Token::Gram("b".to_owned()));
		state.push(Token::End);
		assert_eq!(state.len(), 4);

		let mut rng = StdRng::seed_from_u64(7);
		let draws = 4000;
		let ends = (0..draws).filter(|_| state.pick(&mut rng) == Some(&Token::End)).count();
		// Expected 1000 with a standard deviation near 27.
		assert!((800..1200).contains(&ends), "END drawn {ends} times");
	}
}
