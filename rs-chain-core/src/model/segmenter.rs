/// Unit a line is cut into before building n-grams.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
	/// One unit per Unicode scalar value.
	#[default]
	Characters,
	/// One unit per whitespace-delimited word.
	Words,
}

impl Mode {
	/// Separator placed between units when they are joined into a gram.
	pub fn divider(self) -> &'static str {
		match self {
			Mode::Characters => "",
			Mode::Words => " ",
		}
	}

	fn units(self, line: &str) -> Vec<&str> {
		match self {
			Mode::Characters => line.char_indices().map(|(i, c)| &line[i..i + c.len_utf8()]).collect(),
			Mode::Words => line.split_whitespace().collect(),
		}
	}
}

/// Breaks a line into overlapping n-grams of `n` units, e.g.:
/// - `lol`, 2 => `[lo, ol]`
/// - `charles`, 4 => `[char, harl, arle, rles]`
/// - `my name is charles harries`, 2 words => `[my name, name is, is charles, charles harries]`
///
/// A line with fewer than `n` units yields nothing, and so does `n == 0`.
pub fn ngrams(line: &str, n: usize, mode: Mode) -> Vec<String> {
	if n == 0 {
		return Vec::new();
	}
	mode.units(line)
		.windows(n)
		.map(|window| window.join(mode.divider()))
		.collect()
}
