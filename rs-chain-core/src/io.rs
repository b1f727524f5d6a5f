use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::model::generator::Generated;

/// Reads every line of `reader` until end of stream.
///
/// - Splits on `\n` / `\r\n`, separators are not kept
/// - Any read failure is returned as is
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
	reader.lines().collect()
}

/// Reads a text file and returns all its lines as a `Vec<String>`.
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	read_lines(BufReader::new(File::open(filename)?))
}

/// Writes one generated sequence as `<status>\t<sequence>\n`.
pub fn write_generated<W: Write>(out: &mut W, generated: &Generated) -> io::Result<()> {
	writeln!(out, "{}\t{}", generated.novelty, generated.text)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::generator::Novelty;
	use std::io::Cursor;

	#[test]
	fn read_lines_strips_both_line_endings() {
		let lines = read_lines(Cursor::new("one\r\ntwo\n\nthree")).unwrap();
		assert_eq!(lines, vec!["one", "two", "", "three"]);
	}

	#[test]
	fn read_lines_reports_invalid_utf8() {
		let err = read_lines(Cursor::new(vec![b'a', 0xff, b'\n'])).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::InvalidData);
	}

	#[test]
	fn read_file_missing_path_fails() {
		assert!(read_file("definitely/not/here.txt").is_err());
	}

	#[test]
	fn write_generated_is_tab_separated() {
		let mut out = Vec::new();
		let generated = Generated { text: "hello world".to_owned(), novelty: Novelty::Exists };
		write_generated(&mut out, &generated).unwrap();
		assert_eq!(String::from_utf8(out).unwrap(), "exists\thello world\n");
	}
}
