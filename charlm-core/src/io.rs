use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Reads a text file and returns its full contents.
///
/// - Reads the entire file into memory
/// - Line breaks are kept: they are characters like any other
pub(crate) fn read_text<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	BufReader::new(File::open(filename)?).read_to_string(&mut contents)?;
	Ok(contents)
}
