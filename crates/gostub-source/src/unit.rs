use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SourceError};

/// Identifier used for source read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// The complete text of one Go source file plus the name used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
	name: String,
	text: String,
}

impl SourceUnit {
	/// Wrap already-loaded source text.
	pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			text: text.into(),
		}
	}

	/// Read a source file fully into memory.
	pub fn read(path: &Path) -> Result<Self> {
		let text = fs::read_to_string(path).map_err(|source| SourceError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		debug!(path = %path.display(), bytes = text.len(), "read source file");
		Ok(Self::new(path.display().to_string(), text))
	}

	/// Read all of standard input.
	pub fn read_stdin() -> Result<Self> {
		Self::read_from(STDIN_NAME, io::stdin().lock())
	}

	/// Read all of `reader` under the given source name.
	pub fn read_from(name: &str, mut reader: impl Read) -> Result<Self> {
		let mut text = String::new();
		reader
			.read_to_string(&mut text)
			.map_err(|source| SourceError::Stream {
				name: name.to_string(),
				source,
			})?;
		debug!(name, bytes = text.len(), "read source stream");
		Ok(Self::new(name, text))
	}

	/// Source identifier used in diagnostics.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Full source text.
	pub fn text(&self) -> &str {
		&self.text
	}
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;

	#[test]
	fn read_missing_file_reports_path() {
		let err = SourceUnit::read(Path::new("/definitely/not/here.go")).unwrap_err();
		let message = err.to_string();
		assert!(message.starts_with("could not open input file /definitely/not/here.go"));
		assert!(matches!(err, SourceError::Read { .. }));
	}

	#[test]
	fn read_from_stream_keeps_name() {
		let unit = SourceUnit::read_from(STDIN_NAME, Cursor::new("package demo\n")).unwrap();
		assert_eq!(unit.name(), "<stdin>");
		assert_eq!(unit.text(), "package demo\n");
	}
}
