use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading or parsing a Go source unit.
#[derive(Debug, Error)]
pub enum SourceError {
	/// The input file could not be read.
	#[error("could not open input file {}: {source}", path.display())]
	Read {
		/// Path that failed to load.
		path: PathBuf,
		/// Underlying I/O failure.
		#[source]
		source: io::Error,
	},
	/// A non-file input stream (usually standard input) could not be read.
	#[error("could not read {name}: {source}")]
	Stream {
		/// Source identifier of the stream.
		name: String,
		/// Underlying I/O failure.
		#[source]
		source: io::Error,
	},
	/// The source text is not valid Go.
	#[error("could not parse input code: {0}")]
	Syntax(SyntaxError),
	/// The Go grammar is incompatible with the linked tree-sitter runtime.
	#[error("could not load the Go grammar: {0}")]
	Language(#[from] tree_sitter::LanguageError),
	/// The parser returned no tree at all.
	#[error("parser produced no syntax tree for {0}")]
	Unparsed(String),
}

impl From<SyntaxError> for SourceError {
	fn from(err: SyntaxError) -> Self {
		Self::Syntax(err)
	}
}

/// A location-annotated syntax error, reported as `file:line:column: message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
	/// Source identifier the error belongs to.
	pub file: String,
	/// 1-based line number.
	pub line: usize,
	/// 1-based column, counted in bytes.
	pub column: usize,
	/// Human-readable description of the problem.
	pub message: String,
}

impl fmt::Display for SyntaxError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}:{}:{}: {}",
			self.file, self.line, self.column, self.message
		)
	}
}

impl std::error::Error for SyntaxError {}

/// Result type returned by gostub-source helpers.
pub type Result<T> = std::result::Result<T, SourceError>;
