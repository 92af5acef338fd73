use std::fmt;
use std::io;
use std::path::PathBuf;

use gostub_source::SourceError;

/// Aggregate errors produced by the gostub-core API.
#[derive(Debug)]
pub enum GostubError {
	/// Reading or parsing the input failed.
	Source(SourceError),
	/// The output file could not be created, written or moved into place.
	Output {
		/// Destination that was being written.
		path: PathBuf,
		/// Underlying I/O failure.
		source: io::Error,
	},
	/// Writing to standard output failed.
	Stdout(io::Error),
}

impl fmt::Display for GostubError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Source(err) => write!(f, "{err}"),
			Self::Output { path, source } => {
				write!(f, "could not write output file {}: {source}", path.display())
			}
			Self::Stdout(err) => write!(f, "could not write to standard output: {err}"),
		}
	}
}

impl std::error::Error for GostubError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Source(err) => Some(err),
			Self::Output { source, .. } => Some(source),
			Self::Stdout(err) => Some(err),
		}
	}
}

impl From<SourceError> for GostubError {
	fn from(err: SourceError) -> Self {
		Self::Source(err)
	}
}

impl GostubError {
	/// Whether the input was rejected as malformed Go.
	pub fn is_syntax(&self) -> bool {
		matches!(self, Self::Source(SourceError::Syntax(_)))
	}
}

/// Result type returned by the gostub-core library.
pub type Result<T> = std::result::Result<T, GostubError>;
