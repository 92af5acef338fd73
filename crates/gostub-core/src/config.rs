use std::path::{Path, PathBuf};

/// Everything one extraction run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Source file to read; `None` or `-` reads standard input.
	pub input: Option<PathBuf>,
	/// Destination file; `None` writes to standard output.
	pub output: Option<PathBuf>,
	/// Leave unexported functions out of the stub.
	pub exported_only: bool,
	/// Start the stub with the binary-only package directive.
	pub include_directive: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			input: None,
			output: None,
			exported_only: true,
			include_directive: true,
		}
	}
}

impl Config {
	/// Input path, or `None` when standard input should be read.
	pub fn input_path(&self) -> Option<&Path> {
		self.input
			.as_deref()
			.filter(|path| path.as_os_str() != "-")
	}

	/// Output path, or `None` when the stub goes to standard output.
	pub fn output_path(&self) -> Option<&Path> {
		self.output.as_deref()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dash_selects_stdin() {
		let config = Config {
			input: Some(PathBuf::from("-")),
			..Config::default()
		};
		assert_eq!(config.input_path(), None);
	}

	#[test]
	fn defaults_match_cli() {
		let config = Config::default();
		assert!(config.exported_only);
		assert!(config.include_directive);
		assert_eq!(config.output_path(), None);
	}
}
