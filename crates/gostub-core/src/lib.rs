//! Core library for gostub, providing the extraction pipeline for Go prototype stubs.
//!
//! A run reads one Go source file, parses it, renders the package header followed by every
//! selected function signature with its body removed, and writes the result in one piece.
//! The whole document is produced in memory before the output is touched, so a failed run
//! never leaves a partial stub behind.

/// Explicit run configuration.
pub mod config;
/// Error helpers for the core API.
pub mod error;
/// Output destinations.
pub mod sink;

pub use gostub_render::{BINARY_ONLY_DIRECTIVE, Renderer};
pub use gostub_source::{SourceError, SourceUnit, SyntaxError};
use tracing::debug;

pub use crate::config::Config;
pub use crate::error::{GostubError, Result};
pub use crate::sink::Sink;

/// Gostub turns a Go source file into the interface stub of a binary-only package.
///
/// The stub holds the package doc comment and package clause, then each top-level function
/// declaration without its body, in source order. It is valid Go on its own.
#[derive(Debug, Clone)]
pub struct Gostub {
	/// Whether unexported functions are left out.
	exported_only: bool,

	/// Whether the stub starts with `//go:binary-only-package`.
	include_directive: bool,
}

impl Default for Gostub {
	fn default() -> Self {
		Self::new()
	}
}

impl Gostub {
	/// Creates a new Gostub instance rendering exported functions under the binary-only
	/// directive.
	pub fn new() -> Self {
		Self {
			exported_only: true,
			include_directive: true,
		}
	}

	/// Build an extractor from the filter settings of a run configuration.
	pub fn from_config(config: &Config) -> Self {
		Self::new()
			.with_exported_only(config.exported_only)
			.with_directive(config.include_directive)
	}

	/// Enables or disables skipping of unexported functions.
	pub fn with_exported_only(mut self, exported_only: bool) -> Self {
		self.exported_only = exported_only;
		self
	}

	/// Enables or disables the binary-only package directive line.
	pub fn with_directive(mut self, include_directive: bool) -> Self {
		self.include_directive = include_directive;
		self
	}

	fn renderer(&self) -> Renderer {
		Renderer::new()
			.with_exported_only(self.exported_only)
			.with_directive(self.include_directive)
	}

	/// Parse a source unit and render its stub.
	pub fn extract(&self, unit: SourceUnit) -> Result<String> {
		let tree = gostub_source::parse(unit)?;
		Ok(self.renderer().render(&tree))
	}

	/// Convenience wrapper around [`Gostub::extract`] for in-memory source text.
	pub fn extract_str(&self, name: &str, text: &str) -> Result<String> {
		self.extract(SourceUnit::new(name, text))
	}

	/// Render the stub for a source unit and write it to `sink`.
	///
	/// Nothing is written when parsing fails.
	pub fn write(&self, unit: SourceUnit, sink: &Sink) -> Result<()> {
		let document = self.extract(unit)?;
		sink.write_document(&document)
	}
}

/// Execute one full run: read the configured input, extract, write the configured output.
pub fn run(config: &Config) -> Result<()> {
	let unit = match config.input_path() {
		Some(path) => SourceUnit::read(path)?,
		None => SourceUnit::read_stdin()?,
	};
	debug!(source = unit.name(), ?config, "starting extraction");

	let sink = Sink::from_path(config.output_path());
	Gostub::from_config(config).write(unit, &sink)
}

#[cfg(test)]
mod tests;
