use gostub_source::SyntaxTree;

/// Directive marking a file as the interface of a binary-only package.
pub const BINARY_ONLY_DIRECTIVE: &str = "//go:binary-only-package";

/// Configurable renderer that turns a parsed Go file into a declarations-only stub.
#[derive(Debug, Clone)]
pub struct Renderer {
	/// Whether unexported functions are left out.
	pub exported_only: bool,
	/// Whether the output starts with [`BINARY_ONLY_DIRECTIVE`].
	pub include_directive: bool,
}

impl Default for Renderer {
	fn default() -> Self {
		Self::new()
	}
}

impl Renderer {
	/// Create a renderer with default configuration: exported functions only, directive on.
	pub fn new() -> Self {
		Self {
			exported_only: true,
			include_directive: true,
		}
	}

	/// Only render exported functions?
	pub fn with_exported_only(mut self, exported_only: bool) -> Self {
		self.exported_only = exported_only;
		self
	}

	/// Emit the binary-only package directive before the package header.
	pub fn with_directive(mut self, include_directive: bool) -> Self {
		self.include_directive = include_directive;
		self
	}

	/// Render the stub document for a parsed file.
	pub fn render(&self, tree: &SyntaxTree) -> String {
		use super::state::RenderState;

		RenderState::new(self, tree).render()
	}
}
