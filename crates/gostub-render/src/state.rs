use gostub_source::{Decl, FuncDecl, SyntaxTree};
use tracing::debug;

use super::core::{BINARY_ONLY_DIRECTIVE, Renderer};
use super::syntax::{render_func_decl, render_package_header};

/// Mutable rendering context for a single pass over one file.
pub struct RenderState<'a, 'b> {
	/// Reference to the immutable renderer configuration.
	pub config: &'a Renderer,
	/// The parsed file being rendered.
	pub tree: &'b SyntaxTree,
	/// Number of function signatures written so far.
	pub emitted: usize,
	/// Number of functions left out by the visibility filter.
	pub skipped: usize,
}

impl<'a, 'b> RenderState<'a, 'b> {
	/// Create a new render state.
	pub fn new(config: &'a Renderer, tree: &'b SyntaxTree) -> Self {
		Self {
			config,
			tree,
			emitted: 0,
			skipped: 0,
		}
	}

	/// Render the directive, the package header and every selected function signature.
	pub fn render(&mut self) -> String {
		let tree = self.tree;
		let mut output = String::new();
		if self.config.include_directive {
			output.push_str(BINARY_ONLY_DIRECTIVE);
			output.push_str("\n\n");
		}
		output.push_str(&render_package_header(tree));

		for decl in tree.declarations() {
			match decl {
				Decl::Function(func) => self.render_function(func, &mut output),
				Decl::Other { .. } => continue,
			}
		}

		debug!(
			file = tree.unit().name(),
			emitted = self.emitted,
			skipped = self.skipped,
			"rendered stub"
		);
		output
	}

	/// Append one function's bodyless declaration followed by a blank line.
	fn render_function(&mut self, func: FuncDecl<'_>, output: &mut String) {
		if self.should_skip(&func) {
			debug!(name = func.name, line = func.line(), "skipping unexported function");
			self.skipped += 1;
			return;
		}
		let func = func.without_body();
		output.push_str(&render_func_decl(&func, self.tree.source()));
		output.push_str("\n\n");
		self.emitted += 1;
	}

	/// Determine whether the visibility filter drops a function.
	pub fn should_skip(&self, func: &FuncDecl<'_>) -> bool {
		self.config.exported_only && !func.is_exported()
	}
}
