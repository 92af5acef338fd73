use gostub_source::nodes::text;
use gostub_source::{FuncDecl, SyntaxTree};

use super::docs::{comment_text, escape_block_comment};
use super::function::render_signature;

/// Render the package header: the package doc as a block comment, then the package clause.
pub fn render_package_header(tree: &SyntaxTree) -> String {
	let doc = escape_block_comment(&comment_text(&tree.package_doc()));
	format!("/*\n{doc}*/\npackage {}\n\n", tree.package_name())
}

/// Render a function's doc comments verbatim, one comment per line.
pub fn render_func_docs(func: &FuncDecl<'_>, source: &str) -> String {
	let mut output = String::new();
	for comment in &func.doc {
		output.push_str(text(*comment, source).trim_end());
		output.push('\n');
	}
	output
}

/// Render a function declaration that has had its body removed.
///
/// # Panics
///
/// Panics if `func` still carries a body; callers must prune it first.
pub fn render_func_decl(func: &FuncDecl<'_>, source: &str) -> String {
	assert!(
		func.body.is_none(),
		"invariant violated: function {} rendered with its body attached",
		func.name
	);
	format!(
		"{}{}",
		render_func_docs(func, source),
		render_signature(func, source)
	)
}
