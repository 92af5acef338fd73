//! Translation of tree-sitter error nodes and Go top-level rules into [`SyntaxError`]s.
//!
//! tree-sitter recovers from malformed input instead of failing, so a tree is only accepted
//! once it is free of `ERROR` and `MISSING` nodes. The Go grammar is also more permissive
//! than the Go parser at the top level (it accepts statements and misplaced imports there),
//! so those rules are checked here as well.

use tree_sitter::{Node, Tree};

use crate::error::SyntaxError;
use crate::nodes::{COMMENT, text};
use crate::unit::SourceUnit;

/// Longest snippet of offending source quoted in a diagnostic.
const MAX_SNIPPET_CHARS: usize = 24;

/// Return the first syntax problem in `tree`, if any.
pub fn first_syntax_error(tree: &Tree, unit: &SourceUnit) -> Option<SyntaxError> {
	let root = tree.root_node();
	if let Some(node) = find_error_node(root) {
		let message = if node.is_missing() {
			format!("expected '{}'", node.kind())
		} else {
			describe_unexpected(node, unit.text())
		};
		return Some(at(node, unit, message));
	}
	check_top_level(root, unit)
}

/// Depth-first search for the first `ERROR` or `MISSING` node.
fn find_error_node(node: Node<'_>) -> Option<Node<'_>> {
	if node.is_error() || node.is_missing() {
		return Some(node);
	}
	if !node.has_error() {
		return None;
	}
	let mut cursor = node.walk();
	for child in node.children(&mut cursor) {
		if let Some(found) = find_error_node(child) {
			return Some(found);
		}
	}
	None
}

fn describe_unexpected(node: Node<'_>, source: &str) -> String {
	let snippet = text(node, source)
		.lines()
		.map(str::trim)
		.find(|line| !line.is_empty())
		.unwrap_or_default();
	if snippet.is_empty() {
		return "syntax error: unexpected EOF".to_string();
	}
	let snippet: String = snippet.chars().take(MAX_SNIPPET_CHARS).collect();
	format!("syntax error: unexpected '{snippet}'")
}

/// Enforce the Go parser's top-level layout: package clause, then imports, then declarations.
fn check_top_level(root: Node<'_>, unit: &SourceUnit) -> Option<SyntaxError> {
	let mut cursor = root.walk();
	let mut seen_package = false;
	let mut seen_declaration = false;

	for child in root.named_children(&mut cursor) {
		let kind = child.kind();
		if kind == COMMENT {
			continue;
		}
		if !seen_package {
			if kind != "package_clause" {
				let found = text(child, unit.text()).split_whitespace().next().unwrap_or_default();
				return Some(at(child, unit, format!("expected 'package', found '{found}'")));
			}
			seen_package = true;
			continue;
		}
		match kind {
			"import_declaration" if seen_declaration => {
				return Some(at(
					child,
					unit,
					"syntax error: imports must appear before other declarations".to_string(),
				));
			}
			"import_declaration" => {}
			"function_declaration" | "method_declaration" | "type_declaration"
			| "var_declaration" | "const_declaration" => seen_declaration = true,
			"package_clause" => {
				return Some(at(
					child,
					unit,
					"syntax error: unexpected package clause".to_string(),
				));
			}
			_ => {
				return Some(at(
					child,
					unit,
					"syntax error: non-declaration statement outside function body".to_string(),
				));
			}
		}
	}

	if !seen_package {
		let end = root.end_position();
		return Some(SyntaxError {
			file: unit.name().to_string(),
			line: end.row + 1,
			column: end.column + 1,
			message: "expected 'package', found 'EOF'".to_string(),
		});
	}
	None
}

fn at(node: Node<'_>, unit: &SourceUnit, message: String) -> SyntaxError {
	let position = node.start_position();
	SyntaxError {
		file: unit.name().to_string(),
		line: position.row + 1,
		column: position.column + 1,
		message,
	}
}
