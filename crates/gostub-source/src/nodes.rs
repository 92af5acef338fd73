//! Small helpers over tree-sitter nodes shared by the parser and the renderer.

use tree_sitter::Node;

/// Node kind tree-sitter-go uses for both `//` and `/* */` comments.
pub const COMMENT: &str = "comment";

/// Source text covered by `node`.
pub fn text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
	&source[node.start_byte()..node.end_byte()]
}

/// Fetch a field the grammar guarantees on an error-free tree, panicking if it is missing.
///
/// A missing field here means the tree was not validated before use, which is an internal
/// invariant breach rather than bad input.
pub fn must_field<'t>(node: Node<'t>, field: &str) -> Node<'t> {
	node.child_by_field_name(field).unwrap_or_else(|| {
		panic!(
			"invariant violated: {} node at {}:{} has no `{field}` field",
			node.kind(),
			node.start_position().row + 1,
			node.start_position().column + 1
		)
	})
}

/// Named children of `node`, skipping comments.
pub fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
	let mut cursor = node.walk();
	node.named_children(&mut cursor)
		.filter(|child| child.kind() != COMMENT)
		.collect()
}

/// All children stored under `field`, in source order.
pub fn field_children<'t>(node: Node<'t>, field: &str) -> Vec<Node<'t>> {
	let mut cursor = node.walk();
	node.children_by_field_name(field, &mut cursor).collect()
}

/// The comment group documenting `node`.
///
/// Mirrors Go's lead-comment rule: the group must end on the line directly above `node`,
/// consecutive comments may be at most one line apart, and a comment sharing a line with
/// preceding code belongs to that code instead.
pub fn leading_comments(node: Node<'_>) -> Vec<Node<'_>> {
	let mut group = Vec::new();
	let mut boundary = node.start_position().row;
	let mut current = node.prev_named_sibling();

	while let Some(comment) = current {
		if comment.kind() != COMMENT {
			break;
		}
		let end = comment.end_position().row;
		let adjacent = if group.is_empty() {
			end + 1 == boundary
		} else {
			end + 1 >= boundary
		};
		if !adjacent || trails_code(comment) {
			break;
		}
		boundary = comment.start_position().row;
		group.push(comment);
		current = comment.prev_named_sibling();
	}

	group.reverse();
	group
}

/// Whether `comment` starts on the same line that a preceding non-comment node ends on.
fn trails_code(comment: Node<'_>) -> bool {
	comment.prev_named_sibling().is_some_and(|prev| {
		prev.kind() != COMMENT && prev.end_position().row == comment.start_position().row
	})
}

/// Collapse whitespace runs to single spaces for single-line text.
///
/// Multi-line text and text carrying string literals (struct tags) are kept as is.
pub fn collapse_whitespace(text: &str) -> String {
	if text.contains(['\n', '"', '`']) {
		return text.to_string();
	}
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn collapse_single_line() {
		assert_eq!(collapse_whitespace("~int  |\t~string"), "~int | ~string");
	}

	#[test]
	fn collapse_keeps_multi_line() {
		let text = "struct {\n\tA int\n}";
		assert_eq!(collapse_whitespace(text), text);
	}
}
