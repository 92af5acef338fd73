use gostub_source::nodes::{collapse_whitespace, must_field, named_children, text};
use tree_sitter::Node;

use super::function::render_signature_tail;
use super::generics::render_type_arguments;

/// Render a Go type expression with gofmt spacing.
///
/// Composite literal types (`struct`, `interface`) and constraint syntax fall back to their
/// source text, which is already valid Go.
pub fn render_type(node: Node<'_>, source: &str) -> String {
	match node.kind() {
		"type_identifier" | "identifier" | "package_identifier" | "field_identifier" => {
			text(node, source).to_string()
		}
		"qualified_type" => format!(
			"{}.{}",
			text(must_field(node, "package"), source),
			text(must_field(node, "name"), source)
		),
		"pointer_type" => format!("*{}", render_inner(node, source)),
		"parenthesized_type" => format!("({})", render_inner(node, source)),
		"slice_type" => format!("[]{}", render_type(must_field(node, "element"), source)),
		"array_type" => format!(
			"[{}]{}",
			collapse_whitespace(text(must_field(node, "length"), source)),
			render_type(must_field(node, "element"), source)
		),
		"implicit_length_array_type" => {
			format!("[...]{}", render_type(must_field(node, "element"), source))
		}
		"map_type" => format!(
			"map[{}]{}",
			render_type(must_field(node, "key"), source),
			render_type(must_field(node, "value"), source)
		),
		"channel_type" => render_channel(node, source),
		"function_type" => format!(
			"func{}",
			render_signature_tail(
				must_field(node, "parameters"),
				node.child_by_field_name("result"),
				source
			)
		),
		"generic_type" => format!(
			"{}{}",
			render_type(must_field(node, "type"), source),
			render_type_arguments(must_field(node, "type_arguments"), source)
		),
		_ => collapse_whitespace(text(node, source)),
	}
}

/// Render the single type wrapped by a pointer or parentheses.
fn render_inner(node: Node<'_>, source: &str) -> String {
	match named_children(node).first() {
		Some(inner) => render_type(*inner, source),
		None => collapse_whitespace(text(node, source)),
	}
}

/// Render `chan T`, `<-chan T` or `chan<- T`.
fn render_channel(node: Node<'_>, source: &str) -> String {
	let value = must_field(node, "value");
	match channel_tokens(node).as_slice() {
		["<-", "chan", ..] => format!("<-chan {}", render_type(value, source)),
		["chan", "<-", ..] => format!("chan<- {}", render_type(value, source)),
		_ => render_plain_channel(value, source),
	}
}

/// Render `chan` around `value`, undoing the grammar's binding of `chan<- chan T`.
///
/// tree-sitter-go attaches the arrow to the inner channel, so `chan<- chan T` arrives as a
/// plain `chan` of a receive-only channel. The type Go means by that spelling is a send-only
/// channel of `chan T`; an actual `chan (<-chan T)` is a `parenthesized_type` and is not
/// affected.
fn render_plain_channel(value: Node<'_>, source: &str) -> String {
	if value.kind() == "channel_type" && channel_tokens(value).first() == Some(&"<-") {
		return format!(
			"chan<- {}",
			render_plain_channel(must_field(value, "value"), source)
		);
	}
	format!("chan {}", render_type(value, source))
}

/// Anonymous tokens (`chan`, `<-`) of a channel type, in source order.
fn channel_tokens(node: Node<'_>) -> Vec<&'static str> {
	let mut cursor = node.walk();
	node.children(&mut cursor)
		.filter(|child| !child.is_named())
		.map(|child| child.kind())
		.collect()
}
