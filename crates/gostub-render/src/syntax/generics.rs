use gostub_source::nodes::{collapse_whitespace, field_children, named_children, text};
use tree_sitter::Node;

use super::types::render_type;

/// Render a type parameter list such as `[K comparable, V any]`.
///
/// Each entry is rendered as its names followed by the constraint; entries the grammar
/// models differently are kept as source text.
pub fn render_type_parameters(list: Node<'_>, source: &str) -> String {
	let params: Vec<String> = named_children(list)
		.into_iter()
		.map(|param| {
			let names: Vec<&str> = field_children(param, "name")
				.into_iter()
				.map(|name| text(name, source))
				.collect();
			match param.child_by_field_name("type") {
				Some(constraint) if !names.is_empty() => {
					format!("{} {}", names.join(", "), render_type(constraint, source))
				}
				_ => collapse_whitespace(text(param, source)),
			}
		})
		.collect();
	format!("[{}]", params.join(", "))
}

/// Render the type arguments of a generic instantiation such as `[int, string]`.
pub fn render_type_arguments(list: Node<'_>, source: &str) -> String {
	let args: Vec<String> = named_children(list)
		.into_iter()
		.map(|arg| render_type(arg, source))
		.collect();
	format!("[{}]", args.join(", "))
}
