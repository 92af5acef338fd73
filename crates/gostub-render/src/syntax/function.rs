use gostub_source::FuncDecl;
use gostub_source::nodes::{collapse_whitespace, field_children, named_children, text};
use tree_sitter::Node;

use super::generics::render_type_parameters;
use super::types::render_type;

/// Render a bodyless function declaration header: `func (r *T) Name[P any](args) results`.
pub fn render_signature(func: &FuncDecl<'_>, source: &str) -> String {
	let receiver = func
		.receiver
		.map(|receiver| format!("{} ", render_parameter_list(receiver, source)))
		.unwrap_or_default();
	let type_params = func
		.type_parameters
		.map(|params| render_type_parameters(params, source))
		.unwrap_or_default();
	format!(
		"func {receiver}{}{type_params}{}",
		func.name,
		render_signature_tail(func.parameters, func.result, source)
	)
}

/// Render the parameter list and result shared by declarations and function types.
pub fn render_signature_tail(parameters: Node<'_>, result: Option<Node<'_>>, source: &str) -> String {
	let result = result
		.map(|result| format!(" {}", render_result(result, source)))
		.unwrap_or_default();
	format!("{}{result}", render_parameter_list(parameters, source))
}

/// Render a parenthesised parameter or receiver list on one line. Comments inside the list
/// are not carried over.
pub fn render_parameter_list(list: Node<'_>, source: &str) -> String {
	let params: Vec<String> = named_children(list)
		.into_iter()
		.map(|param| render_parameter(param, source))
		.collect();
	format!("({})", params.join(", "))
}

/// Render a single parameter declaration: `a, b int`, `rest ...string` or a bare type.
fn render_parameter(param: Node<'_>, source: &str) -> String {
	let Some(ty) = param.child_by_field_name("type") else {
		return collapse_whitespace(text(param, source));
	};
	let mut ty = render_type(ty, source);
	if param.kind() == "variadic_parameter_declaration" {
		ty = format!("...{ty}");
	}

	let names: Vec<&str> = field_children(param, "name")
		.into_iter()
		.map(|name| text(name, source))
		.collect();
	if names.is_empty() {
		ty
	} else {
		format!("{} {ty}", names.join(", "))
	}
}

/// Render a result; a single unnamed result drops its parentheses as gofmt does.
fn render_result(result: Node<'_>, source: &str) -> String {
	if result.kind() != "parameter_list" {
		return render_type(result, source);
	}
	match named_children(result).as_slice() {
		[only]
			if only.kind() == "parameter_declaration"
				&& field_children(*only, "name").is_empty() =>
		{
			match only.child_by_field_name("type") {
				Some(ty) => render_type(ty, source),
				None => render_parameter_list(result, source),
			}
		}
		_ => render_parameter_list(result, source),
	}
}
