use tree_sitter::Node;

use crate::nodes::{leading_comments, must_field, text};

/// A top-level declaration of a Go source file.
#[derive(Debug, Clone)]
pub enum Decl<'t> {
	/// A `func` declaration, with or without a receiver.
	Function(FuncDecl<'t>),
	/// Any other top-level construct: imports, `type`, `var` and `const` blocks.
	Other {
		/// tree-sitter node kind, e.g. `type_declaration`.
		kind: &'static str,
	},
}

impl<'t> Decl<'t> {
	/// Classify a top-level node.
	pub fn from_node(node: Node<'t>, source: &'t str) -> Self {
		match node.kind() {
			"function_declaration" | "method_declaration" => {
				Self::Function(FuncDecl::from_node(node, source))
			}
			kind => Self::Other { kind },
		}
	}
}

/// The parts of a function declaration needed to render its signature.
#[derive(Debug, Clone)]
pub struct FuncDecl<'t> {
	/// Doc comment group directly above the declaration.
	pub doc: Vec<Node<'t>>,
	/// Receiver parameter list, present for methods.
	pub receiver: Option<Node<'t>>,
	/// Function or method name.
	pub name: &'t str,
	/// Type parameter list of a generic function.
	pub type_parameters: Option<Node<'t>>,
	/// Parameter list.
	pub parameters: Node<'t>,
	/// Result type or result parameter list.
	pub result: Option<Node<'t>>,
	/// Statement block; absent for bodyless declarations.
	pub body: Option<Node<'t>>,
	node: Node<'t>,
}

impl<'t> FuncDecl<'t> {
	/// Build from a `function_declaration` or `method_declaration` node of a validated tree.
	///
	/// # Panics
	///
	/// Panics when the node lacks a name or parameter list, which an error-free tree never does.
	pub fn from_node(node: Node<'t>, source: &'t str) -> Self {
		let receiver = (node.kind() == "method_declaration").then(|| must_field(node, "receiver"));
		Self {
			doc: leading_comments(node),
			receiver,
			name: text(must_field(node, "name"), source),
			type_parameters: node.child_by_field_name("type_parameters"),
			parameters: must_field(node, "parameters"),
			result: node.child_by_field_name("result"),
			body: node.child_by_field_name("body"),
			node,
		}
	}

	/// The same declaration with its body removed.
	pub fn without_body(self) -> Self {
		Self { body: None, ..self }
	}

	/// Whether the name starts with an upper-case letter.
	pub fn is_exported(&self) -> bool {
		is_exported(self.name)
	}

	/// Whether this declaration has a receiver.
	pub fn is_method(&self) -> bool {
		self.receiver.is_some()
	}

	/// 1-based line the declaration starts on.
	pub fn line(&self) -> usize {
		self.node.start_position().row + 1
	}
}

/// Go's export rule: an identifier is exported when its first character is upper case.
pub fn is_exported(name: &str) -> bool {
	name.chars().next().is_some_and(char::is_uppercase)
}
