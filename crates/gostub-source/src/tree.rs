use tree_sitter::{Node, Parser, Tree};
use tracing::debug;

use crate::decl::Decl;
use crate::diagnostics::first_syntax_error;
use crate::error::{Result, SourceError};
use crate::nodes::{COMMENT, leading_comments, named_children, text};
use crate::unit::SourceUnit;

/// A validated syntax tree together with the source unit it was parsed from.
///
/// Construction through [`parse`] guarantees the tree contains no error nodes and starts
/// with a package clause, so accessors can rely on the grammar's required fields.
pub struct SyntaxTree {
	unit: SourceUnit,
	tree: Tree,
}

/// Parse a Go source unit, rejecting any input that is not a well-formed compilation unit.
pub fn parse(unit: SourceUnit) -> Result<SyntaxTree> {
	let mut parser = Parser::new();
	parser.set_language(&tree_sitter_go::language())?;

	let tree = parser
		.parse(unit.text(), None)
		.ok_or_else(|| SourceError::Unparsed(unit.name().to_string()))?;

	if let Some(err) = first_syntax_error(&tree, &unit) {
		debug!(file = unit.name(), %err, "rejecting malformed source");
		return Err(err.into());
	}

	debug!(
		file = unit.name(),
		top_level = tree.root_node().named_child_count(),
		"parsed source"
	);
	Ok(SyntaxTree { unit, tree })
}

impl SyntaxTree {
	/// The source unit backing this tree.
	pub fn unit(&self) -> &SourceUnit {
		&self.unit
	}

	/// Full source text.
	pub fn source(&self) -> &str {
		self.unit.text()
	}

	/// Root `source_file` node.
	pub fn root(&self) -> Node<'_> {
		self.tree.root_node()
	}

	/// Source text covered by `node`.
	pub fn text(&self, node: Node<'_>) -> &str {
		text(node, self.source())
	}

	fn package_clause(&self) -> Node<'_> {
		let root = self.root();
		let mut cursor = root.walk();
		let clause = root
			.named_children(&mut cursor)
			.find(|child| child.kind() == "package_clause");
		clause.expect("validated tree always has a package clause")
	}

	/// Declared package name.
	pub fn package_name(&self) -> &str {
		let clause = self.package_clause();
		let name = named_children(clause)
			.into_iter()
			.find(|child| child.kind() == "package_identifier")
			.expect("package clause always names a package");
		self.text(name)
	}

	/// Raw text of each comment in the package's doc comment group, markers included.
	pub fn package_doc(&self) -> Vec<&str> {
		leading_comments(self.package_clause())
			.into_iter()
			.map(|comment| self.text(comment))
			.collect()
	}

	/// Top-level declarations after the package clause, in source order.
	pub fn declarations(&self) -> Vec<Decl<'_>> {
		let root = self.root();
		let mut cursor = root.walk();
		root.named_children(&mut cursor)
			.filter(|child| !matches!(child.kind(), COMMENT | "package_clause"))
			.map(|child| Decl::from_node(child, self.source()))
			.collect()
	}
}
