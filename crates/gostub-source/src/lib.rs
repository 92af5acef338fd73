//! Loading and parsing of Go source units for gostub.
//!
//! Parsing is delegated to tree-sitter with the Go grammar. This crate turns the raw tree into
//! something the renderer can trust: malformed input is rejected up front with a
//! location-annotated [`SyntaxError`], and top-level declarations are exposed as a typed
//! [`Decl`] union instead of bare node kinds.

/// Declaration model over validated trees.
pub mod decl;
/// Syntax error detection.
mod diagnostics;
/// Error types for loading and parsing.
pub mod error;
/// Node helpers shared with the renderer.
pub mod nodes;
/// Parsing and the validated tree wrapper.
pub mod tree;
/// Source unit loading.
pub mod unit;

pub use crate::decl::{Decl, FuncDecl, is_exported};
pub use crate::error::{Result, SourceError, SyntaxError};
pub use crate::tree::{SyntaxTree, parse};
pub use crate::unit::{STDIN_NAME, SourceUnit};
