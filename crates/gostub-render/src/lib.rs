//! Rendering logic that turns a parsed Go file into a binary-only package stub.
//!
//! The output keeps the package header and every selected function signature, with bodies
//! removed, and is itself a valid Go compilation unit.

/// Main renderer configuration and public API.
pub mod core;
/// Mutable rendering state for a single pass.
pub mod state;
/// Syntax utilities for rendering comments, signatures and types.
pub mod syntax;

// Re-export public API
pub use self::core::{BINARY_ONLY_DIRECTIVE, Renderer};

pub use syntax::{
	comment_text, render_func_decl, render_package_header, render_parameter_list,
	render_signature, render_type,
};
