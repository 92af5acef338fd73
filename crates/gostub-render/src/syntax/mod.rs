/// Comment group text extraction.
pub mod docs;
/// Function signature rendering.
pub mod function;
/// Type parameter and type argument lists.
pub mod generics;
/// Package header and declaration rendering.
pub mod item;
/// Type expression rendering.
pub mod types;

pub use docs::{comment_text, escape_block_comment};
pub use function::{render_parameter_list, render_signature, render_signature_tail};
pub use generics::{render_type_arguments, render_type_parameters};
pub use item::{render_func_decl, render_func_docs, render_package_header};
pub use types::render_type;
