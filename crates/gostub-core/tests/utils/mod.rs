//! Shared helpers for integration tests.
#![allow(dead_code)]

use gostub_core::{Gostub, GostubError};
use pretty_assertions::assert_eq;

/// Strip surrounding blank lines and the common indentation of an indented test literal.
pub fn dedent(text: &str) -> String {
	let lines: Vec<&str> = text
		.lines()
		.skip_while(|line| line.trim().is_empty())
		.collect();
	let end = lines
		.iter()
		.rposition(|line| !line.trim().is_empty())
		.map_or(0, |idx| idx + 1);
	let lines = &lines[..end];

	let indent = lines
		.iter()
		.filter(|line| !line.trim().is_empty())
		.map(|line| line.len() - line.trim_start().len())
		.min()
		.unwrap_or(0);

	lines
		.iter()
		.map(|line| if line.len() >= indent { &line[indent..] } else { line.trim_start() })
		.collect::<Vec<_>>()
		.join("\n")
}

/// Extract `input` and compare against `output`, ignoring indentation and trailing blank lines.
pub fn rt(gostub: &Gostub, input: &str, output: &str) {
	let rendered = gostub
		.extract_str("test.go", &dedent(input))
		.unwrap_or_else(|err| panic!("extraction failed: {err}"));
	assert_eq!(rendered.trim_end(), dedent(output));
}

/// Extract `input`, then extract the stub again and require an identical document.
pub fn idemp(input: &str) {
	let gostub = Gostub::new().with_exported_only(false);
	let first = gostub
		.extract_str("test.go", &dedent(input))
		.unwrap_or_else(|err| panic!("extraction failed: {err}"));
	let second = gostub
		.extract_str("stub.go", &first)
		.unwrap_or_else(|err| panic!("stub does not parse: {err}\n{first}"));
	assert_eq!(first, second);
}

/// Require `input` to be rejected as malformed Go.
pub fn rejects(input: &str) {
	match Gostub::new().extract_str("test.go", &dedent(input)) {
		Err(err @ GostubError::Source(_)) if err.is_syntax() => {}
		Err(other) => panic!("expected a syntax error, got {other}"),
		Ok(stub) => panic!("expected a syntax error, got stub:\n{stub}"),
	}
}

/// Generate a module of extraction tests.
///
/// Case kinds:
/// - `rt { name: { input: .., output: .. } }` extracts with default settings.
/// - `rt_custom { name: { gostub: .., input: .., output: .. } }` uses a configured extractor.
/// - `idemp { name: .. }` checks that re-extracting a stub is a no-op.
/// - `err { name: .. }` checks that the input is rejected.
macro_rules! gen_tests {
	($prefix:ident, { $($kind:ident { $($case:tt)* })* }) => {
		mod $prefix {
			$( $crate::utils::gen_tests!(@case $kind { $($case)* }); )*
		}
	};
	(@case rt { $name:ident: { input: $input:expr, output: $output:expr $(,)? } }) => {
		#[test]
		fn $name() {
			$crate::utils::rt(&gostub_core::Gostub::default(), $input, $output);
		}
	};
	(@case rt_custom { $name:ident: { gostub: $gostub:expr, input: $input:expr, output: $output:expr $(,)? } }) => {
		#[test]
		fn $name() {
			$crate::utils::rt(&$gostub, $input, $output);
		}
	};
	(@case idemp { $name:ident: $input:expr }) => {
		#[test]
		fn $name() {
			$crate::utils::idemp($input);
		}
	};
	(@case err { $name:ident: $input:expr }) => {
		#[test]
		fn $name() {
			$crate::utils::rejects($input);
		}
	};
}

pub(crate) use gen_tests;
