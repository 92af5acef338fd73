use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;

use crate::*;

const DEMO: &str = "// Demo package.\npackage demo\n\nfunc Add(a, b int) int { return a + b }\n";

fn config_for(input: PathBuf, output: PathBuf) -> Config {
	Config {
		input: Some(input),
		output: Some(output),
		..Config::default()
	}
}

#[test]
fn run_writes_stub_file() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("demo.go");
	let output = dir.path().join("demo_stub.go");
	fs::write(&input, DEMO).unwrap();

	run(&config_for(input, output.clone())).unwrap();

	assert_eq!(
		fs::read_to_string(&output).unwrap(),
		"//go:binary-only-package\n\n/*\nDemo package.\n*/\npackage demo\n\nfunc Add(a, b int) int\n\n"
	);
}

#[test]
fn syntax_error_creates_no_output() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("broken.go");
	let output = dir.path().join("broken_stub.go");
	fs::write(&input, "package demo\n\nfunc Add(a, b int) int {\n\treturn a + b\n").unwrap();

	let err = run(&config_for(input, output.clone())).unwrap_err();

	assert!(err.is_syntax(), "unexpected error: {err}");
	assert!(err.to_string().contains("broken.go:"));
	assert!(!output.exists());
	assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn syntax_error_leaves_existing_output_untouched() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("broken.go");
	let output = dir.path().join("stub.go");
	fs::write(&input, "package demo\n\nfunc (").unwrap();
	fs::write(&output, "previous stub\n").unwrap();

	assert!(run(&config_for(input, output.clone())).is_err());
	assert_eq!(fs::read_to_string(&output).unwrap(), "previous stub\n");
}

#[test]
fn missing_input_is_reported() {
	let dir = tempfile::tempdir().unwrap();
	let output = dir.path().join("stub.go");
	let err = run(&config_for(dir.path().join("nope.go"), output.clone())).unwrap_err();

	assert!(matches!(err, GostubError::Source(SourceError::Read { .. })));
	assert!(err.to_string().starts_with("could not open input file"));
	assert!(!output.exists());
}

#[test]
fn filters_follow_config() {
	let config = Config {
		exported_only: false,
		include_directive: false,
		..Config::default()
	};
	let output = Gostub::from_config(&config)
		.extract_str("demo.go", "package demo\n\nfunc helper() {}\n")
		.unwrap();
	assert_eq!(output, "/*\n*/\npackage demo\n\nfunc helper()\n\n");
}

#[test]
fn extract_reports_syntax_location() {
	let err = Gostub::new()
		.extract_str("demo.go", "package demo\n\nfunc F( {\n")
		.unwrap_err();
	match err {
		GostubError::Source(SourceError::Syntax(syntax)) => {
			assert_eq!(syntax.file, "demo.go");
			assert_eq!(syntax.line, 3);
		}
		other => panic!("expected a syntax error, got {other}"),
	}
}
