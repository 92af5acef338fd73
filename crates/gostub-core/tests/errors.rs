//! Integration tests ensuring malformed input is rejected without output.
mod utils;
use utils::*;

gen_tests! {
	malformed, {
		err {
			unbalanced_braces: r#"
                package demo

                func Add(a, b int) int {
                    return a + b
            "#
		}
		err {
			missing_package: r#"
                func Add(a, b int) int { return a + b }
            "#
		}
		err {
			unclosed_parameters: r#"
                package demo

                func Add(a, b int int { return a + b }
            "#
		}
		err {
			statement_at_top_level: r#"
                package demo

                x := 1
            "#
		}
		err {
			empty_file: ""
		}
	}
}
