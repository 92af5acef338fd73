use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the body of `//` comments that are compiler directives rather than prose.
static DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"^(line |extern |export |[a-z0-9]+:[a-z0-9])").expect("directive pattern is valid")
});

/// Extract the prose of a comment group, following Go's `CommentGroup.Text` rules.
///
/// Comment markers and directives are dropped, trailing whitespace is trimmed, leading and
/// trailing blank lines are removed and interior runs of blank lines collapse to one. Non-empty
/// text always ends with a single newline.
pub fn comment_text<S: AsRef<str>>(comments: &[S]) -> String {
	let mut lines: Vec<&str> = Vec::new();
	for comment in comments {
		let comment = comment.as_ref();
		let body = if let Some(rest) = comment.strip_prefix("//") {
			if DIRECTIVE.is_match(rest) {
				continue;
			}
			rest.strip_prefix(' ').unwrap_or(rest)
		} else if let Some(rest) = comment.strip_prefix("/*") {
			rest.strip_suffix("*/").unwrap_or(rest)
		} else {
			comment
		};
		lines.extend(body.split('\n').map(|line| line.trim_end_matches([' ', '\t', '\n', '\r'])));
	}

	let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
	for line in lines {
		let previous_blank = kept.last().is_some_and(|last| last.is_empty());
		if !line.is_empty() || (!kept.is_empty() && !previous_blank) {
			kept.push(line);
		}
	}
	if kept.last().is_some_and(|last| !last.is_empty()) {
		kept.push("");
	}
	kept.join("\n")
}

/// Make text safe to embed inside a `/* */` block comment.
pub fn escape_block_comment(text: &str) -> String {
	text.replace("*/", "* /")
}
