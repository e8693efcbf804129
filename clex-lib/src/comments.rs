use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    // A block comment with no closing `*/` runs to the end of the text.
    static ref COMMENT_REGEX: Regex = Regex::new(r"//.*|/\*[\s\S]*?(?:\*/|\z)").unwrap();
}

/// Removes every `//` line comment and `/* */` block comment from the whole
/// text in one pass. Must run before line splitting since block comments
/// span lines.
///
/// Comment markers inside string literals are not special: `"a//b"` loses
/// everything from `//` to the end of its line.
pub fn strip_comments(source: &str) -> Cow<'_, str> {
    COMMENT_REGEX.replace_all(source, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comment() {
        assert_eq!(strip_comments("// comment\nint y;"), "\nint y;");
        assert_eq!(strip_comments("x = 1; // trailing"), "x = 1; ");
    }

    #[test]
    fn test_block_comment_spanning_lines() {
        assert_eq!(strip_comments("/* a\nb */ int z;"), " int z;");
    }

    #[test]
    fn test_block_comment_is_not_greedy() {
        assert_eq!(strip_comments("a /* x */ b /* y */ c"), "a  b  c");
    }

    #[test]
    fn test_unterminated_block_comment_runs_to_end() {
        assert_eq!(strip_comments("int x; /* open\nint y;\n"), "int x; ");
    }

    #[test]
    fn test_line_comment_wins_over_later_block_opener() {
        assert_eq!(strip_comments("a // b /* c\nd */ e"), "a \nd */ e");
    }

    #[test]
    fn test_no_comments_borrows() {
        let source = "int x = 10;";
        assert!(matches!(strip_comments(source), Cow::Borrowed(_)));
    }

    #[test]
    fn test_markers_inside_strings_are_stripped() {
        assert_eq!(strip_comments("s = \"http://x\";"), "s = \"http:");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "// comment\nint y;",
            "/* a\nb */ int z;",
            "a/*x*//y\nz",
            "/*a*/*/ b",
            "/ /* x */ / y",
            "int x; /* open",
        ];
        for input in inputs {
            let once = strip_comments(input).into_owned();
            let twice = strip_comments(&once).into_owned();
            assert_eq!(once, twice, "input: {input:?}");
        }
    }
}
