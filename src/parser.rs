//! Source parser for the fixed assignment line.
//!
//! Only the first line of the program carries meaning. Its accepted shape is:
//!
//! ```text
//! line0    := ws* "basket =" rest
//! rest     := any* "=" ws* literal ws*      (split on the first '=')
//! literal  := JSON array of strings, after every ' is rewritten to "
//! ```
//!
//! Lines 1 and 2 are assumed to be `for <var> in basket:` and an indented
//! `print(<var>)`. They are never inspected here; the engine only uses their
//! line numbers for highlighting.

use crate::engine::Environment;
use crate::error::ParseError;

/// Prefix line 0 must start with once trimmed
pub const ASSIGNMENT_PREFIX: &str = "basket =";

/// Name bound to the parsed list in the source program
pub const ITERABLE_NAME: &str = "basket";

/// Name of the loop variable in the source program
pub const LOOP_VARIABLE_NAME: &str = "hand";

/// Parse the program's lines into a fresh environment.
///
/// Side-effect free: the caller decides what to do with the result.
pub fn parse<S: AsRef<str>>(source_lines: &[S]) -> Result<Environment, ParseError> {
    let first = source_lines
        .first()
        .map(|line| line.as_ref().trim())
        .unwrap_or_default();

    if !first.starts_with(ASSIGNMENT_PREFIX) {
        return Err(ParseError::SyntaxMismatch {
            line: first.to_string(),
        });
    }

    // The prefix contains '=', so split_once always succeeds here
    let rhs = first
        .split_once('=')
        .map(|(_, rhs)| rhs.trim())
        .unwrap_or_default();

    let iterable = decode_literal(rhs)?;
    Ok(Environment::new(iterable))
}

/// Split source text into lines and parse it
pub fn parse_source(source: &str) -> Result<Environment, ParseError> {
    let lines: Vec<&str> = source.split('\n').collect();
    parse(&lines)
}

/// Decode a list literal into its ordered string elements
fn decode_literal(literal: &str) -> Result<Vec<String>, ParseError> {
    let normalized = literal.replace('\'', "\"");
    serde_json::from_str::<Vec<String>>(&normalized).map_err(|e| {
        ParseError::LiteralDecodeError {
            literal: literal.to_string(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_double_quoted_list() {
        let env = parse(&[r#"basket = ["apple", "banana"]"#]).unwrap();
        assert_eq!(env.iterable(), ["apple", "banana"]);
        assert!(env.current().is_none());
    }

    #[test]
    fn test_parse_single_quotes_are_normalized() {
        let env = parse(&["  basket = ['사과', '바나나', '체리']  "]).unwrap();
        assert_eq!(env.iterable(), ["사과", "바나나", "체리"]);
    }

    #[test]
    fn test_parse_empty_list() {
        let env = parse(&["basket = []"]).unwrap();
        assert!(env.iterable().is_empty());
    }

    #[test]
    fn test_wrong_variable_name_is_syntax_mismatch() {
        let err = parse(&[r#"fruits = ["apple"]"#]).unwrap_err();
        assert!(matches!(err, ParseError::SyntaxMismatch { .. }));
    }

    #[test]
    fn test_missing_space_before_equals_is_syntax_mismatch() {
        let err = parse(&[r#"basket= ["apple"]"#]).unwrap_err();
        assert!(matches!(err, ParseError::SyntaxMismatch { .. }));
    }

    #[test]
    fn test_no_lines_is_syntax_mismatch() {
        let lines: [&str; 0] = [];
        let err = parse(&lines).unwrap_err();
        assert_eq!(
            err,
            ParseError::SyntaxMismatch {
                line: String::new()
            }
        );
    }

    #[test]
    fn test_unquoted_elements_fail_to_decode() {
        let err = parse(&["basket = [apple]"]).unwrap_err();
        assert!(matches!(err, ParseError::LiteralDecodeError { .. }));
    }

    #[test]
    fn test_non_string_elements_fail_to_decode() {
        let err = parse(&["basket = [1, 2, 3]"]).unwrap_err();
        assert!(matches!(err, ParseError::LiteralDecodeError { .. }));
    }

    #[test]
    fn test_trailing_tokens_fail_to_decode() {
        let err = parse(&[r#"basket = ["apple"] + ["pear"]"#]).unwrap_err();
        assert!(matches!(err, ParseError::LiteralDecodeError { .. }));
    }

    #[test]
    fn test_non_array_fails_to_decode() {
        let err = parse(&[r#"basket = "apple""#]).unwrap_err();
        assert!(matches!(err, ParseError::LiteralDecodeError { .. }));
    }

    #[test]
    fn test_only_first_line_is_read() {
        let env = parse_source("basket = ['a']\nthis is not python\n  at all").unwrap();
        assert_eq!(env.iterable(), ["a"]);
    }
}
