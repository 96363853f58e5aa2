//! Array extraction for arrsort.
//!
//! The input is treated as flat text, not structured data. The array body is
//! whatever sits strictly between the first `[` and the first `]`. It is split
//! on commas, and every field is trimmed and parsed as a signed 32-bit integer.
//! Any failure aborts the whole extraction; there is no partial result.

use tracing::{debug, trace};

use crate::error::ExtractError;

/// Extract the integer array from `raw`.
///
/// This is the composition of [`array_body`], [`split_tokens`] and
/// [`parse_tokens`]. The returned vector has one element per token, in input
/// order.
///
/// # Errors
/// - [`ExtractError::MissingBracket`] when no `[ ... ]` pair can be located.
/// - [`ExtractError::NumberFormat`] for the first field that is not an integer,
///   including the empty field produced by `[]`.
pub fn extract(raw: &str) -> Result<Vec<i32>, ExtractError> {
    let body = array_body(raw)?;
    let tokens = split_tokens(body);
    debug!(body, tokens = tokens.len(), "located array body");
    parse_tokens(&tokens)
}

/// Return the slice strictly between the first `[` and the first `]`.
pub fn array_body(raw: &str) -> Result<&str, ExtractError> {
    let open = raw.find('[').ok_or(ExtractError::MissingBracket)?;
    let close = raw.find(']').ok_or(ExtractError::MissingBracket)?;
    if close < open {
        return Err(ExtractError::MissingBracket);
    }
    Ok(&raw[open + 1..close])
}

/// Split an array body on commas.
///
/// A body without commas is a single token, so `""` yields one empty token.
/// Otherwise trailing empty fields are dropped (`"1,2,"` gives `["1", "2"]`,
/// `","` gives nothing); inner empty fields are kept.
pub fn split_tokens(body: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = body.split(',').collect();
    if tokens.len() > 1 {
        while tokens.last() == Some(&"") {
            tokens.pop();
        }
    }
    tokens
}

/// Trim `token` and parse it as a base-10 `i32`.
///
/// Only characters up to and including U+0020 (space and ASCII controls) are
/// trimmed; other Unicode whitespace is part of the token.
pub fn parse_token(token: &str) -> Result<i32, ExtractError> {
    token
        .trim_matches(|c: char| c <= ' ')
        .parse::<i32>()
        .map_err(|source| ExtractError::NumberFormat {
            token: token.to_string(),
            source,
        })
}

/// Parse every token in order, stopping at the first failure.
pub fn parse_tokens(tokens: &[&str]) -> Result<Vec<i32>, ExtractError> {
    tokens
        .iter()
        .map(|t| parse_token(t).inspect(|value| trace!(token = *t, value, "parsed token")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_preserves_order() {
        let out = extract(r#"{"a": [25, 50, 75, 100]}"#).unwrap();
        assert_eq!(out, vec![25, 50, 75, 100]);

        let out = extract(r#"{"a": [3, 1, 2]}"#).unwrap();
        assert_eq!(out, vec![3, 1, 2]);
    }

    #[test]
    fn test_extract_negative_and_whitespace() {
        assert_eq!(extract(r#"{"a": [-1, 2, -3]}"#).unwrap(), vec![-1, 2, -3]);
        assert_eq!(extract(r#"{"a": [ 1 ,2,  3 ]}"#).unwrap(), vec![1, 2, 3]);
        assert_eq!(extract("[\t7\n]").unwrap(), vec![7]);
    }

    #[test]
    fn test_array_body_first_pair_only() {
        assert_eq!(array_body(r#"{"a": [1, 2], "b": [3]}"#).unwrap(), "1, 2");
        assert_eq!(array_body("[]").unwrap(), "");
        assert_eq!(array_body("[[1], 2]").unwrap(), "[1");
    }

    #[test]
    fn test_missing_bracket() {
        assert_eq!(array_body("hello"), Err(ExtractError::MissingBracket));
        assert_eq!(array_body("{}"), Err(ExtractError::MissingBracket));
        assert_eq!(array_body("[1, 2"), Err(ExtractError::MissingBracket));
        assert_eq!(array_body("1, 2]"), Err(ExtractError::MissingBracket));
        // closing bracket before opening bracket
        assert_eq!(array_body("] [1]"), Err(ExtractError::MissingBracket));
    }

    #[test]
    fn test_split_drops_trailing_empty_fields() {
        assert_eq!(split_tokens(""), vec![""]);
        assert_eq!(split_tokens("1,,2,"), vec!["1", "", "2"]);
        assert_eq!(split_tokens("1,2,,"), vec!["1", "2"]);
        assert_eq!(split_tokens(" , "), vec![" ", " "]);
        assert!(split_tokens(",").is_empty());
        assert!(split_tokens(",,,").is_empty());
    }

    #[test]
    fn test_trailing_commas_are_ignored() {
        assert_eq!(extract(r#"{"a": [1, 2,]}"#).unwrap(), vec![1, 2]);
        assert_eq!(extract("[1,2,,]").unwrap(), vec![1, 2]);
        assert_eq!(extract(r#"{"a": [,]}"#).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_empty_array_is_number_format_error() {
        match extract(r#"{"a": []}"#) {
            Err(ExtractError::NumberFormat { token, .. }) => assert_eq!(token, ""),
            other => panic!("expected NumberFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_tokens_fail_fast() {
        for input in ["[1,,2]", "[,1]", "[1, ]", "[1.5]", "[abc]", "[2147483648]", "[ ]"] {
            assert!(
                matches!(extract(input), Err(ExtractError::NumberFormat { .. })),
                "{} should not parse",
                input
            );
        }
    }

    #[test]
    fn test_parse_token_bounds_and_sign() {
        assert_eq!(parse_token(" 2147483647 ").unwrap(), i32::MAX);
        assert_eq!(parse_token("-2147483648").unwrap(), i32::MIN);
        assert_eq!(parse_token("+5").unwrap(), 5);
    }

    #[test]
    fn test_trim_only_strips_ascii_space_and_controls() {
        assert_eq!(extract("[\u{0001}5\u{001f}]").unwrap(), vec![5]);
        assert_eq!(parse_token("\r\n 9\u{000b}").unwrap(), 9);
        // no-break space is not trimmed
        assert!(matches!(
            extract("[\u{00A0}5]"),
            Err(ExtractError::NumberFormat { .. })
        ));
        assert!(parse_token("5\u{2003}").is_err());
    }
}
