//! Attribute list parsing.
//!
//! An attribute list is zero or more `name="value"` pairs separated by
//! whitespace. Whitespace is allowed around the `=`. Values must be in double
//! quotes and may contain anything except `"`. Nothing else may appear: a
//! bare name, an unquoted or single-quoted value, or a value with no name is
//! rejected as a whole.

use ssml_dom::Attribute;

use super::tag::name_len;
use crate::parser::{ParseError, ParseErrorKind};

/// Parse the attribute text of a tag.
///
/// `offset` is the byte offset of `text` in the document and is only used to
/// position errors.
///
/// # Errors
///
/// Returns [`ParseErrorKind::InvalidAttributeSyntax`] pointing at the first
/// attribute that does not match, with the unparsed remainder as fragment.
pub fn parse_attributes(text: &str, offset: usize) -> Result<Vec<Attribute>, ParseError> {
    let mut attributes = Vec::new();
    let mut rest = text;

    loop {
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            return Ok(attributes);
        }
        let invalid = || {
            ParseError::new(
                ParseErrorKind::InvalidAttributeSyntax,
                offset + text.len() - trimmed.len(),
                trimmed.trim_end(),
            )
        };
        // Pairs must be separated: `a="1"b="2"` is one malformed attribute.
        if !attributes.is_empty() && trimmed.len() == rest.len() {
            return Err(invalid());
        }

        let len = name_len(trimmed);
        if len == 0 {
            return Err(invalid());
        }
        let Some(after_equals) = trimmed[len..].trim_start().strip_prefix('=') else {
            return Err(invalid());
        };
        let Some(quoted) = after_equals.trim_start().strip_prefix('"') else {
            return Err(invalid());
        };
        let Some(close_quote) = quoted.find('"') else {
            return Err(invalid());
        };

        attributes.push(Attribute::new(&trimmed[..len], &quoted[..close_quote]));
        rest = &quoted[close_quote + 1..];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names_and_values(text: &str) -> Vec<(String, String)> {
        parse_attributes(text, 0)
            .unwrap()
            .into_iter()
            .map(|attr| (attr.name, attr.value))
            .collect()
    }

    #[test]
    fn test_empty_and_whitespace_lists() {
        assert!(names_and_values("").is_empty());
        assert!(names_and_values("   \n\t").is_empty());
    }

    #[test]
    fn test_value_whitespace_is_preserved() {
        assert_eq!(
            names_and_values(r#" foo=" bar " "#),
            [("foo".to_string(), " bar ".to_string())]
        );
    }

    #[test]
    fn test_missing_separator_is_rejected() {
        let err = parse_attributes(r#" a="1"b="2""#, 10).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidAttributeSyntax);
        assert_eq!(err.offset, 16);
        assert_eq!(err.fragment, r#"b="2""#);
    }
}
