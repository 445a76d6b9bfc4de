//! Tag boundary scanning.
//!
//! [SSML 1.1 § 2.1 Document Form](https://www.w3.org/TR/speech-synthesis11/#S2.1)
//!
//! A tag runs from a `<` to the first following `>`. Whitespace directly
//! inside the brackets is ignored, so `< speak >` and `</  p >` are the same
//! tags as `<speak>` and `</p>`.

use crate::parser::{ParseError, ParseErrorKind};

/// Which of the three tag forms was scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<name ...>`
    Open,
    /// `</name>`
    Close,
    /// `<name .../>`
    SelfClosing,
}

/// A scanned tag, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedTag<'a> {
    /// Open, close or self-closing.
    pub kind: TagKind,
    /// The tag name with surrounding whitespace removed.
    pub name: &'a str,
    /// Raw text between the name and the `>` (or `/>`). Not yet validated.
    pub attributes: &'a str,
    /// Byte offset of `attributes` in the input.
    pub attributes_offset: usize,
    /// Byte offset of the `<`.
    pub start: usize,
    /// Byte offset just past the `>`.
    pub end: usize,
}

/// Byte length of the element or attribute name at the start of `s`.
///
/// A name starts with a letter or `_`, continues with letters, digits, `_`,
/// `-` or `.`, and may contain one `:` separating a prefix from the local
/// part. Returns 0 when `s` does not start with a name.
#[must_use]
pub fn name_len(s: &str) -> usize {
    let mut len = 0;
    let mut seen_colon = false;
    for (i, c) in s.char_indices() {
        let accepted = if i == 0 {
            c.is_alphabetic() || c == '_'
        } else if c == ':' {
            !std::mem::replace(&mut seen_colon, true)
        } else {
            c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
        };
        if !accepted {
            break;
        }
        len = i + c.len_utf8();
    }
    // A prefix needs a local part after it.
    if s[..len].ends_with(':') {
        len -= 1;
    }
    len
}

/// Scan the tag whose `<` is at byte `start` of `input`.
///
/// Only closing tags have their remainder checked here: anything after the
/// name of a closing tag is an error. Attribute text of opening tags is left
/// for [`parse_attributes`](super::parse_attributes), since the matching
/// close search scans tags it never builds.
///
/// # Errors
///
/// - [`ParseErrorKind::UnterminatedTag`] if no `>` follows
/// - [`ParseErrorKind::UnnamedTag`] if the tag has no name (`<>`, `< />`, `</>`)
/// - [`ParseErrorKind::InvalidAttributeSyntax`] for text after a closing tag's name
pub fn scan_tag(input: &str, start: usize) -> Result<ScannedTag<'_>, ParseError> {
    debug_assert_eq!(input.as_bytes().get(start), Some(&b'<'));

    let Some(close_bracket) = input[start..].find('>') else {
        return Err(ParseError::new(
            ParseErrorKind::UnterminatedTag,
            start,
            &input[start..],
        ));
    };
    let end = start + close_bracket + 1;
    let inner_offset = start + 1;
    let inner = &input[inner_offset..end - 1];

    let (kind, body, body_offset) = if let Some(rest) = inner.trim_start().strip_prefix('/') {
        (TagKind::Close, rest, inner_offset + inner.len() - rest.len())
    } else if let Some(rest) = inner.trim_end().strip_suffix('/') {
        (TagKind::SelfClosing, rest, inner_offset)
    } else {
        (TagKind::Open, inner, inner_offset)
    };

    let trimmed = body.trim_start();
    let name_offset = body_offset + body.len() - trimmed.len();
    let len = name_len(trimmed);
    if len == 0 {
        return Err(ParseError::new(
            ParseErrorKind::UnnamedTag,
            start,
            &input[start..end],
        ));
    }

    let attributes = &trimmed[len..];
    let attributes_offset = name_offset + len;
    if kind == TagKind::Close {
        let leftover = attributes.trim_start();
        if !leftover.trim_end().is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::InvalidAttributeSyntax,
                attributes_offset + attributes.len() - leftover.len(),
                leftover.trim_end(),
            ));
        }
    }

    Ok(ScannedTag {
        kind,
        name: &trimmed[..len],
        attributes,
        attributes_offset,
        start,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_len_plain_and_prefixed() {
        assert_eq!(name_len("speak foo"), 5);
        assert_eq!(name_len("baz:foo=\"bar\""), 7);
        assert_eq!(name_len("x-y.z_1>"), 7);
    }

    #[test]
    fn test_name_len_rejects_bad_starts() {
        assert_eq!(name_len(""), 0);
        assert_eq!(name_len("=\"bar\""), 0);
        assert_eq!(name_len("1abc"), 0);
        assert_eq!(name_len(" speak"), 0);
    }

    #[test]
    fn test_name_len_single_colon_only() {
        assert_eq!(name_len("a:b:c"), 3);
        assert_eq!(name_len("a:"), 1);
    }
}
