//! Recursive-descent tree construction.
//!
//! [SSML 1.1 § 3.1.1 speak Root Element](https://www.w3.org/TR/speech-synthesis11/#S3.1.1)
//!
//! The builder works on byte ranges of the original input. For each element
//! it first locates the matching closing tag, then recurses into the content
//! between the two tags. Each recursive call gets its own child list, so the
//! tree is assembled bottom-up with no shared builder state.

use std::collections::HashSet;

use ssml_dom::{Element, Node};

use super::error::{ParseError, ParseErrorKind};
use super::issue::{IssueKind, ParseIssue};
use crate::scanner::{
    ScannedTag, TagKind, decode_entities, parse_attributes, scan_tag, unknown_entities,
};

/// Default limit on element nesting, counting the root as level 1.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Highest nesting limit [`SsmlParser::with_max_depth`] accepts. Larger
/// values are clamped so deep input fails with an error before the
/// recursion can exhaust a thread's stack.
pub const MAX_DEPTH_CEILING: usize = 512;

/// The only element allowed at the top level.
const ROOT_ELEMENT: &str = "speak";

/// A parsed node together with the byte offset where it starts.
type Positioned = (usize, Node);

/// Parser for a single SSML document.
///
/// A parser is consumed by [`run`](Self::run) or
/// [`run_with_issues`](Self::run_with_issues); nothing outlives the call.
#[derive(Debug)]
pub struct SsmlParser<'a> {
    /// The whole document.
    input: &'a str,

    /// Deepest allowed element nesting.
    max_depth: usize,

    /// Whether non-fatal issues are recorded at all.
    collect_issues: bool,

    /// Non-fatal issues encountered during parsing.
    issues: Vec<ParseIssue>,
}

impl<'a> SsmlParser<'a> {
    /// Create a new parser for `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            max_depth: DEFAULT_MAX_DEPTH,
            collect_issues: true,
            issues: Vec::new(),
        }
    }

    /// Limit element nesting to `max_depth` levels (the root is level 1).
    ///
    /// Values above [`MAX_DEPTH_CEILING`] are clamped to it.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = if max_depth > MAX_DEPTH_CEILING {
            MAX_DEPTH_CEILING
        } else {
            max_depth
        };
        self
    }

    /// Run the parser and return the `<speak>` root.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered.
    pub fn run(mut self) -> Result<Node, ParseError> {
        self.collect_issues = false;
        self.parse_document()
    }

    /// Run the parser and return the root along with any non-fatal issues.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered. Issues collected before
    /// the error are discarded.
    pub fn run_with_issues(mut self) -> Result<(Node, Vec<ParseIssue>), ParseError> {
        let root = self.parse_document()?;
        Ok((root, self.issues))
    }

    /// Parse the trimmed input as a sequence of top-level nodes and check it
    /// is exactly one `<speak>` element.
    fn parse_document(&mut self) -> Result<Node, ParseError> {
        let start = self.input.len() - self.input.trim_start().len();
        let end = start + self.input.trim().len();

        let mut top_level = self.parse_children(start, end, None, 0)?;
        if top_level.len() > 1 {
            let offset = top_level[1].0;
            return Err(ParseError::new(
                ParseErrorKind::MultipleRootNodes {
                    count: top_level.len(),
                },
                offset,
                &self.input[offset..end],
            ));
        }

        match top_level.pop() {
            Some((_, Node::Element(root))) if root.name == ROOT_ELEMENT => Ok(Node::Element(root)),
            Some((offset, _)) => Err(ParseError::new(
                ParseErrorKind::MissingRootSpeakTag,
                offset,
                &self.input[offset..end],
            )),
            None => Err(ParseError::new(
                ParseErrorKind::MissingRootSpeakTag,
                start,
                "",
            )),
        }
    }

    /// Parse the content in `pos..end` into child nodes.
    ///
    /// `parent` is the name of the enclosing element, `None` at the top
    /// level. `depth` is the nesting level of that element.
    fn parse_children(
        &mut self,
        mut pos: usize,
        end: usize,
        parent: Option<&'a str>,
        depth: usize,
    ) -> Result<Vec<Positioned>, ParseError> {
        let mut children = Vec::new();
        let span_start = pos;

        while pos < end {
            let rest = &self.input[pos..end];
            if !rest.starts_with('<') {
                let run_end = rest.find('<').map_or(end, |i| pos + i);
                let raw = &self.input[pos..run_end];
                // Whitespace at either edge of the span is indentation, not
                // content. Between two children it separates words.
                let at_edge = pos == span_start || run_end == end;
                if !(at_edge && raw.trim().is_empty()) {
                    self.note_unknown_entities(raw, pos);
                    children.push((pos, Node::Text(decode_entities(raw))));
                }
                pos = run_end;
                continue;
            }

            let tag = self.scan_tag_within(pos, end)?;
            match tag.kind {
                TagKind::Close => return Err(self.stray_closing_tag(&tag, parent)),
                TagKind::SelfClosing => {
                    self.check_depth(&tag, depth + 1)?;
                    let element = self.open_element(&tag)?;
                    children.push((pos, Node::Element(element)));
                    pos = tag.end;
                }
                TagKind::Open => {
                    self.check_depth(&tag, depth + 1)?;
                    let mut element = self.open_element(&tag)?;
                    let (close_start, close_end) = self.find_matching_close(&tag, end)?;
                    element.children = self
                        .parse_children(tag.end, close_start, Some(tag.name), depth + 1)?
                        .into_iter()
                        .map(|(_, node)| node)
                        .collect();
                    children.push((pos, Node::Element(element)));
                    pos = close_end;
                }
            }
        }

        Ok(children)
    }

    /// Scan the tag at `pos`, requiring its `>` to lie before `end`.
    fn scan_tag_within(&self, pos: usize, end: usize) -> Result<ScannedTag<'a>, ParseError> {
        let tag = scan_tag(self.input, pos)?;
        if tag.end > end {
            return Err(ParseError::new(
                ParseErrorKind::UnterminatedTag,
                pos,
                &self.input[pos..end],
            ));
        }
        Ok(tag)
    }

    /// Find the closing tag that matches `open`, searching up to `end`.
    ///
    /// Only tags with the same name are counted: a nested opening tag of that
    /// name raises the depth, a closing tag lowers it, and self-closing tags
    /// leave it alone. The match is the closing tag that brings the depth back
    /// to zero. Returns the byte range of that closing tag.
    fn find_matching_close(
        &self,
        open: &ScannedTag<'a>,
        end: usize,
    ) -> Result<(usize, usize), ParseError> {
        let mut depth = 1usize;
        let mut pos = open.end;

        while let Some(found) = self.input[pos..end].find('<') {
            let tag = self.scan_tag_within(pos + found, end)?;
            if tag.name == open.name {
                match tag.kind {
                    TagKind::Open => depth += 1,
                    TagKind::Close => {
                        depth -= 1;
                        if depth == 0 {
                            return Ok((tag.start, tag.end));
                        }
                    }
                    TagKind::SelfClosing => {}
                }
            }
            pos = tag.end;
        }

        Err(ParseError::new(
            ParseErrorKind::MissingClosingTag {
                name: open.name.to_string(),
            },
            open.start,
            &self.input[open.start..open.end],
        ))
    }

    /// Build the error for a closing tag found where a child was expected.
    fn stray_closing_tag(&self, tag: &ScannedTag<'a>, parent: Option<&str>) -> ParseError {
        let kind = match parent {
            Some(open) if open != tag.name => ParseErrorKind::MismatchedTag {
                expected: open.to_string(),
                found: tag.name.to_string(),
            },
            _ => ParseErrorKind::UnexpectedClosingTag {
                name: tag.name.to_string(),
            },
        };
        ParseError::new(kind, tag.start, &self.input[tag.start..tag.end])
    }

    fn check_depth(&self, tag: &ScannedTag<'a>, depth: usize) -> Result<(), ParseError> {
        if depth > self.max_depth {
            return Err(ParseError::new(
                ParseErrorKind::NestingTooDeep {
                    limit: self.max_depth,
                },
                tag.start,
                &self.input[tag.start..tag.end],
            ));
        }
        Ok(())
    }

    /// Create the element for an opening or self-closing tag, without children.
    fn open_element(&mut self, tag: &ScannedTag<'a>) -> Result<Element, ParseError> {
        let attributes = parse_attributes(tag.attributes, tag.attributes_offset)?;

        if self.collect_issues {
            let mut seen = HashSet::new();
            for attr in &attributes {
                if !seen.insert(attr.name.as_str()) {
                    self.issues.push(ParseIssue {
                        kind: IssueKind::DuplicateAttribute,
                        offset: tag.start,
                        message: format!("<{}> repeats attribute '{}'", tag.name, attr.name),
                    });
                }
            }
        }

        Ok(Element {
            name: tag.name.to_string(),
            attributes,
            children: Vec::new(),
        })
    }

    fn note_unknown_entities(&mut self, raw: &str, pos: usize) {
        if !self.collect_issues {
            return;
        }
        for (offset, entity) in unknown_entities(raw) {
            self.issues.push(ParseIssue {
                kind: IssueKind::UnknownEntity,
                offset: pos + offset,
                message: format!("'{entity}' is not decoded and is kept as text"),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOISY: &str = r#"<speak a="1" a="2">caf&eacute;</speak>"#;

    #[test]
    fn test_run_skips_issue_collection() {
        let mut parser = SsmlParser::new(NOISY);
        parser.collect_issues = false;
        assert!(parser.parse_document().is_ok());
        assert!(parser.issues.is_empty());
    }

    #[test]
    fn test_issue_collection_is_on_by_default() {
        let mut parser = SsmlParser::new(NOISY);
        assert!(parser.parse_document().is_ok());
        assert_eq!(parser.issues.len(), 2);
    }

    #[test]
    fn test_max_depth_is_clamped() {
        let parser = SsmlParser::new("").with_max_depth(usize::MAX);
        assert_eq!(parser.max_depth, MAX_DEPTH_CEILING);
        let parser = SsmlParser::new("").with_max_depth(3);
        assert_eq!(parser.max_depth, 3);
    }
}
