//! SSML scanner module.
//!
//! Everything here works on string slices of the original input and reports
//! absolute byte offsets in its errors, so callers can point at the exact
//! spot in the document.

/// Attribute list parsing.
pub mod attributes;
/// Entity decoding for text runs.
pub mod entities;
/// Tag boundary and name scanning.
pub mod tag;

pub use attributes::parse_attributes;
pub use entities::{ENTITIES, decode_entities, unknown_entities};
pub use tag::{ScannedTag, TagKind, name_len, scan_tag};
