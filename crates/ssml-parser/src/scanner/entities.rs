//! Entity decoding for text content.
//!
//! Only three entities are recognized. Any other `&name;` sequence is left in
//! the text as written.

/// The recognized entities and their replacements, in decoding order.
///
/// Each replacement runs over the whole text before the next one starts.
/// `&amp;` must come last: decoding it first would turn `&amp;gt;` into `>`
/// instead of `&gt;`.
pub const ENTITIES: [(&str, &str); 3] = [("&lt;", "<"), ("&gt;", ">"), ("&amp;", "&")];

/// Longest entity name considered when looking for unknown entities.
const MAX_ENTITY_NAME_LEN: usize = 32;

/// Decode `&lt;`, `&gt;` and `&amp;` in a run of text.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    ENTITIES
        .iter()
        .fold(text.to_string(), |decoded, (entity, replacement)| {
            decoded.replace(entity, replacement)
        })
}

/// Find `&name;` sequences in raw text that [`decode_entities`] leaves alone.
///
/// Returns each sequence with its byte offset in `text`. Used to report
/// entities such as `&nbsp;` or `&#233;` that will be spoken literally.
#[must_use]
pub fn unknown_entities(text: &str) -> Vec<(usize, &str)> {
    let mut found = Vec::new();
    for (start, _) in text.match_indices('&') {
        let rest = &text[start + 1..];
        let name_end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '#'))
            .unwrap_or(rest.len());
        if name_end == 0 || name_end > MAX_ENTITY_NAME_LEN || !rest[name_end..].starts_with(';') {
            continue;
        }
        let entity = &text[start..start + name_end + 2];
        if ENTITIES.iter().all(|(known, _)| *known != entity) {
            found.push((start, entity));
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_order_is_load_bearing() {
        assert_eq!(decode_entities("TS &amp;&gt; JS"), "TS &> JS");
        assert_eq!(decode_entities("&amp;gt;"), "&gt;");
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_unknown_entities_pass_through() {
        assert_eq!(decode_entities("caf&eacute; &nbsp"), "caf&eacute; &nbsp");
    }

    #[test]
    fn test_unknown_entities_are_located() {
        let text = "a &lt; b &nbsp; c &#233; & d &amp;";
        assert_eq!(unknown_entities(text), [(9, "&nbsp;"), (18, "&#233;")]);
    }
}
