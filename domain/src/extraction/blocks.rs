//! Question block splitting.
//!
//! Every question in a document starts with a `Question ID <hex>` header.
//! The splitter cuts the document at each header and hands back one
//! [`RawBlock`] per question, with the header re-attached so the field parser
//! can work on a single block in isolation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal label that precedes every question id.
pub(crate) const ID_LABEL: &str = "Question ID";

/// `Question ID` followed by a lowercase hex token (captured).
pub(crate) static QUESTION_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Question ID\s*([a-f0-9]+)").expect("question id pattern"));

/// One question's slice of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    /// Hex id captured from the delimiter
    pub id: String,
    /// Block text, re-prefixed with `Question ID {id}\n`
    pub text: String,
}

/// Split a document into one block per `Question ID <hex>` delimiter.
///
/// Text before the first delimiter is discarded. A delimiter followed
/// directly by the next delimiter (or by the end of the text) has an empty
/// body and is dropped. Returns an empty vector when the document has no
/// delimiters at all.
pub fn split_into_blocks(document_text: &str) -> Vec<RawBlock> {
    let headers: Vec<_> = QUESTION_ID_RE.captures_iter(document_text).collect();

    headers
        .iter()
        .enumerate()
        .filter_map(|(i, caps)| {
            let header = caps.get(0)?;
            let id = caps.get(1)?.as_str();
            let body_end = headers
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(document_text.len(), |next| next.start());
            let body = &document_text[header.end()..body_end];

            if body.is_empty() {
                return None;
            }

            Some(RawBlock {
                id: id.to_string(),
                text: format!("{ID_LABEL} {id}\n{body}"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_delimiters_yields_nothing() {
        assert!(split_into_blocks("").is_empty());
        assert!(split_into_blocks("Practice test\nNo questions here.").is_empty());
    }

    #[test]
    fn test_preamble_is_discarded() {
        let blocks = split_into_blocks("Cover page\nQuestion ID ab12\nWhat is X?");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].id, "ab12");
        assert!(!blocks[0].text.contains("Cover page"));
    }

    #[test]
    fn test_one_block_per_delimiter() {
        let text = "Question ID 01ab\nFirst?\nQuestion ID 02cd\nSecond?\nQuestion ID 03ef\nThird?";
        let blocks = split_into_blocks(text);
        let ids: Vec<_> = blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["01ab", "02cd", "03ef"]);
        assert!(blocks.iter().all(|b| !b.id.is_empty()));
    }

    #[test]
    fn test_block_text_is_reprefixed() {
        let blocks = split_into_blocks("Question ID   ab12 body text");
        assert_eq!(blocks[0].text, "Question ID ab12\n body text");
    }

    #[test]
    fn test_body_stops_at_next_delimiter() {
        let blocks = split_into_blocks("Question ID aa\nfirst body\nQuestion ID bb\nsecond body");
        assert_eq!(blocks[0].text, "Question ID aa\n\nfirst body\n");
        assert_eq!(blocks[1].text, "Question ID bb\n\nsecond body");
    }

    #[test]
    fn test_trailing_delimiter_without_body_is_dropped() {
        let blocks = split_into_blocks("Question ID aa\nbody\nQuestion ID bb");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].id, "aa");
    }

    #[test]
    fn test_uppercase_hex_is_not_an_id() {
        assert!(split_into_blocks("Question ID XYZ body").is_empty());
    }
}
