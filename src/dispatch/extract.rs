//! Argument extraction from classified utterances.
//!
//! Filename arguments are everything after an anchor word: "search for
//! quarterly report" yields "quarterly report". Tokenization is plain
//! whitespace splitting; the anchor must appear as its own token.

/// Tokens strictly after the first occurrence of `anchor`, rejoined with
/// single spaces. `None` when the anchor is absent or is the last token.
pub fn filename_after_anchor(utterance: &str, anchor: &str) -> Option<String> {
    let words: Vec<&str> = utterance.split_whitespace().collect();
    let idx = words.iter().position(|w| *w == anchor)?;
    let rest = &words[idx + 1..];
    if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    }
}

/// Search phrasing: "search for <name>" or "find <name>"
pub fn search_filename(utterance: &str) -> Option<String> {
    filename_after_anchor(utterance, "for").or_else(|| filename_after_anchor(utterance, "find"))
}

/// Delete phrasing: "delete <name>"
pub fn delete_filename(utterance: &str) -> Option<String> {
    filename_after_anchor(utterance, "delete")
}
