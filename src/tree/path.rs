//! Path normalization and segment matching.

use unicode_normalization::UnicodeNormalization;

/// Normalize a path attribute or active-file path for comparison.
///
/// Normalizes Unicode to NFC and removes trailing slashes (except a lone
/// root slash), so that attribute and segment comparisons are byte-equal
/// whenever the host and the active-file notification agree on the path.
pub fn normalize(path: &str) -> String {
    let mut result: String = path.nfc().collect();
    if result.len() > 1 {
        while result.ends_with('/') {
            result.pop();
        }
    }
    result
}

/// Split an active-file path into lookup segments.
///
/// Empty segments are preserved: an empty path yields a single empty
/// segment, which can never match a rendered node and therefore surfaces as
/// a resolution fault rather than silently clearing the highlight.
pub fn segments(path: &str) -> Vec<String> {
    normalize(path).split('/').map(str::to_string).collect()
}

/// Predicate used to search rendered descendants by path attribute.
#[derive(Debug, Clone, Copy)]
pub enum PathMatch<'a> {
    /// The attribute equals the segment exactly. Finds top-level folders,
    /// whose attribute is the bare folder name.
    Exact(&'a str),
    /// The attribute ends with `/segment`. The leading slash keeps the match
    /// on a path boundary: `foo/bar` matches segment `bar`, `foobar` does
    /// not.
    SlashSuffix(&'a str),
}

impl PathMatch<'_> {
    /// Whether a node's path attribute satisfies the predicate.
    pub fn matches(&self, attribute: &str) -> bool {
        match *self {
            PathMatch::Exact(segment) => attribute == segment,
            PathMatch::SlashSuffix(segment) => attribute
                .strip_suffix(segment)
                .map_or(false, |rest| rest.ends_with('/')),
        }
    }
}
