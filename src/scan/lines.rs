//! Source-line location by substring containment.

/// Returns the 1-based number of the first line of `content` that contains
/// `needle` as a plain substring, or 0 when no line contains it.
///
/// The search is literal containment, not a pattern match, and it is not
/// deduplicated: when the same text occurs on several lines the earliest
/// line wins, even if the caller meant a later occurrence.
pub fn line_of(content: &str, needle: &str) -> usize {
    for (index, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return index + 1;
        }
    }
    0
}
