//! Balanced-delimiter content extraction.
//!
//! The extractor walks a source string from a starting byte offset and
//! collects the region enclosed by one opener/closer pair family, tracking
//! nesting with a plain integer depth counter. It performs no delimiter-type
//! matching across different pairs and no literal/comment awareness.

/// Extracts the content of the first balanced delimiter region at or after
/// `start`.
///
/// # Arguments
///
/// * `opener` - Character that opens a region (e.g. `'('` or `'{'`)
/// * `closer` - Character that closes a region
/// * `content` - Text to scan
/// * `start` - Byte offset to begin scanning from
/// * `keep_context` - When true, every scanned character is collected,
///   including the delimiters themselves and any text preceding the first
///   opener. When false, only text strictly inside the region is collected.
///
/// # Returns
///
/// The collected text. The scan ends when the region closes, when the
/// content runs out, or when an unmatched closer is hit before any opener
/// opened a region. Unbalanced input therefore yields a partial result
/// rather than an error.
///
/// # Example
///
/// ```
/// use depscope::scan::balanced::extract;
///
/// assert_eq!(extract('(', ')', "foo(a(b)c)bar", 3, true), "(a(b)c)");
/// assert_eq!(extract('{', '}', "x{inner}y", 1, false), "inner");
/// ```
pub fn extract(opener: char, closer: char, content: &str, start: usize, keep_context: bool) -> String {
    extract_until(opener, closer, content, start, keep_context, |_| false)
}

/// Like [`extract`], but additionally halts as soon as `stop` returns true
/// for the character about to be scanned next, regardless of depth.
///
/// The predicate sees the character *after* the one just consumed, so a
/// region can be cut short before an unrelated delimiter further down the
/// file is ever reached. Import parsing uses this to stop a `{...}` scan at
/// the first quote character.
pub fn extract_until<F>(
    opener: char,
    closer: char,
    content: &str,
    start: usize,
    keep_context: bool,
    stop: F,
) -> String
where
    F: Fn(char) -> bool,
{
    debug_assert!(opener.is_ascii() && closer.is_ascii());

    let bytes = content.as_bytes();
    let mut collected: Vec<u8> = Vec::new();
    let mut index = start;
    // The counter starts at one: the initial slot is a sentinel that an
    // unmatched closer consumes, ending the scan. The first opener replaces
    // the sentinel instead of stacking on top of it.
    let mut depth: usize = 1;
    let mut armed = false;
    let mut inside = false;

    while depth > 0 && index < bytes.len() {
        let byte = bytes[index];
        if byte == opener as u8 {
            inside = true;
            if armed {
                depth += 1;
            } else {
                depth = 1;
                armed = true;
            }
            if keep_context {
                collected.push(byte);
            }
        } else if byte == closer as u8 {
            depth = depth.saturating_sub(1);
            if keep_context {
                collected.push(byte);
            }
        } else if inside || keep_context {
            collected.push(byte);
        }
        index += 1;

        if index < bytes.len() && stop(bytes[index] as char) {
            break;
        }
    }

    String::from_utf8_lossy(&collected).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_balanced_nested() {
        assert_eq!(extract('(', ')', "foo(a(b)c)bar", 3, true), "(a(b)c)");
    }

    #[test]
    fn test_extract_inner_only() {
        assert_eq!(extract('{', '}', "x{inner}y", 1, false), "inner");
    }

    #[test]
    fn test_extract_keeps_leading_context() {
        // With context kept, text before the first opener is collected too.
        assert_eq!(extract('(', ')', "load(1);", 0, true), "load(1)");
    }

    #[test]
    fn test_extract_skips_leading_context() {
        assert_eq!(extract('(', ')', "load(1);", 0, false), "1");
    }

    #[test]
    fn test_extract_unbalanced_runs_to_end() {
        // A region that never closes collects everything that remains.
        assert_eq!(extract('(', ')', "foo(bar", 3, true), "(bar");
    }

    #[test]
    fn test_extract_no_opener_runs_to_end() {
        assert_eq!(extract('(', ')', "plain text", 0, false), "");
        assert_eq!(extract('(', ')', "plain", 0, true), "plain");
    }

    #[test]
    fn test_extract_unmatched_closer_ends_scan() {
        // A closer before any opener consumes the sentinel and stops.
        assert_eq!(extract('(', ')', "a)b(c)", 0, true), "a)");
    }

    #[test]
    fn test_extract_empty_content() {
        assert_eq!(extract('(', ')', "", 0, true), "");
        assert_eq!(extract('(', ')', "", 0, false), "");
    }

    #[test]
    fn test_extract_start_past_end() {
        assert_eq!(extract('(', ')', "short", 40, true), "");
    }

    #[test]
    fn test_extract_until_stops_at_predicate() {
        let result = extract_until('{', '}', "abc 'def' {x}", 0, false, |c| c == '\'');
        assert_eq!(result, "");
    }

    #[test]
    fn test_extract_until_predicate_inside_region() {
        // The predicate fires even while a region is still open.
        let result = extract_until('{', '}', "{ab'cd}", 0, false, |c| c == '\'');
        assert_eq!(result, "ab");
    }

    #[test]
    fn test_extract_two_groups_only_first_taken() {
        assert_eq!(extract('(', ')', "(a)(b)", 0, true), "(a)");
    }
}
