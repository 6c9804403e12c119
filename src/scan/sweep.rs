//! Pattern sweeps over source text.
//!
//! A sweep is a lazy, finite, restartable sequence of matches for one
//! compiled pattern over one string. It replaces hand-rolled loops that
//! re-run a global pattern while tracking a cursor by hand: the iterator
//! owns the cursor, and running the same sweep twice over unchanged content
//! yields identical matches.

use regex::Regex;

/// A matched slice of the swept content, with its starting byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'c> {
    /// Matched text.
    pub text: &'c str,
    /// Byte offset of the match within the swept content.
    pub start: usize,
}

/// One match produced by a [`Sweep`].
#[derive(Debug, Clone, Copy)]
pub struct SweepMatch<'c> {
    /// The whole pattern match.
    pub whole: Span<'c>,
    /// The first capture group, when the pattern declares one. Scanners use
    /// this for the trailing text that follows a matched keyword.
    pub trailing: Option<Span<'c>>,
}

/// Iterator over non-overlapping matches of a pattern.
pub struct Sweep<'r, 'c> {
    inner: regex::CaptureMatches<'r, 'c>,
}

impl<'c> Iterator for Sweep<'_, 'c> {
    type Item = SweepMatch<'c>;

    fn next(&mut self) -> Option<Self::Item> {
        let captures = self.inner.next()?;
        let whole = captures.get(0)?;
        let trailing = captures.get(1).map(|group| Span {
            text: group.as_str(),
            start: group.start(),
        });
        Some(SweepMatch {
            whole: Span {
                text: whole.as_str(),
                start: whole.start(),
            },
            trailing,
        })
    }
}

/// Sweeps `content` with a compiled `pattern`.
pub fn sweep<'r, 'c>(pattern: &'r Regex, content: &'c str) -> Sweep<'r, 'c> {
    Sweep {
        inner: pattern.captures_iter(content),
    }
}
