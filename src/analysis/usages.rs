//! Scanner for calls made through an injected reference.

use regex::Regex;

use crate::parser::ClassDeclaration;
use crate::scan::{balanced, line_of, sweep};

use super::report::UsageOccurrence;
use super::AnalysisError;

/// Finds every `this.<reference>.<call>` expression in the body of `class`.
///
/// The expression text runs from the reference access to the close of the
/// first parenthesis group, whatever statement punctuation follows: a call
/// wrapped over several lines is captured whole, and a trailing semicolon is
/// never included. Line numbers are resolved against `file_content` (the
/// whole file, not the class body) so they match the original source.
pub fn find_usages(
    class: &ClassDeclaration,
    reference: &str,
    file_content: &str,
) -> Result<Vec<UsageOccurrence>, AnalysisError> {
    let pattern = Regex::new(&format!(
        r"this\.{}\.([^\r\n]*)",
        regex::escape(reference)
    ))?;

    let mut usages = Vec::new();
    for found in sweep(&pattern, &class.body) {
        let trailing = match found.trailing {
            Some(trailing) => trailing,
            None => continue,
        };
        let call = balanced::extract('(', ')', &class.body, trailing.start, true);
        let needle = format!("this.{}.{}", reference, trailing.text);
        usages.push(UsageOccurrence {
            implementation: format!("this.{}.{}", reference, call),
            line: line_of(file_content, &needle),
        });
    }
    Ok(usages)
}
