//! Import statement tokenizer.
//!
//! Extracts the symbol list and origin path of every `import … from …`
//! statement in a file. The tokenizer is line-oriented and structural: it
//! does not distinguish an `import` keyword inside a string or comment from
//! real code.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scan::{extract_until, sweep};

use super::types::ImportStatement;

/// Matches an `import` keyword and the rest of its line. Consuming the line
/// keeps the sweep from reporting a second statement squeezed onto the same
/// line twice.
static IMPORT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bimport\b([^\r\n]*)").expect("import pattern is valid"));

/// Tokenizes every import statement in `content`.
///
/// Statements without a braced symbol list (default imports, side-effect
/// imports) are discarded: they can never name the component being searched
/// for.
pub fn parse_imports(content: &str) -> Vec<ImportStatement> {
    let mut statements = Vec::new();
    for found in sweep(&IMPORT_PATTERN, content) {
        let symbols = symbol_list(content, found.whole.start);
        if symbols.len() == 1 && symbols[0].is_empty() {
            continue;
        }
        statements.push(ImportStatement {
            symbols,
            origin: origin_path(content, found.whole.start),
        });
    }
    statements
}

/// Returns true if any statement in `imports` names `component` verbatim.
pub fn imports_component(imports: &[ImportStatement], component: &str) -> bool {
    imports.iter().any(|statement| statement.imports(component))
}

/// Collects the `{...}` symbol list starting at an `import` keyword,
/// stopping early at the first quote so an unbraced import never swallows
/// the braces of a later statement.
fn symbol_list(content: &str, start: usize) -> Vec<String> {
    let list = extract_until('{', '}', content, start, false, |c| c == '\'' || c == '"');
    list.replace(' ', "")
        .split(',')
        .map(str::to_string)
        .collect()
}

/// Collects the text between the first and second quote character after
/// `start`. Single and double quotes toggle the same state, so a mismatched
/// pair still terminates.
fn origin_path(content: &str, start: usize) -> String {
    let mut collected = Vec::new();
    let mut open = false;
    for &byte in &content.as_bytes()[start..] {
        if byte == b'\'' || byte == b'"' {
            if open {
                break;
            }
            open = true;
        } else if open {
            collected.push(byte);
        }
    }
    String::from_utf8_lossy(&collected).into_owned()
}
