//! Exported-class tokenizer.
//!
//! Finds every `export class` declaration in a file, captures its
//! brace-balanced body, and tokenizes the constructor parameter list into
//! typed parameters.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scan::{balanced, sweep};

use super::types::{ClassDeclaration, ConstructorParameter};

static CLASS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bexport class \b").expect("class pattern is valid"));

/// Tokenizes every exported class in `content`.
pub fn tokenize_classes(content: &str) -> Vec<ClassDeclaration> {
    sweep(&CLASS_PATTERN, content)
        .map(|found| tokenize_class(content, found.whole.start))
        .collect()
}

/// Builds one [`ClassDeclaration`] from the declaration starting at `start`.
fn tokenize_class(content: &str, start: usize) -> ClassDeclaration {
    let body = balanced::extract('{', '}', content, start, true);

    // The identifier is the third space-delimited token of the text before
    // the body brace: `export class <Name> ...`.
    let name = body
        .split('{')
        .next()
        .unwrap_or("")
        .split(' ')
        .nth(2)
        .unwrap_or("")
        .to_string();

    // Parameters come from the first parenthesis group at or after the
    // `constructor` keyword. A class without one falls back to scanning from
    // the body start, which tokenizes the first parenthesized list it meets;
    // untyped entries are dropped below, so plain method calls rarely
    // survive this.
    let constructor_at = body.find("constructor").unwrap_or(0);
    let parameter_text = balanced::extract('(', ')', &body, constructor_at, false);

    ClassDeclaration {
        name,
        parameters: parse_parameters(&parameter_text),
        body,
    }
}

/// Tokenizes a raw constructor parameter list.
///
/// Each comma-separated segment needs a `:` type annotation to count; the
/// token before the name, when present and non-empty, is the visibility
/// keyword, otherwise `public` is assumed.
pub fn parse_parameters(parameter_text: &str) -> Vec<ConstructorParameter> {
    let mut parameters = Vec::new();
    for segment in parameter_text.split(',') {
        let mut pieces = segment.split(':');
        let head = match pieces.next() {
            Some(head) => head,
            None => continue,
        };
        let type_name = match pieces.next() {
            Some(annotation) => strip(annotation),
            // No annotation means the parameter cannot be injected.
            None => continue,
        };

        let tokens: Vec<&str> = head.split(' ').collect();
        let reference = tokens.last().map(|token| strip(token)).unwrap_or_default();
        let scope = match tokens.len().checked_sub(2).map(|index| tokens[index]) {
            Some(token) if !token.is_empty() => strip(token),
            _ => "public".to_string(),
        };

        parameters.push(ConstructorParameter {
            scope,
            reference,
            type_name,
        });
    }
    parameters
}

/// Removes every space and the first line break from a token.
fn strip(value: &str) -> String {
    let mut compact = value.replace(' ', "");
    if let Some(position) = compact.find(|c| c == '\r' || c == '\n') {
        let width = if compact[position..].starts_with("\r\n") {
            2
        } else {
            1
        };
        compact.replace_range(position..position + width, "");
    }
    compact
}
