//! Scanner for HTTP route registrations.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scan::{balanced, line_of, sweep};

use super::report::RouteOccurrence;

/// Route registrations are verb calls on the conventional `app` receiver.
static ROUTE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bapp\.(?:get|put|delete|post|update)\b([^\r\n]*)").expect("route pattern is valid")
});

/// Finds every route registration in `content`.
///
/// The recorded text is the parenthesized argument list of the verb call.
/// Registrations whose arguments contain an empty string literal (`''`) are
/// placeholder routes and are dropped.
pub fn find_routes(content: &str) -> Vec<RouteOccurrence> {
    let mut routes = Vec::new();
    for found in sweep(&ROUTE_PATTERN, content) {
        let trailing = match found.trailing {
            Some(trailing) => trailing,
            None => continue,
        };
        let implementation = balanced::extract('(', ')', content, trailing.start, true);
        if implementation.contains("''") {
            continue;
        }
        routes.push(RouteOccurrence {
            implementation,
            line: line_of(content, found.whole.text),
        });
    }
    routes
}
