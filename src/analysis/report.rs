//! Per-file report structures consumed by the UI layer.
//!
//! Field names are part of the output contract and serialize in camelCase
//! where the consuming layer expects it.

use serde::Serialize;

/// One call made through an injected reference, with its source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageOccurrence {
    /// The full `this.<ref>.<call>` expression text.
    pub implementation: String,
    /// 1-based line in the source file, 0 when the text could not be
    /// located again.
    pub line: usize,
}

/// One HTTP route registration, with its source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteOccurrence {
    /// The parenthesized argument list of the verb call.
    pub implementation: String,
    /// 1-based line in the source file, 0 when the text could not be
    /// located again.
    pub line: usize,
}

/// A class that injects the searched component, with every usage found in
/// its body.
#[derive(Debug, Clone, Serialize)]
pub struct ClassUsageReport {
    #[serde(rename = "className")]
    pub class_name: String,
    /// The constructor parameter name the class reaches the component
    /// through.
    #[serde(rename = "referencedAs")]
    pub referenced_as: String,
    pub implementations: Vec<UsageOccurrence>,
}

/// Report for one Angular source file that imports the searched component.
///
/// The `classes` list may be empty: importing the component without
/// injecting it anywhere still produces a report.
#[derive(Debug, Clone, Serialize)]
pub struct AngularFileReport {
    pub name: String,
    pub at: String,
    pub classes: Vec<ClassUsageReport>,
}

/// Report for one Node source file with at least one route registration.
#[derive(Debug, Clone, Serialize)]
pub struct NodeFileReport {
    pub name: String,
    pub at: String,
    pub routes: Vec<RouteOccurrence>,
}

/// A per-file analysis report of either flavor.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FileReport {
    Angular(AngularFileReport),
    Node(NodeFileReport),
}

impl FileReport {
    /// File name the report was produced for.
    pub fn name(&self) -> &str {
        match self {
            FileReport::Angular(report) => &report.name,
            FileReport::Node(report) => &report.name,
        }
    }

    /// Total number of occurrences recorded in this report.
    pub fn occurrence_count(&self) -> usize {
        match self {
            FileReport::Angular(report) => report
                .classes
                .iter()
                .map(|class| class.implementations.len())
                .sum(),
            FileReport::Node(report) => report.routes.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angular_report_serialization() {
        let report = FileReport::Angular(AngularFileReport {
            name: "widget.component.ts".to_string(),
            at: "/src/widget.component.ts".to_string(),
            classes: vec![ClassUsageReport {
                class_name: "WidgetComponent".to_string(),
                referenced_as: "svc".to_string(),
                implementations: vec![UsageOccurrence {
                    implementation: "this.svc.load(1)".to_string(),
                    line: 7,
                }],
            }],
        });

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["name"], "widget.component.ts");
        assert_eq!(value["classes"][0]["className"], "WidgetComponent");
        assert_eq!(value["classes"][0]["referencedAs"], "svc");
        assert_eq!(
            value["classes"][0]["implementations"][0]["implementation"],
            "this.svc.load(1)"
        );
        assert_eq!(value["classes"][0]["implementations"][0]["line"], 7);
    }

    #[test]
    fn test_node_report_serialization() {
        let report = FileReport::Node(NodeFileReport {
            name: "server.js".to_string(),
            at: "/srv/server.js".to_string(),
            routes: vec![RouteOccurrence {
                implementation: "('/users', handler)".to_string(),
                line: 3,
            }],
        });

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["routes"][0]["implementation"], "('/users', handler)");
        assert_eq!(value["routes"][0]["line"], 3);
    }

    #[test]
    fn test_occurrence_count() {
        let report = FileReport::Node(NodeFileReport {
            name: "server.js".to_string(),
            at: "server.js".to_string(),
            routes: vec![
                RouteOccurrence {
                    implementation: "('/a', a)".to_string(),
                    line: 1,
                },
                RouteOccurrence {
                    implementation: "('/b', b)".to_string(),
                    line: 2,
                },
            ],
        });
        assert_eq!(report.occurrence_count(), 2);
        assert_eq!(report.name(), "server.js");
    }
}
