//! Typed suite tree loaded from YAML suite files.
//!
//! The tree is constructed once at load time and read-only during
//! traversal. Field names mirror the suite file format: `category`,
//! `description`, `test`, `test-suite`; unknown keys are rejected instead
//! of being carried around as an untyped mapping.

use serde::{Deserialize, Serialize};

/// One node of the suite tree.
///
/// A node with neither tests nor children is structurally valid; it
/// aggregates to a vacuous success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Category {
    /// Case-preserved name; path resolution compares case-insensitively.
    #[serde(rename = "category")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Leaf tests executed at this node, in document order.
    #[serde(default, rename = "test", skip_serializing_if = "Vec::is_empty")]
    pub tests: Vec<TestCase>,

    /// Subcategories, in document order.
    #[serde(default, rename = "test-suite", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Category>,
}

/// One executable leaf test.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TestCase {
    /// Script file name, resolved against the library search paths.
    pub script: String,

    /// Raw argument string appended verbatim to the script invocation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TestCase {
    /// Key used for result caching: the raw argument string, empty when
    /// absent. Two tests with the same `(script, args)` are the same
    /// cached unit even in different categories.
    pub fn args_key(&self) -> &str {
        self.args.as_deref().unwrap_or("")
    }

    /// Text shown on the test's report line.
    pub fn display_label(&self) -> String {
        match &self.description {
            Some(description) => description.clone(),
            None => format!("Running : {}", self.script),
        }
    }
}
