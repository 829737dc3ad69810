//! Loading suite files (YAML) into the typed category tree.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::core::suite::Category;

/// Load and parse a YAML suite file into its root categories.
pub fn load_suite(path: &Path) -> Result<Vec<Category>> {
    if !path.is_file() {
        bail!("the suite file {} does not exist", path.display());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let roots: Vec<Category> =
        serde_yaml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    Ok(roots)
}

/// Structural checks beyond what deserialization enforces.
///
/// Returns one message per problem; empty means the suite is well-formed.
pub fn validate_suite(roots: &[Category]) -> Vec<String> {
    let mut errors = Vec::new();
    if roots.is_empty() {
        errors.push("suite defines no categories".to_string());
    }
    for root in roots {
        validate_category(root, &root.name, &mut errors);
    }
    errors
}

fn validate_category(category: &Category, path: &str, errors: &mut Vec<String>) {
    if category.name.trim().is_empty() {
        errors.push(format!("category at '{path}' has an empty name"));
    }
    for test in &category.tests {
        if test.script.trim().is_empty() {
            errors.push(format!("test in '{path}' has an empty script name"));
        }
    }
    for child in &category.children {
        let child_path = format!("{path}:{}", child.name);
        validate_category(child, &child_path, errors);
    }
}
