//! Category path resolution over the suite tree.
//!
//! Paths are colon-delimited (`network:tcp:handshake`) and matched
//! case-insensitively; the resolved display path uses the suite file's
//! canonical casing. An unmatched token is fatal for the whole run, so it
//! surfaces as an error rather than a skipped category.

use anyhow::{Result, anyhow};

use crate::core::suite::Category;

/// A resolved category plus its canonical display path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub category: &'a Category,
    pub display_path: String,
}

/// Resolve a colon-delimited category path against the root categories.
///
/// Each token is matched by a case-insensitive linear scan of the current
/// level. A match descends into the node's children; a childless match
/// leaves the node itself as the only candidate for any remaining tokens.
pub fn resolve<'a>(roots: &'a [Category], path: &str) -> Result<Resolved<'a>> {
    let mut level: &'a [Category] = roots;
    let mut matched: Option<&'a Category> = None;
    let mut display_path = String::new();

    for token in path.split(':') {
        let found = level
            .iter()
            .find(|category| category.name.eq_ignore_ascii_case(token))
            .ok_or_else(|| {
                anyhow!(
                    "the token '{token}' defined in the category to execute was not found \
                     in the test suite definition"
                )
            })?;

        if !display_path.is_empty() {
            display_path.push(':');
        }
        display_path.push_str(&found.name);

        level = if found.children.is_empty() {
            std::slice::from_ref(found)
        } else {
            &found.children
        };
        matched = Some(found);
    }

    let category = matched.ok_or_else(|| anyhow!("empty category path"))?;
    Ok(Resolved {
        category,
        display_path,
    })
}

/// Starting points for a run: every root when no paths were requested,
/// otherwise each requested path resolved in order.
pub fn select_roots<'a>(roots: &'a [Category], requested: &[String]) -> Result<Vec<Resolved<'a>>> {
    if requested.is_empty() {
        return Ok(roots
            .iter()
            .map(|category| Resolved {
                category,
                display_path: category.name.clone(),
            })
            .collect());
    }
    requested.iter().map(|path| resolve(roots, path)).collect()
}
