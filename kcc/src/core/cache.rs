//! Process-lifetime memoization of script results.

use std::collections::HashMap;

/// Two-level map from script name, then raw argument string, to the last
/// exit code.
///
/// Populated lazily on first execution of a `(script, args)` pair; a
/// stored key is never overwritten or evicted within a run. The cache is
/// owned by the executor for one run, so independent runs never share
/// entries.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: HashMap<String, HashMap<String, i32>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, script: &str, args: &str) -> Option<i32> {
        self.entries
            .get(script)
            .and_then(|by_args| by_args.get(args))
            .copied()
    }

    /// Store the exit code for `(script, args)` unless already present.
    pub fn store(&mut self, script: &str, args: &str, exit_code: i32) {
        self.entries
            .entry(script.to_string())
            .or_default()
            .entry(args.to_string())
            .or_insert(exit_code);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
