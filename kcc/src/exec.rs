//! Recursive suite execution with bottom-up aggregation.
//!
//! The executor walks a resolved category depth-first, runs leaf tests
//! through the injected [`ScriptLocator`] and [`ScriptLauncher`], memoizes
//! results in the [`ResultCache`], and combines outcomes into one
//! aggregated verdict plus an ordered report buffer. The buffer is
//! assembled bottom-up but printed top-down once the depth-0 call returns.

use std::path::PathBuf;

use tracing::{debug, error, warn};

use crate::core::cache::ResultCache;
use crate::core::report::{ReportLine, Verdict};
use crate::core::suite::{Category, TestCase};
use crate::io::hint::extract_hint;
use crate::io::launcher::{EXIT_NOT_FOUND, ExecutionOutcome, ScriptLauncher};
use crate::io::locator::ScriptLocator;

/// Per-invocation switches consumed by the executor.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Surface script-embedded hints under failed test lines.
    pub show_hints: bool,
    /// Reuse results for duplicated `(script, args)` pairs.
    pub use_cache: bool,
    /// Stop the whole run at the first failing test.
    pub fail_fast: bool,
    /// Depth ceiling for report lines; aggregation runs at every depth.
    pub aggregation_level: Option<usize>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            show_hints: false,
            use_cache: true,
            fail_fast: false,
            aggregation_level: None,
        }
    }
}

/// Aggregated result for one category node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryResult {
    pub success: bool,
    pub lines: Vec<ReportLine>,
}

/// Depth-first suite executor; owns the result cache for one run.
pub struct SuiteExecutor<'a, L, R> {
    locator: &'a L,
    launcher: &'a R,
    options: RunOptions,
    cache: ResultCache,
    stopped: bool,
}

struct LeafOutcome {
    exit_code: i32,
    script_path: Option<PathBuf>,
}

impl<'a, L: ScriptLocator, R: ScriptLauncher> SuiteExecutor<'a, L, R> {
    pub fn new(locator: &'a L, launcher: &'a R, options: RunOptions) -> Self {
        Self {
            locator,
            launcher,
            options,
            cache: ResultCache::new(),
            stopped: false,
        }
    }

    /// True once a fail-fast run has hit its first failing test.
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// Execute `category` and everything below it.
    ///
    /// Leaf tests run first in document order, then children recurse; the
    /// category's own summary line is inserted at the front of its buffer
    /// so a node's line precedes its tests, which precede its descendants.
    pub fn execute(&mut self, category: &Category, depth: usize) -> CategoryResult {
        let mut success_local = true;
        let mut success_children = true;
        let mut local_lines = Vec::new();

        if category.tests.is_empty() {
            debug!(category = %category.name, "no test defined in category");
        }
        for test in &category.tests {
            if self.stopped {
                break;
            }
            let leaf = self.run_test(test);
            let failed = leaf.exit_code != 0;
            success_local &= !failed;
            if failed && self.options.fail_fast {
                warn!(script = %test.script, "fail-fast: stopping after first failure");
                self.stopped = true;
            }
            if self.below_ceiling(depth) {
                local_lines.push(self.test_line(test, depth, &leaf));
            }
        }

        let mut children_lines = Vec::new();
        for child in &category.children {
            if self.stopped {
                break;
            }
            let result = self.execute(child, depth + 1);
            success_children &= result.success;
            children_lines.extend(result.lines);
        }

        let success = success_local && success_children;
        if self.below_ceiling(depth) {
            let verdict =
                Verdict::for_category(success_local, success_children, !category.tests.is_empty());
            local_lines.insert(0, ReportLine::category(depth, &category.name, verdict));
        }
        local_lines.extend(children_lines);

        CategoryResult {
            success,
            lines: local_lines,
        }
    }

    fn below_ceiling(&self, depth: usize) -> bool {
        match self.options.aggregation_level {
            None => true,
            Some(ceiling) => depth < ceiling,
        }
    }

    fn test_line(&self, test: &TestCase, depth: usize, leaf: &LeafOutcome) -> ReportLine {
        let failed = leaf.exit_code != 0;
        let verdict = if failed { Verdict::Ko } else { Verdict::Ok };
        let hint = if failed && self.options.show_hints {
            Some(match leaf.script_path.as_deref() {
                Some(path) => extract_hint(path, leaf.exit_code),
                None => String::new(),
            })
        } else {
            None
        };
        ReportLine::test(depth, &test.display_label(), verdict, hint)
    }

    /// Locate and run one leaf test, consulting the result cache.
    fn run_test(&mut self, test: &TestCase) -> LeafOutcome {
        let Some(script_path) = self.locator.locate(&test.script) else {
            error!(script = %test.script, "script not found in any library path, marking test as failed");
            return LeafOutcome {
                exit_code: EXIT_NOT_FOUND,
                script_path: None,
            };
        };

        let args = test.args_key();
        if self.options.use_cache {
            if let Some(exit_code) = self.cache.lookup(&test.script, args) {
                debug!(script = %test.script, args, exit_code, "result cache hit, reusing previous result");
                return LeafOutcome {
                    exit_code,
                    script_path: Some(script_path),
                };
            }
            debug!(script = %test.script, args, "result cache miss");
        }

        let mut command_line = script_path.display().to_string();
        if let Some(args) = &test.args {
            command_line.push(' ');
            command_line.push_str(args);
        }

        let outcome = match self.launcher.launch(&command_line) {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(script = %test.script, err = %err, "failed to execute test script");
                ExecutionOutcome::from_exit_code(EXIT_NOT_FOUND)
            }
        };
        if outcome.timed_out {
            warn!(script = %test.script, "test script timed out, marking test as failed");
        }
        if !outcome.success() {
            debug!(exit_code = outcome.exit_code, "return code");
            debug!(stdout = %String::from_utf8_lossy(&outcome.stdout), "captured stdout");
            debug!(stderr = %String::from_utf8_lossy(&outcome.stderr), "captured stderr");
        }

        if self.options.use_cache {
            self.cache.store(&test.script, args, outcome.exit_code);
        }
        LeafOutcome {
            exit_code: outcome.exit_code,
            script_path: Some(script_path),
        }
    }
}
