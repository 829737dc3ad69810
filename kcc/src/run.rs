//! Orchestration for the `run`, `validate`, and `list` CLI commands.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Result, anyhow, bail};
use tracing::{debug, info};

use crate::core::resolver::select_roots;
use crate::core::suite::Category;
use crate::exec::{RunOptions, SuiteExecutor};
use crate::io::config::{ToolConfig, load_config, resolve_config_path};
use crate::io::launcher::ShellLauncher;
use crate::io::locator::{FsScriptLocator, expand_home};
use crate::io::render::{print_banner, print_report};
use crate::io::suite_store::{load_suite, validate_suite};

/// Inputs for one `kcc run` invocation, straight from the CLI.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    pub config_path: Option<PathBuf>,
    pub suite: Option<String>,
    pub library: Vec<String>,
    pub categories: Vec<String>,
    pub aggregation_level: Option<usize>,
    pub show_hints: bool,
    pub no_result_cache: bool,
    pub fail_fast: bool,
    pub only_errors: bool,
    pub script_timeout_secs: Option<u64>,
}

/// Run the selected categories of a suite and print the report.
///
/// One executor (and thus one result cache) covers the whole invocation,
/// including every selected root category.
pub fn run_suite(request: &RunRequest) -> Result<()> {
    let config = load_config(&resolve_config_path(request.config_path.as_deref()))?;

    let library = merge_library_paths(&request.library, &config);
    if library.is_empty() {
        bail!("the library path is not defined (use --library or the config file)");
    }
    for path in &library {
        debug!(path, "using library path");
    }

    let suite_path = resolve_suite_path(request.suite.as_deref(), &config)?;
    debug!(suite = %suite_path.display(), "using test suite");
    let roots = load_suite(&suite_path)?;
    let selected = select_roots(&roots, &request.categories)?;

    let locator = FsScriptLocator::new(library.iter().map(String::as_str));
    let launcher = ShellLauncher {
        timeout: Duration::from_secs(
            request
                .script_timeout_secs
                .unwrap_or(config.script_timeout_secs),
        ),
        output_limit_bytes: config.output_limit_bytes,
    };
    let options = RunOptions {
        show_hints: request.show_hints,
        use_cache: !request.no_result_cache,
        fail_fast: request.fail_fast,
        aggregation_level: request.aggregation_level,
    };

    let mut executor = SuiteExecutor::new(&locator, &launcher, options);
    for resolved in selected {
        print_banner(&resolved.display_path, resolved.category.description.as_deref())?;
        let result = executor.execute(resolved.category, 0);
        info!(category = %resolved.display_path, success = result.success, "category finished");
        print_report(&result.lines, request.only_errors)?;
        if executor.stopped() {
            break;
        }
    }
    Ok(())
}

/// Load a suite file and report structural problems without executing.
pub fn validate_command(config_path: Option<&Path>, suite: Option<&str>) -> Result<()> {
    let config = load_config(&resolve_config_path(config_path))?;
    let suite_path = resolve_suite_path(suite, &config)?;
    let roots = load_suite(&suite_path)?;

    let errors = validate_suite(&roots);
    if !errors.is_empty() {
        bail!("suite validation failed:\n- {}", errors.join("\n- "));
    }
    println!(
        "{}: valid suite, {} root categories",
        suite_path.display(),
        roots.len()
    );
    Ok(())
}

/// Print the category tree of a suite file without executing.
pub fn list_command(config_path: Option<&Path>, suite: Option<&str>) -> Result<()> {
    let config = load_config(&resolve_config_path(config_path))?;
    let suite_path = resolve_suite_path(suite, &config)?;
    let roots = load_suite(&suite_path)?;

    for root in &roots {
        print_tree(root, 0);
    }
    Ok(())
}

fn print_tree(category: &Category, depth: usize) {
    let indent = "  ".repeat(depth);
    match &category.description {
        Some(description) => println!("{indent}- {} : {description}", category.name),
        None => println!("{indent}- {}", category.name),
    }
    for test in &category.tests {
        match &test.args {
            Some(args) => println!("{indent}    {} {}", test.script, args),
            None => println!("{indent}    {}", test.script),
        }
    }
    for child in &category.children {
        print_tree(child, depth + 1);
    }
}

/// Caller-supplied library paths take precedence over config-supplied
/// ones; both keep their internal order.
fn merge_library_paths(cli: &[String], config: &ToolConfig) -> Vec<String> {
    let mut merged = cli.to_vec();
    merged.extend(config.library.iter().cloned());
    merged
}

fn resolve_suite_path(cli_suite: Option<&str>, config: &ToolConfig) -> Result<PathBuf> {
    let suite = cli_suite
        .or(config.suite.as_deref())
        .ok_or_else(|| anyhow!("the suite path is not defined (use --suite or the config file)"))?;
    Ok(expand_home(suite))
}
