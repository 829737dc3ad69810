//! Hierarchical test-suite runner CLI.
//!
//! Reads a YAML tree of test categories, executes the leaf test scripts
//! found in the library paths, and rolls results up the tree with
//! color-coded console reporting.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kcc::exit_codes;
use kcc::logging;
use kcc::run::{RunRequest, list_command, run_suite, validate_command};

#[derive(Parser)]
#[command(name = "kcc", version, about = "Hierarchical test-suite runner")]
struct Cli {
    /// Default log filter when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Path to the tool configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a test suite and print the aggregated report.
    Run {
        /// Path to the YAML suite file.
        #[arg(long)]
        suite: Option<String>,

        /// Library directory searched for test scripts (repeatable;
        /// earlier directories take precedence).
        #[arg(long)]
        library: Vec<String>,

        /// Colon-delimited category path to run (repeatable; default: all
        /// root categories).
        #[arg(long)]
        category: Vec<String>,

        /// Hide report lines at or beyond this depth; aggregation still
        /// covers the whole tree.
        #[arg(long)]
        aggregation_level: Option<usize>,

        /// Show the script-embedded hint under each failed test.
        #[arg(long)]
        show_hints: bool,

        /// Re-execute duplicated (script, args) pairs instead of reusing
        /// the first result.
        #[arg(long)]
        no_result_cache: bool,

        /// Stop the whole run at the first failing test.
        #[arg(long)]
        fail_fast: bool,

        /// Only print failing tests and non-OK categories.
        #[arg(long)]
        only_errors: bool,

        /// Per-script timeout in seconds (overrides the config file).
        #[arg(long)]
        script_timeout: Option<u64>,
    },
    /// Load a suite file and check its structure without executing tests.
    Validate {
        /// Path to the YAML suite file.
        #[arg(long)]
        suite: Option<String>,
    },
    /// Print the category tree of a suite file.
    List {
        /// Path to the YAML suite file.
        #[arg(long)]
        suite: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);
    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(exit_codes::INVALID);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Run {
            suite,
            library,
            category,
            aggregation_level,
            show_hints,
            no_result_cache,
            fail_fast,
            only_errors,
            script_timeout,
        } => run_suite(&RunRequest {
            config_path: cli.config,
            suite,
            library,
            categories: category,
            aggregation_level,
            show_hints,
            no_result_cache,
            fail_fast,
            only_errors,
            script_timeout_secs: script_timeout,
        }),
        Command::Validate { suite } => validate_command(cli.config.as_deref(), suite.as_deref()),
        Command::List { suite } => list_command(cli.config.as_deref(), suite.as_deref()),
    }
}
