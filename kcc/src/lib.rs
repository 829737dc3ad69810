//! Hierarchical test-suite runner.
//!
//! kcc reads a declarative YAML tree of named test categories, executes the
//! leaf test scripts found in the library paths, and rolls results up the
//! tree to a pass/fail/partial status at every level. The architecture
//! enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (path resolution, result
//!   memoization, status aggregation, hint scanning, report lines).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (suite/config files, script
//!   lookup, process execution, console rendering). Isolated behind traits
//!   to enable fakes in tests.
//!
//! [`exec`] and [`run`] coordinate core logic with I/O to implement the CLI
//! commands.

pub mod core;
pub mod exec;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod run;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
