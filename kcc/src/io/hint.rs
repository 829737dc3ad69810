//! File-level hint lookup for failed tests.

use std::fs;
use std::path::Path;

use tracing::error;

use crate::core::hint::find_hint;

/// Read `script_path` and return the hint matching `exit_code`.
///
/// Unreadable or missing scripts are error-logged and yield an empty
/// hint; hint lookup never fails a run.
pub fn extract_hint(script_path: &Path, exit_code: i32) -> String {
    if !script_path.is_file() {
        error!(script = %script_path.display(), "script does not exist, no hint available");
        return String::new();
    }
    match fs::read_to_string(script_path) {
        Ok(text) => find_hint(&text, exit_code),
        Err(err) => {
            error!(script = %script_path.display(), %err, "script is not readable, no hint available");
            String::new()
        }
    }
}
