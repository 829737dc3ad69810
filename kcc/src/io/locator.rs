//! Script lookup across ordered library paths.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Abstraction over script lookup so executor tests can map names to paths
/// without a filesystem.
pub trait ScriptLocator {
    /// Return the first usable path for `script`, or `None` when no
    /// library path holds it.
    fn locate(&self, script: &str) -> Option<PathBuf>;
}

/// Locator searching an ordered list of library directories.
///
/// Earlier entries win; the orchestrator puts caller-supplied paths ahead
/// of config-supplied ones. A candidate must exist, be a regular file, and
/// be readable and executable.
#[derive(Debug, Clone)]
pub struct FsScriptLocator {
    library_paths: Vec<PathBuf>,
}

impl FsScriptLocator {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            library_paths: paths
                .into_iter()
                .map(|path| expand_home(path.as_ref()))
                .collect(),
        }
    }
}

impl ScriptLocator for FsScriptLocator {
    fn locate(&self, script: &str) -> Option<PathBuf> {
        for dir in &self.library_paths {
            let candidate = dir.join(script);
            debug!(candidate = %candidate.display(), "checking if script exists and is executable");
            if is_usable_script(&candidate) {
                debug!(found = %candidate.display(), "script located");
                return Some(candidate);
            }
        }
        None
    }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    PathBuf::from(path)
}

fn is_usable_script(path: &Path) -> bool {
    path.is_file() && is_readable_executable(path)
}

#[cfg(unix)]
fn is_readable_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match path.metadata() {
        Ok(metadata) => {
            let mode = metadata.permissions().mode();
            mode & 0o444 != 0 && mode & 0o111 != 0
        }
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_readable_executable(_path: &Path) -> bool {
    true
}
