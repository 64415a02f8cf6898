use std::path::{Path, PathBuf};

use tracing::debug;

/// Ordered include directories. The first directory holding `{dir}/{name}`
/// wins, even for absolute names; the name itself, relative to the working
/// directory, is the last resort.
#[derive(Debug, Clone, Default)]
pub struct IncludePaths {
    dirs: Vec<PathBuf>,
}

impl IncludePaths {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        for dir in &self.dirs {
            let candidate = dir.join(name.trim_start_matches('/'));
            if candidate.is_file() {
                debug!(file = name, path = %candidate.display(), "resolved from include path");
                return Some(candidate);
            }
        }

        let literal = Path::new(name);
        if literal.is_file() {
            debug!(file = name, "resolved relative to working directory");
            return Some(literal.to_path_buf());
        }

        None
    }
}
