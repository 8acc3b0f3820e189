mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::config::ScannerConfig;
use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// One path to lint, tagged with whether it existed when inputs were collected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Input {
    Found(PathBuf),
    Missing(PathBuf),
}

impl Input {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Found(path) | Self::Missing(path) => path,
        }
    }

    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }

    #[must_use]
    pub fn into_path(self) -> PathBuf {
        match self {
            Self::Found(path) | Self::Missing(path) => path,
        }
    }
}

/// Build the scanner described by `config`.
///
/// # Errors
/// Returns an error if an exclude pattern is invalid.
pub fn scanner_from_config(config: &ScannerConfig) -> Result<DirectoryScanner<GlobFilter>> {
    let filter = GlobFilter::new(config.extensions.clone(), &config.exclude)?;
    Ok(DirectoryScanner::with_gitignore(filter, config.gitignore))
}

/// Expand command-line paths into the files to lint.
///
/// Directories are scanned recursively; files named explicitly are kept
/// whatever their extension, and paths that do not exist are kept as
/// [`Input::Missing`] at their argument position. Paths are deduplicated and
/// keep argument order.
///
/// # Errors
/// Returns an error if a directory cannot be scanned.
pub fn collect_inputs<S: FileScanner>(paths: &[PathBuf], scanner: &S) -> Result<Vec<Input>> {
    let mut inputs = IndexSet::new();

    for path in paths {
        if path.is_dir() {
            inputs.extend(scanner.scan(path)?.into_iter().map(Input::Found));
        } else if path.exists() {
            inputs.insert(Input::Found(path.clone()));
        } else {
            inputs.insert(Input::Missing(path.clone()));
        }
    }

    Ok(inputs.into_iter().collect())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
