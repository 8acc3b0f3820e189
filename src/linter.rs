use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::aggregate::{FileReport, FindingSet};
use crate::checker::CheckRegistry;
use crate::context::Document;
use crate::finding::Finding;

/// Runs every registered check against a document and merges the results.
pub struct Linter {
    registry: CheckRegistry,
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(CheckRegistry::default())
    }
}

impl Linter {
    #[must_use]
    pub const fn new(registry: CheckRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    #[must_use]
    pub fn lint_document(&self, doc: &Document) -> FindingSet {
        let findings = self
            .registry
            .iter()
            .flat_map(|check| check.check(doc))
            .collect();
        FindingSet::from_unsorted(findings)
    }

    #[must_use]
    pub fn lint_source(&self, source: &str) -> FindingSet {
        self.lint_document(&Document::from_source(source))
    }

    /// Lint a file on disk.
    ///
    /// Never fails: a file that cannot be read yields a single line-0
    /// `file-read` error finding instead.
    #[must_use]
    pub fn lint_path(&self, path: &Path) -> FileReport {
        let findings = match fs::read(path) {
            Ok(bytes) => {
                let doc = Document::from_bytes(&bytes);
                let unreadable = doc.unreadable_lines();
                if unreadable > 0 {
                    warn!(
                        path = %path.display(),
                        lines = unreadable,
                        "skipping lines that are not valid UTF-8"
                    );
                }
                debug!(path = %path.display(), lines = doc.len(), "linting");
                self.lint_document(&doc)
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "read failed");
                FindingSet::from_unsorted(vec![Finding::file_read(&e.to_string())])
            }
        };
        FileReport::new(path.to_path_buf(), findings)
    }
}

#[cfg(test)]
#[path = "linter_tests.rs"]
mod tests;
