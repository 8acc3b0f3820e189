#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the prose-guard binary.
///
/// Logging is pinned to errors only so stderr assertions are stable.
#[macro_export]
macro_rules! prose_guard {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("prose-guard"));
        cmd.env("PROSE_GUARD_LOG", "error").env_remove("NO_COLOR");
        cmd
    }};
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, returning its full path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".prose-guard.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Prose with no findings under the default rules.
pub const CLEAN_DOC: &str = "# Overview\n\nThis guide explains how the service starts.\n";

/// One finding from each severity.
pub const MIXED_DOC: &str = "\
# Overview

We can't stop here.

It was completed yesterday.

![](diagram.png)
";
