use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::scanner::GlobFilter;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn should_include(&self, _path: &Path) -> bool {
        true
    }
}

fn markdown_filter() -> GlobFilter {
    GlobFilter::new(vec!["md".to_string()], &[]).unwrap()
}

#[test]
fn finds_files_in_subdirectories_sorted() {
    let temp_dir = TempDir::new().unwrap();
    let sub = temp_dir.path().join("guide");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("b.md"), "").unwrap();
    fs::write(temp_dir.path().join("z.md"), "").unwrap();
    fs::write(sub.join("a.md"), "").unwrap();

    let files = DirectoryScanner::new(AcceptAllFilter)
        .scan(temp_dir.path())
        .unwrap();

    let names: Vec<_> = files
        .iter()
        .map(|p| p.strip_prefix(temp_dir.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        names,
        vec![
            Path::new("guide").join("a.md"),
            Path::new("guide").join("b.md"),
            Path::new("z.md").to_path_buf(),
        ]
    );
}

#[test]
fn respects_filter() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("intro.md"), "").unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "").unwrap();

    let files = DirectoryScanner::new(markdown_filter())
        .scan(temp_dir.path())
        .unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("intro.md"));
}

#[test]
fn empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let files = DirectoryScanner::new(AcceptAllFilter)
        .scan(temp_dir.path())
        .unwrap();
    assert!(files.is_empty());
}

#[test]
fn gitignore_is_honored_when_enabled() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".gitignore"), "build/\n").unwrap();
    let build = temp_dir.path().join("build");
    fs::create_dir(&build).unwrap();
    fs::write(build.join("out.md"), "").unwrap();
    fs::write(temp_dir.path().join("intro.md"), "").unwrap();

    let with = DirectoryScanner::with_gitignore(markdown_filter(), true)
        .scan(temp_dir.path())
        .unwrap();
    let without = DirectoryScanner::with_gitignore(markdown_filter(), false)
        .scan(temp_dir.path())
        .unwrap();

    assert_eq!(with.len(), 1);
    assert_eq!(without.len(), 2);
}
