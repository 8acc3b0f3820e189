//! Integration tests for the `rules` and `init` commands.

mod common;

use common::{CLEAN_DOC, TestFixture};
use predicates::prelude::*;

#[test]
fn rules_lists_every_check() {
    prose_guard!()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("RULE"))
        .stdout(predicate::str::contains("alt-text"))
        .stdout(predicate::str::contains("contraction"))
        .stdout(predicate::str::contains("file-read"));
}

#[test]
fn init_writes_loadable_config() {
    let fixture = TestFixture::new();

    prose_guard!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    assert!(fixture.path().join(".prose-guard.toml").exists());

    fixture.create_file("a.md", CLEAN_DOC);
    prose_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-color", "a.md"])
        .assert()
        .success();
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let fixture = TestFixture::new();
    fixture.create_config("[rules]\ndisabled = []\n");

    prose_guard!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    prose_guard!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn init_custom_output_path() {
    let fixture = TestFixture::new();
    let target = fixture.path().join("custom.toml");

    prose_guard!()
        .arg("init")
        .arg("--output")
        .arg(&target)
        .assert()
        .success();

    let content = std::fs::read_to_string(&target).unwrap();
    assert!(content.contains("[check]"));
}

#[test]
fn explicit_config_path_is_used() {
    let fixture = TestFixture::new();
    let config = fixture.create_file("conf/lint.toml", "[check]\nseverity = \"error\"\n");
    let doc = fixture.create_file("a.md", "We can't stop.\n");

    prose_guard!()
        .args(["check", "--no-color", "--config"])
        .arg(&config)
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total issues: 0"));
}

#[test]
fn missing_explicit_config_is_config_error() {
    let fixture = TestFixture::new();
    let doc = fixture.create_file("a.md", CLEAN_DOC);

    prose_guard!()
        .args(["check", "--config"])
        .arg(fixture.path().join("nope.toml"))
        .arg(&doc)
        .assert()
        .code(2);
}
