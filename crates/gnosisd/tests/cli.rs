//! Integration tests for the gnosis CLI commands.
//!
//! None of these reach the network: they cover setup, the catalog commands, and
//! URLs that are rejected before any request is made.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::{tempdir, TempDir};

// Helper function to create a clean command instance
fn gnosis() -> Command { Command::cargo_bin("gnosis").unwrap() }

// Helper to set up a configuration whose catalog lives in a temporary directory
fn initialized() -> (TempDir, PathBuf) {
  let dir = tempdir().unwrap();
  let config_path = dir.path().join("config.toml");

  gnosis()
    .arg("init")
    .arg("--config")
    .arg(&config_path)
    .arg("--db-path")
    .arg(dir.path().join("gnosis.db"))
    .arg("--accept-defaults")
    .assert()
    .success()
    .stdout(predicate::str::contains("Created gnosis configuration"));

  (dir, config_path)
}

#[test]
#[serial]
fn test_init_creates_config_and_catalog() {
  let (dir, config_path) = initialized();
  assert!(config_path.exists());
  assert!(dir.path().join("gnosis.db").exists());

  let config = std::fs::read_to_string(&config_path).unwrap();
  assert!(config.contains("gnosis.db"));

  // Re-running over an existing configuration asks first; defaults overwrite
  gnosis()
    .arg("init")
    .arg("--config")
    .arg(&config_path)
    .arg("--db-path")
    .arg(dir.path().join("other.db"))
    .arg("--accept-defaults")
    .assert()
    .success();
  assert!(dir.path().join("other.db").exists());
}

#[test]
#[serial]
fn test_search_empty_catalog() {
  let (_dir, config_path) = initialized();

  gnosis()
    .arg("search")
    .arg("attention")
    .arg("--config")
    .arg(&config_path)
    .assert()
    .success()
    .stdout(predicate::str::contains("No papers found"));
}

#[test]
#[serial]
fn test_show_missing_paper() {
  let (_dir, config_path) = initialized();

  gnosis()
    .arg("show")
    .arg("1")
    .arg("--config")
    .arg(&config_path)
    .assert()
    .failure()
    .stderr(predicate::str::contains("No paper with id 1 in the catalog"));
}

#[test]
#[serial]
fn test_import_unsupported_site() {
  let (_dir, config_path) = initialized();

  gnosis()
    .arg("import")
    .arg("https://example.com/paper")
    .arg("--no-save")
    .arg("--config")
    .arg(&config_path)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Source website is not supported"));
}

#[test]
#[serial]
fn test_import_save_flags_conflict() {
  gnosis()
    .arg("import")
    .arg("https://arxiv.org/abs/1706.03762")
    .arg("--save")
    .arg("--no-save")
    .assert()
    .failure()
    .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
#[serial]
fn test_batch_reports_each_url() {
  let (dir, config_path) = initialized();
  let list = dir.path().join("papers.txt");
  std::fs::write(&list, "# reading list\n\nhttps://example.com/a\n  \nexample.org/b\n").unwrap();

  gnosis()
    .arg("batch")
    .arg(&list)
    .arg("--config")
    .arg(&config_path)
    .assert()
    .failure()
    .stdout(predicate::str::contains("https://example.com/a: Source website is not supported"))
    .stdout(predicate::str::contains("example.org/b: Source website is not supported"))
    .stdout(predicate::str::contains("Imported 0 of 2 URLs"))
    .stderr(predicate::str::contains("2 of 2 URLs could not be imported"));
}

#[test]
#[serial]
fn test_batch_without_urls() {
  let (dir, config_path) = initialized();
  let list = dir.path().join("empty.txt");
  std::fs::write(&list, "# nothing yet\n\n").unwrap();

  gnosis()
    .arg("batch")
    .arg(&list)
    .arg("--config")
    .arg(&config_path)
    .assert()
    .success()
    .stdout(predicate::str::contains("No URLs listed"));
}
