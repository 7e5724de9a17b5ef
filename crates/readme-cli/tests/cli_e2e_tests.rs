//! CLI end-to-end tests that invoke the compiled `readme` binary.
//!
//! Repositories are built with `readme-test-utils`; the process locale and
//! config directory are isolated so the host environment cannot leak in.

use assert_cmd::Command;
use predicates::prelude::*;
use readme_test_utils::{TestRepo, TreeSpec};
use std::fs;
use tempfile::TempDir;

/// `readme` command with a clean locale and an empty config directory.
fn readme(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("readme").expect("readme binary should be built");
    cmd.env_remove("README_LOCALE")
        .env_remove("LC_ALL")
        .env_remove("LC_MESSAGES")
        .env_remove("LANG")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path());
    cmd
}

fn project_repo() -> TestRepo {
    let repo = TestRepo::new();
    repo.commit(
        &TreeSpec::new()
            .file("README.md", "# Project\n")
            .file("README.zh-cn.md", "# 项目\n")
            .file("src/lib.rs", "")
            .file("src/docs/README.md", "# Not reachable\n"),
        "Initial commit",
    );
    repo
}

fn docs_only_repo() -> TestRepo {
    let repo = TestRepo::new();
    repo.commit(
        &TreeSpec::new()
            .file("Cargo.toml", "")
            .file("docs/README.md", "# Docs\n")
            .file(".github/README.md", "# GitHub\n"),
        "Initial commit",
    );
    repo
}

// ============================================================================
// General
// ============================================================================

#[test]
fn test_help_exits_zero() {
    let home = TempDir::new().unwrap();
    readme(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("find"));
}

#[test]
fn test_not_a_repository() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    readme(&home)
        .args(["find", "--repo"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_unknown_revision_fails() {
    let home = TempDir::new().unwrap();
    let repo = project_repo();
    readme(&home)
        .args(["find", "--rev", "nope", "--repo"])
        .arg(repo.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Revision 'nope' not found"));
}

// ============================================================================
// find
// ============================================================================

#[test]
fn test_find_root_readme() {
    let home = TempDir::new().unwrap();
    let repo = project_repo();
    readme(&home)
        .args(["find", "--repo"])
        .arg(repo.root())
        .assert()
        .success()
        .stdout("README.md\n");
}

#[test]
fn test_find_localized_readme() {
    let home = TempDir::new().unwrap();
    let repo = project_repo();
    readme(&home)
        .args(["find", "--locale", "zh-CN", "--repo"])
        .arg(repo.root())
        .assert()
        .success()
        .stdout("README.zh-cn.md\n");
}

#[test]
fn test_locale_from_environment() {
    let home = TempDir::new().unwrap();
    let repo = project_repo();
    readme(&home)
        .env("LANG", "zh_CN.UTF-8")
        .args(["find", "--repo"])
        .arg(repo.root())
        .assert()
        .success()
        .stdout("README.zh-cn.md\n");
}

#[test]
fn test_locale_from_config_file() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("readme-locate");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "locale = \"zh-CN\"\n").unwrap();

    let repo = project_repo();
    readme(&home)
        .args(["find", "--repo"])
        .arg(repo.root())
        .assert()
        .success()
        .stdout("README.zh-cn.md\n");
}

#[test]
fn test_malformed_config_file_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(&config, "locale = [").unwrap();

    let repo = project_repo();
    readme(&home)
        .args(["find", "--config"])
        .arg(&config)
        .arg("--repo")
        .arg(repo.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_find_falls_back_to_docs() {
    let home = TempDir::new().unwrap();
    let repo = docs_only_repo();
    readme(&home)
        .args(["find", "--repo"])
        .arg(repo.root())
        .assert()
        .success()
        .stdout("docs/README.md\n");
}

#[test]
fn test_find_in_subdirectory_has_no_fallback() {
    let home = TempDir::new().unwrap();
    let repo = project_repo();
    readme(&home)
        .args(["find", "--path", "src", "--repo"])
        .arg(repo.root())
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No README found"));
}

#[test]
fn test_find_dotted_path() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::new();
    repo.commit(&TreeSpec::new().file("src/README.md", "# Src\n"), "Initial commit");

    readme(&home)
        .args(["find", "--path", "./src", "--json", "--repo"])
        .arg(repo.root())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""full_path": "src/README.md""#));
}

#[test]
fn test_find_path_above_root_fails() {
    let home = TempDir::new().unwrap();
    let repo = project_repo();
    readme(&home)
        .args(["find", "--path", "../x", "--repo"])
        .arg(repo.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tree path '../x'"));
}

#[test]
fn test_find_json() {
    let home = TempDir::new().unwrap();
    let repo = docs_only_repo();
    let output = readme(&home)
        .args(["find", "--json", "--repo"])
        .arg(repo.root())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    insta::assert_snapshot!(stdout.trim_end(), @r#"
    {
      "subfolder": "docs",
      "name": "README.md",
      "path": "docs/README.md",
      "full_path": "docs/README.md",
      "is_symlink": false,
      "target_id": "d0fa60edab3510b80d03fa4af708bea7a61cc4cd"
    }
    "#);
}

#[test]
fn test_find_json_without_match_is_null() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::new();
    repo.commit(&TreeSpec::new().file("main.rs", ""), "Initial commit");

    readme(&home)
        .args(["find", "--json", "--repo"])
        .arg(repo.root())
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn test_find_content_follows_link() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::new();
    repo.commit(
        &TreeSpec::new()
            .symlink("README.md", "docs/GUIDE.md")
            .file("docs/GUIDE.md", "# Guide\n"),
        "Initial commit",
    );

    readme(&home)
        .args(["find", "--content", "--repo"])
        .arg(repo.root())
        .assert()
        .success()
        .stdout("# Guide\n");
}

#[test]
fn test_find_custom_markup_extension() {
    let home = TempDir::new().unwrap();
    let repo = TestRepo::new();
    repo.commit(
        &TreeSpec::new()
            .file("README.md", "md")
            .file("README.rst", "rst"),
        "Initial commit",
    );

    readme(&home)
        .args(["find", "--markup-ext", "rst", "--repo"])
        .arg(repo.root())
        .assert()
        .success()
        .stdout("README.rst\n");
}

// ============================================================================
// extensions
// ============================================================================

#[test]
fn test_extensions_without_locale() {
    let home = TempDir::new().unwrap();
    readme(&home)
        .args(["extensions"])
        .assert()
        .success()
        .stdout(".md\n.txt\n(none)\n.*\n");
}

#[test]
fn test_extensions_with_locale_env() {
    let home = TempDir::new().unwrap();
    readme(&home)
        .env("README_LOCALE", "en")
        .args(["extensions"])
        .assert()
        .success()
        .stdout(".en.md\n.md\n.txt\n(none)\n.*\n");
}
