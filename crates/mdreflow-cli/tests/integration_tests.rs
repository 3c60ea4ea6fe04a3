//! Integration tests for mdreflow-cli.
//!
//! Every test runs the real binary inside a fresh temporary repository with
//! HOME and the config directory pointed into it, so no user configuration
//! leaks in.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const LONG_PARAGRAPH: &str = "Markdown documents collect long lines over time, and this one \
                              keeps going well past the eighty column limit so that it needs wrapping.";

fn mdreflow(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("mdreflow");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .env_remove("MDREFLOW_WRAP__MAX_WIDTH");
    cmd
}

fn write(root: &Path, rel: &str, content: impl AsRef<[u8]>) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

fn max_line_len(text: &str) -> usize {
    text.lines().map(|l| l.chars().count()).max().unwrap_or(0)
}

/// README with one long paragraph, a short guide, an excluded document and
/// a markdown file outside the searched locations.
fn sample_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "README.md", format!("# Project\n\n{LONG_PARAGRAPH}\n"));
    write(root, "docs/guide.md", "# Guide\n\nShort enough.\n");
    write(root, "docs/node_modules/pkg/README.md", format!("{LONG_PARAGRAPH}\n"));
    write(root, "notes.md", format!("{LONG_PARAGRAPH}\n"));
    temp
}

#[test]
fn help_flag() {
    let temp = TempDir::new().unwrap();
    mdreflow(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown"))
        .stdout(predicate::str::contains("fix"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    mdreflow(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn fix_rewrites_discovered_documents() {
    let temp = sample_repo();
    let root = temp.path();

    mdreflow(root)
        .arg("fix")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 markdown files to process"))
        .stdout(predicate::str::contains("Fixed line length issues in README.md"))
        .stdout(predicate::str::contains("Fixed line length issues in 1 files"));

    let readme = read(root, "README.md");
    assert!(max_line_len(&readme) <= 80);
    assert!(readme.starts_with("# Project\n\n"));
    assert!(readme.ends_with('\n'));

    // Untouched: excluded, outside discovery, already short.
    assert_eq!(read(root, "docs/guide.md"), "# Guide\n\nShort enough.\n");
    assert_eq!(
        read(root, "docs/node_modules/pkg/README.md"),
        format!("{LONG_PARAGRAPH}\n")
    );
    assert_eq!(read(root, "notes.md"), format!("{LONG_PARAGRAPH}\n"));
}

#[test]
fn fix_twice_changes_nothing_the_second_time() {
    let temp = sample_repo();
    let root = temp.path();

    mdreflow(root).arg("fix").assert().success();
    let first = read(root, "README.md");

    mdreflow(root)
        .arg("fix")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed line length issues in 0 files"));
    assert_eq!(read(root, "README.md"), first);
}

#[test]
fn fix_explicit_path_and_width() {
    let temp = sample_repo();
    let root = temp.path();

    mdreflow(root)
        .args(["fix", "notes.md", "--width", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 markdown files to process"))
        .stdout(predicate::str::contains("Fixed line length issues in notes.md"));

    assert!(max_line_len(&read(root, "notes.md")) <= 40);
    assert_eq!(
        read(root, "README.md"),
        format!("# Project\n\n{LONG_PARAGRAPH}\n")
    );
}

#[test]
fn fix_with_root_flag() {
    let temp = sample_repo();
    let elsewhere = TempDir::new().unwrap();

    mdreflow(elsewhere.path())
        .args(["fix", "--root"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed line length issues in README.md"));

    assert!(max_line_len(&read(temp.path(), "README.md")) <= 80);
}

#[test]
fn unreadable_document_does_not_abort_run() {
    let temp = sample_repo();
    let root = temp.path();
    write(root, "docs/binary.md", [0xff, 0xfe, 0x00, 0x80]);

    mdreflow(root)
        .arg("fix")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 markdown files to process"))
        .stdout(predicate::str::contains("Fixed line length issues in 1 files"))
        .stderr(predicate::str::contains("Skipped docs/binary.md"));

    assert!(max_line_len(&read(root, "README.md")) <= 80);
}

#[test]
fn skipped_document_is_reported_in_quiet_mode() {
    let temp = sample_repo();
    let root = temp.path();
    write(root, "docs/binary.md", [0xff, 0xfe, 0x00, 0x80]);

    mdreflow(root)
        .args(["-q", "fix"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Skipped docs/binary.md"));
}

#[test]
fn code_and_tables_survive_fix() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let code = format!("let s = \"{}\";", "x".repeat(120));
    let table = format!("| {} |", "cell ".repeat(30));
    let doc = format!("```rust\n{code}\n```\n\n{table}\n\n    {code}\n");
    write(root, "README.md", &doc);

    mdreflow(root)
        .arg("fix")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed line length issues in 0 files"));
    assert_eq!(read(root, "README.md"), doc);
}

#[test]
fn check_reports_without_writing() {
    let temp = sample_repo();
    let root = temp.path();

    mdreflow(root)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Would fix line length issues in README.md"))
        .stdout(predicate::str::contains("1 of 2 files exceed 80 columns"));

    assert_eq!(
        read(root, "README.md"),
        format!("# Project\n\n{LONG_PARAGRAPH}\n")
    );
}

#[test]
fn check_passes_on_clean_repository() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "README.md", "# Fine\n\nShort.\n");

    mdreflow(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All 1 files fit within 80 columns"));
}

#[test]
fn check_with_json_summary() {
    let temp = sample_repo();

    let assert = mdreflow(temp.path())
        .args(["--output-format", "json", "check"])
        .assert()
        .code(1);

    let summary: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(summary["mode"], "check");
    assert_eq!(summary["width"], 80);
    assert_eq!(summary["found"], 2);
    assert_eq!(summary["modified"].as_array().unwrap().len(), 1);
}

#[test]
fn list_prints_discovered_documents_in_order() {
    let temp = sample_repo();
    write(temp.path(), "CHANGELOG.md", "# Changes\n");

    mdreflow(temp.path())
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout("README.md\nCHANGELOG.md\ndocs/guide.md\n");
}

#[test]
fn list_json() {
    let temp = sample_repo();

    let assert = mdreflow(temp.path())
        .args(["list", "--format", "json"])
        .assert()
        .success();

    let names: Vec<String> = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(names, vec!["README.md", "docs/guide.md"]);
}

#[test]
fn environment_sets_width() {
    let temp = sample_repo();

    mdreflow(temp.path())
        .env("MDREFLOW_WRAP__MAX_WIDTH", "200")
        .arg("check")
        .assert()
        .success();

    mdreflow(temp.path())
        .env("MDREFLOW_WRAP__MAX_WIDTH", "200")
        .args(["config", "get", "wrap.max_width"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wrap.max_width = 200"));
}

#[test]
fn local_config_file_is_used() {
    let temp = sample_repo();
    let root = temp.path();
    write(
        root,
        ".mdreflow.toml",
        "[discovery]\nroot_files = [\"notes.md\"]\ndirectories = []\n",
    );

    mdreflow(root)
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout("notes.md\n");
}

#[test]
fn explicit_config_file_is_used() {
    let temp = sample_repo();
    let root = temp.path();
    write(root, "custom.toml", "[wrap]\nmax_width = 50\n");

    mdreflow(root)
        .args(["--config", "custom.toml", "fix"])
        .assert()
        .success();

    assert!(max_line_len(&read(root, "README.md")) <= 50);
}

#[test]
fn config_path_reports_file_in_effect() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    mdreflow(root)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No config file found"));

    write(root, ".mdreflow.toml", "[wrap]\nmax_width = 100\n");
    mdreflow(root)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(".mdreflow.toml\n");

    write(root, "custom.toml", "[wrap]\nmax_width = 50\n");
    mdreflow(root)
        .args(["--config", "custom.toml", "config", "path"])
        .assert()
        .success()
        .stdout("custom.toml\n");
}

#[test]
fn init_local_writes_default_config() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    mdreflow(root).args(["init", "--local"]).assert().success();
    let written = read(root, ".mdreflow.toml");
    assert!(written.contains("max_width = 80"));
    assert!(written.contains("node_modules"));

    // Second run leaves the file alone without --force.
    write(root, ".mdreflow.toml", "[wrap]\nmax_width = 99\n");
    mdreflow(root)
        .args(["init", "--local"])
        .assert()
        .success()
        .stderr(predicate::str::contains("--force"));
    assert_eq!(read(root, ".mdreflow.toml"), "[wrap]\nmax_width = 99\n");

    mdreflow(root)
        .args(["init", "--local", "--force"])
        .assert()
        .success();
    assert!(read(root, ".mdreflow.toml").contains("max_width = 80"));
}

#[test]
fn quiet_flag_silences_progress() {
    let temp = sample_repo();

    mdreflow(temp.path())
        .args(["-q", "fix"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn verbose_flag_logs_progress() {
    let temp = sample_repo();

    mdreflow(temp.path())
        .args(["-v", "fix"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"));
}

#[test]
fn shell_completions() {
    let temp = TempDir::new().unwrap();
    mdreflow(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mdreflow"));
}
