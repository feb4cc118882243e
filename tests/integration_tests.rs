use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Home directory holding the given config.toml contents
fn home_with_config(contents: &str) -> TempDir {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("parallax");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), contents).unwrap();
    home
}

fn empty_home() -> TempDir {
    TempDir::new().unwrap()
}

fn parallax(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!();
    cmd.env("HOME", home);
    cmd
}

#[test]
fn test_cli_help_flag() {
    let home = empty_home();

    parallax(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Scroll a body of text under a collapsing parallax header",
        ))
        .stdout(predicate::str::contains("--image"))
        .stdout(predicate::str::contains("--body"));
}

#[test]
fn test_cli_version_flag() {
    let home = empty_home();

    parallax(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("parallax"));
}

#[test]
fn test_cli_with_nonexistent_image() {
    let home = empty_home();

    parallax(home.path())
        .args(["--image", "no-such-art.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read header image"));
}

#[test]
fn test_cli_with_blank_image() {
    let home = empty_home();

    parallax(home.path())
        .arg("--image")
        .arg(fixture_path("blank_art.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("is empty"));
}

#[test]
fn test_cli_with_nonexistent_body() {
    let home = empty_home();

    parallax(home.path())
        .args(["--body", "no-such-body.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read body text"));
}

#[test]
fn test_cli_rejects_empty_curve_in_config() {
    let home = home_with_config("[animation.translation]\ninput = []\noutput = []\n");

    parallax(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid animation curve"))
        .stderr(predicate::str::contains("no breakpoints"));
}

#[test]
fn test_cli_rejects_decreasing_curve_in_config() {
    let home = home_with_config(
        "[animation.title_opacity]\ninput = [0.0, 150.0, 120.0]\noutput = [1.0, 0.9, 0.0]\n",
    );

    parallax(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid animation curve"));
}

#[test]
fn test_cli_rejects_negative_header_height() {
    let home = home_with_config("[header]\nheight = -10.0\n");

    parallax(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid header height"))
        .stderr(predicate::str::contains("Invalid animation curve").not());
}

#[test]
fn test_cli_image_from_config_is_loaded_before_terminal() {
    let home = home_with_config("[header]\nimage = \"/no/such/parallax-art.txt\"\n");

    parallax(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("parallax-art.txt"));
}

#[test]
fn test_fixture_files_exist() {
    assert!(fixture_path("art.txt").exists());
    assert!(fixture_path("blank_art.txt").exists());
    assert!(fixture_path("body.txt").exists());
}

#[test]
fn test_fixture_body_parses_into_children() {
    let text = fs::read_to_string(fixture_path("body.txt")).unwrap();
    let children = parallax::content::parse_body(&text);

    assert_eq!(children.len(), 4);
    assert_eq!(children[2], parallax::content::ContentElement::Divider);
}

#[test]
fn test_fixture_art_loads_as_header_image() {
    let image = parallax::header::HeaderImage::from_file(&fixture_path("art.txt")).unwrap();

    match image {
        parallax::header::HeaderImage::Art(lines) => assert_eq!(lines.len(), 6),
        other => panic!("expected art, got {:?}", other),
    }
}
