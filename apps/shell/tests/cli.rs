use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const SAMPLE_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/techdeck.toml");

fn deck() -> Command {
    Command::new(env!("CARGO_BIN_EXE_deck"))
}

#[test]
fn no_arguments_prints_help() {
    deck().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn list_groups_by_sector_in_table_order() {
    let output = deck().args(["--config", SAMPLE_CONFIG, "list"]).assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).into_owned();

    let electricity = stdout.find("Electricity").expect("electricity heading");
    let heat = stdout.find("Heat\n").expect("heat heading");
    let transport = stdout.find("Transport").expect("transport heading");
    assert!(electricity < heat && heat < transport);

    assert!(stdout.contains("Solar PV [selected] [featured]"));
    assert!(stdout.contains("Combustion car\n"));
}

#[test]
fn list_selected_only() {
    deck()
        .args(["--config", SAMPLE_CONFIG, "list", "--selected"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Heat pump"))
        .stdout(predicate::str::contains("Transport").not());
}

#[test]
fn render_writes_html_to_stdout() {
    deck()
        .args(["--config", SAMPLE_CONFIG, "render", "--title", "Plant 7"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("<title>Plant 7</title>"))
        .stdout(predicate::str::contains("Onshore wind"))
        .stdout(predicate::str::contains("images/technology_images/solar.jpg"));
}

#[test]
fn render_toggle_marks_changed_cards() {
    deck()
        .args(["--config", SAMPLE_CONFIG, "render", "--toggle", "ev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("class=\"tech-card__marker"));
}

#[test]
fn render_to_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let out = dir.path().join("portfolio.html");

    deck()
        .args(["--config", SAMPLE_CONFIG, "render", "--only-selected", "--cols", "2", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fs::read_to_string(&out)?;
    assert!(html.contains("Heat pump"));
    assert!(!html.contains("Combustion car"));
    assert!(html.contains("calc(50% - 1rem)"));
    Ok(())
}

#[test]
fn missing_config_fails() {
    let dir = tempdir().expect("temp dir");
    deck()
        .args(["--config"])
        .arg(dir.path().join("absent.toml"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}

#[test]
fn environment_overrides_layout() {
    deck()
        .env("TECHDECK__LAYOUT__COLS", "4")
        .env("TECHDECK__LAYOUT__IMAGE_BASE", "/cdn")
        .args(["--config", SAMPLE_CONFIG, "render"])
        .assert()
        .success()
        .stdout(predicate::str::contains("calc(25% - 1rem)"))
        .stdout(predicate::str::contains("/cdn/solar.jpg"));
}

#[test]
fn unknown_command_line_ids_are_ignored() {
    deck()
        .args(["--config", SAMPLE_CONFIG, "render", "--toggle", "fusion", "--feature", "ev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Electric vehicle"))
        .stderr(predicate::str::contains("Ignoring unknown technology"));
}

#[test]
fn log_dir_receives_log_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let logs = dir.path().join("logs");

    deck()
        .args(["--config", SAMPLE_CONFIG, "-v", "list", "--log-dir"])
        .arg(&logs)
        .assert()
        .success();

    let files = fs::read_dir(&logs)?.count();
    assert!(files > 0, "a log file is created");
    Ok(())
}
