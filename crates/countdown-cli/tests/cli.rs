//! End-to-end tests driving the `countdown` binary.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const SAMPLE: &str = "\
# comment
2020-01-01 New Year
- Deadlines
2099-12-31! Final deadline
";

fn countdown_binary() -> String {
    env!("CARGO_BIN_EXE_countdown").to_string()
}

/// A `countdown` command isolated to `home`, with a fixed reporting day.
fn countdown(home: &Path) -> Command {
    let mut command = Command::new(countdown_binary());
    command
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("COUNTDOWN_FILE")
        .env_remove("COUNTDOWN_DISPLAY")
        .env_remove("RUST_LOG")
        .arg("--today")
        .arg("2024-06-01");
    command
}

fn home_with(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".countdownrc"), content).unwrap();
    temp
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "countdown should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_reads_countdownrc_from_home() {
    let home = home_with(SAMPLE);
    let output = countdown(home.path()).output().unwrap();

    assert_eq!(
        stdout(&output),
        "-- Default Group ---------------------------------\n\
         \x20 1613 days ago  - New Year\n\
         \n\
         -- Deadlines -------------------------------------\n\
         \x2027607 days left - Final deadline\n"
    );
}

#[test]
fn test_explicit_file_and_unit_flag() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("events.txt");
    std::fs::write(&file, "2024-07-01 Launch\n").unwrap();

    let output = countdown(home.path()).arg(&file).arg("-m").output().unwrap();
    assert_eq!(
        stdout(&output),
        "-- Default Group ---------------------------------\n\
         \x201.00 months left - Launch\n"
    );
}

#[test]
fn test_unit_flags_conflict() {
    let home = home_with(SAMPLE);
    let output = countdown(home.path()).arg("-d").arg("-y").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_malformed_line_fails_without_output() {
    let home = home_with("2020-01-01 New Year\n2023-13-40 Bad Date\n");
    let output = countdown(home.path()).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "no partial report expected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid event format: 2023-13-40 Bad Date"),
        "stderr was: {stderr}"
    );
}

#[test]
fn test_missing_file_fails() {
    let home = TempDir::new().unwrap();
    let output = countdown(home.path()).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"), "stderr was: {stderr}");
    assert!(stderr.contains(".countdownrc"), "stderr was: {stderr}");
}

#[test]
fn test_json_output() {
    let home = home_with(SAMPLE);
    let output = countdown(home.path()).arg("--json").output().unwrap();

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["today"], "2024-06-01");
    assert_eq!(value["sections"][1]["title"], "Deadlines");
    assert_eq!(value["sections"][1]["events"][0]["days"], 27607);
}

#[test]
fn test_check_lists_bad_lines() {
    let home = home_with("2020-01-01 ok\nnot a date\n- S\n2024-02-30 Leap\n");
    let output = countdown(home.path()).arg("--check").output().unwrap();

    assert!(!output.status.success());
    let out = String::from_utf8_lossy(&output.stdout);
    assert!(out.contains("line 2: invalid start date: not: not a date"), "{out}");
    assert!(out.contains("line 4: invalid start date: 2024-02-30: 2024-02-30 Leap"), "{out}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("2 malformed line(s)"), "{stderr}");
}

#[test]
fn test_check_ok() {
    let home = home_with(SAMPLE);
    let output = countdown(home.path()).arg("--check").output().unwrap();
    assert_eq!(stdout(&output), "ok: 2 events in 2 sections\n");
}

#[test]
fn test_config_file_sets_display() {
    let home = home_with(SAMPLE);
    let config = home.path().join("countdown.toml");
    std::fs::write(&config, "display = \"years\"\n").unwrap();

    let output = countdown(home.path())
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    let out = stdout(&output);
    assert!(out.contains(" 4.42 years ago  - New Year"), "{out}");
}

#[test]
fn test_env_then_flag_precedence() {
    let home = home_with(SAMPLE);

    let output = countdown(home.path())
        .env("COUNTDOWN_DISPLAY", "months")
        .output()
        .unwrap();
    assert!(stdout(&output).contains("53.77 months ago  - New Year"));

    let output = countdown(home.path())
        .env("COUNTDOWN_DISPLAY", "months")
        .arg("-d")
        .output()
        .unwrap();
    assert!(stdout(&output).contains("  1613 days ago  - New Year"));
}

#[test]
fn test_env_accepts_short_display_alias() {
    let home = home_with(SAMPLE);

    let output = countdown(home.path())
        .env("COUNTDOWN_DISPLAY", "m")
        .output()
        .unwrap();
    assert!(stdout(&output).contains("53.77 months ago  - New Year"));
}

#[test]
fn test_bare_date_line_is_reported() {
    let home = home_with("2024-01-01\n");

    let output = countdown(home.path()).output().unwrap();
    assert_eq!(
        stdout(&output),
        "-- Default Group ---------------------------------\n\
         \x20  152 days ago  - \n"
    );
}

#[test]
fn test_env_selects_file() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("elsewhere");
    std::fs::write(&file, "2024-06-11 Soon\n").unwrap();

    let output = countdown(home.path())
        .env("COUNTDOWN_FILE", &file)
        .output()
        .unwrap();
    assert!(stdout(&output).contains("    10 days left - Soon"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_dir_is_read() {
    let home = home_with(SAMPLE);
    let config_dir = home.path().join(".config").join("countdown");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "display = \"months\"\n").unwrap();

    let output = countdown(home.path()).output().unwrap();
    assert!(stdout(&output).contains("53.77 months ago  - New Year"));
}
