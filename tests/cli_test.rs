use assert_cmd::Command;
use std::fs;

fn cleaner() -> Command {
    Command::cargo_bin("sql-directive-cleaner").unwrap()
}

#[test]
fn test_cleans_default_views_directory() {
    let dir = tempfile::tempdir().unwrap();
    let views = dir.path().join("sql").join("views").join("reports");
    fs::create_dir_all(&views).unwrap();
    fs::write(views.join("daily.sql"), "SELECT d -- type:date\nFROM x\n").unwrap();
    fs::write(views.join("weekly.sql"), "SELECT w -- week number\nFROM x\n").unwrap();

    let output = cleaner().current_dir(dir.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("daily.sql"));
    assert!(stdout.contains("type:date"));
    assert!(stdout.contains("2 files processed, cleaned 1"));
    assert_eq!(
        fs::read_to_string(views.join("daily.sql")).unwrap(),
        "SELECT d\nFROM x\n"
    );
    assert_eq!(
        fs::read_to_string(views.join("weekly.sql")).unwrap(),
        "SELECT w -- week number\nFROM x\n"
    );
}

#[test]
fn test_no_views_directory_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = cleaner().current_dir(dir.path()).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("0 files processed"));
}

#[test]
fn test_dry_run_flag_keeps_files() {
    let dir = tempfile::tempdir().unwrap();
    let views = dir.path().join("sql").join("views");
    fs::create_dir_all(&views).unwrap();
    fs::write(views.join("v.sql"), "SELECT a -- PK;\n").unwrap();

    let output = cleaner()
        .arg("--dry-run")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("would clean 1"));
    assert_eq!(
        fs::read_to_string(views.join("v.sql")).unwrap(),
        "SELECT a -- PK;\n"
    );
}

#[test]
fn test_print_config_as_json() {
    let output = cleaner().args(["--print-config", "json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["discovery_pattern"], "sql/views/**/*.sql");
    assert_eq!(value["directives"].as_array().unwrap().len(), 16);
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = cleaner()
        .args(["--config", "nope.toml"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
}
