use assert_cmd::Command;
use predicates::prelude::*;

fn widgetz() -> Command {
    let mut cmd = Command::cargo_bin("widgetz").unwrap();
    for var in [
        "WIDGETZ_CONFIG_DIR",
        "WIDGETZ_BIND",
        "WIDGETZ_BASE_PATH",
        "WIDGETZ_DATA_FILE",
        "WIDGETZ_COMPAT_ROUTES",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_config_prints_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();

    widgetz()
        .arg("config")
        .arg("--config-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bind_addr\": \"127.0.0.1:8080\""))
        .stdout(predicate::str::contains("\"compat_routes\": false"));
}

#[test]
fn test_init_then_config_with_overrides() {
    let temp_dir = tempfile::tempdir().unwrap();

    widgetz()
        .arg("init")
        .arg("--config-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));
    assert!(temp_dir.path().join("config.json").exists());

    widgetz()
        .arg("config")
        .arg("--config-dir")
        .arg(temp_dir.path())
        .arg("--base-path")
        .arg("/rest")
        .arg("--compat-routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"base_path\": \"/rest\""))
        .stdout(predicate::str::contains("\"compat_routes\": true"));
}

#[test]
fn test_env_overrides_bind() {
    let temp_dir = tempfile::tempdir().unwrap();

    widgetz()
        .env("WIDGETZ_BIND", "0.0.0.0:9999")
        .arg("config")
        .arg("--config-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0.0.0:9999"));
}

#[test]
fn test_malformed_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("config.json"), "{oops").unwrap();

    widgetz()
        .arg("config")
        .arg("--config-dir")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}
