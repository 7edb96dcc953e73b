//! CLI integration tests
//!
//! End-to-end tests for CLI commands using assert_cmd. Every command runs in
//! a temp directory with `VITALIS_*` variables cleared so the host
//! environment cannot leak in.

mod common;

use assert_cmd::Command;
use common::*;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get the vitalis binary for testing
fn vitalis_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vitalis").unwrap();
    cmd.current_dir(dir.path());
    for var in [
        "VITALIS_PORT",
        "VITALIS_HOST",
        "VITALIS_LOG_LEVEL",
        "VITALIS_LOG_FORMAT",
        "VITALIS_DATASET",
        "VITALIS_MODEL",
        "VITALIS_FALLBACK_URL",
        "OPENROUTER_API_KEY",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_version_output() {
    let dir = TempDir::new().unwrap();
    vitalis_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vitalis"));
}

#[test]
fn test_help_shows_all_commands() {
    let dir = TempDir::new().unwrap();
    vitalis_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("dataset"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_serve_help() {
    let dir = TempDir::new().unwrap();
    vitalis_cmd(&dir)
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--dataset"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = TempDir::new().unwrap();
    vitalis_cmd(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vitalis.toml"));

    let content = std::fs::read_to_string(dir.path().join("vitalis.toml")).unwrap();
    assert!(content.contains("[fallback]"));
}

#[test]
fn test_config_init_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("vitalis.toml"), "existing").unwrap();

    vitalis_cmd(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_ask_dataset_question_json() {
    let dir = TempDir::new().unwrap();
    let csv = fixture_csv_file();

    let output = vitalis_cmd(&dir)
        .args(["ask", "--json", "-d"])
        .arg(csv.path())
        .arg("Qual o país com menor expectativa de vida?")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["source"]["kind"], "dataset");
    assert!(parsed["answer"].as_str().unwrap().contains("**Chad**"));
}

#[test]
fn test_ask_without_key_prints_error_marker() {
    let dir = TempDir::new().unwrap();
    let csv = fixture_csv_file();

    vitalis_cmd(&dir)
        .args(["ask", "-d"])
        .arg(csv.path())
        .arg("Quem descobriu a penicilina?")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Erro na API: "));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ask_fallback_question_via_env() {
    let server = MockServer::start().await;
    let question = "Quem descobriu a penicilina?";

    Mock::given(method("POST"))
        .and(header("authorization", "Bearer sk-env"))
        .and(body_json(serde_json::json!({
            "model": "env/model",
            "messages": [{"role": "user", "content": question}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Alexander Fleming.")))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let csv = fixture_csv_file();

    vitalis_cmd(&dir)
        .env("VITALIS_FALLBACK_URL", server.uri())
        .env("VITALIS_MODEL", "env/model")
        .env("OPENROUTER_API_KEY", "sk-env")
        .args(["ask", "-d"])
        .arg(csv.path())
        .arg(question)
        .assert()
        .success()
        .stdout(predicate::str::contains("Alexander Fleming."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ask_blank_question_rejected_before_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let csv = fixture_csv_file();

    vitalis_cmd(&dir)
        .env("VITALIS_FALLBACK_URL", server.uri())
        .env("OPENROUTER_API_KEY", "sk-env")
        .args(["ask", "-d"])
        .arg(csv.path())
        .arg("   ")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("question must not be empty"));
}

#[test]
fn test_chat_without_key_reports_once() {
    let dir = TempDir::new().unwrap();
    let csv = fixture_csv_file();

    vitalis_cmd(&dir)
        .args(["chat", "--no-typing", "-d"])
        .arg(csv.path())
        .write_stdin("/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("/help (ajuda)"))
        .stderr(predicate::function(|err: &str| {
            err.matches("OPENROUTER_API_KEY").count() == 1
        }));
}

#[test]
fn test_ask_missing_dataset_fails() {
    let dir = TempDir::new().unwrap();
    vitalis_cmd(&dir)
        .args(["ask", "-d", "missing.csv", "Olá"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_dataset_countries_in_file_order() {
    let dir = TempDir::new().unwrap();
    let csv = fixture_csv_file();

    vitalis_cmd(&dir)
        .args(["dataset", "countries", "-d"])
        .arg(csv.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(FIXTURE_COUNTRIES.join("\n") + "\n"));
}

#[test]
fn test_dataset_country_series_table() {
    let dir = TempDir::new().unwrap();
    let csv = fixture_csv_file();

    vitalis_cmd(&dir)
        .args(["dataset", "country", "japan", "-d"])
        .arg(csv.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Japan"))
        .stdout(predicate::str::contains("2014"))
        .stdout(predicate::str::contains("84.00"));
}

#[test]
fn test_dataset_country_unknown_fails() {
    let dir = TempDir::new().unwrap();
    let csv = fixture_csv_file();

    vitalis_cmd(&dir)
        .args(["dataset", "country", "Atlantis", "-d"])
        .arg(csv.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Country not found: Atlantis"));
}

#[test]
fn test_dataset_describe_json() {
    let dir = TempDir::new().unwrap();
    let csv = fixture_csv_file();

    let output = vitalis_cmd(&dir)
        .args(["dataset", "describe", "--json", "-i", "life_expectancy", "-d"])
        .arg(csv.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let columns = parsed["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0]["summary"]["count"], 8);
    assert_eq!(columns[0]["summary"]["max"], 84.0);
}

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    vitalis_cmd(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vitalis"));
}
