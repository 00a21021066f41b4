//! Integration tests for the fleetpulse binary.

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_config_init_creates_and_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("fleetpulse.toml");

    Command::cargo_bin("fleetpulse")
        .unwrap()
        .args(["config", "init", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("[api]"));
    assert!(content.contains("[live]"));

    Command::cargo_bin("fleetpulse")
        .unwrap()
        .args(["config", "init", "-o"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_theme_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("theme.toml");

    Command::cargo_bin("fleetpulse")
        .unwrap()
        .args(["theme", "dark", "-f"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));

    Command::cargo_bin("fleetpulse")
        .unwrap()
        .args(["theme", "status", "-f"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("theme: dark"));

    Command::cargo_bin("fleetpulse")
        .unwrap()
        .args(["theme", "toggle", "-f"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));
}

#[test]
fn test_refresh_against_mock_api() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/trucks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"truck_number": "KA-01-1234", "driver_name": "Asha", "status": "In Transit"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/api/real_weather/.+/.+$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "condition": "Clear", "temperature": 28.0, "humidity": 60
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/traffic_status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "level": "Medium", "delay_minutes": 12
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/maintenance_alerts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "alerts": []
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/employee_tracking"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        server
    });

    Command::cargo_bin("fleetpulse")
        .unwrap()
        .args(["refresh", "--api-url"])
        .arg(server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("KA-01-1234"))
        .stdout(predicate::str::contains("1 vehicles"));

    Command::cargo_bin("fleetpulse")
        .unwrap()
        .args(["refresh", "--json", "--api-url"])
        .arg(server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"truck_number\": \"KA-01-1234\""));
}

#[test]
fn test_refresh_reports_unreachable_api() {
    Command::cargo_bin("fleetpulse")
        .unwrap()
        .args(["refresh", "--api-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
