//! Configuration tests
mod common;

use std::fs;

use http_to_curl::config::{Config, LogLevel};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{run, run_with_env, strip_colors, ExitStatus, MockEnvironment};

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_from_file() {
    let env = MockEnvironment::new();
    let path = env.write_config(
        r#"
[logging]
enabled = true
log_level = "notice"
channel = "outgoing"
"#,
    );

    let mut config = Config::from_toml_str(&fs::read_to_string(&path).unwrap()).unwrap();
    config.apply_env(|_| None).unwrap();

    assert!(config.logging.enabled);
    assert_eq!(config.logging.log_level, LogLevel::Info);
    assert_eq!(config.logging.channel, "outgoing");
}

#[test]
fn test_env_overrides_file() {
    let mut config = Config::from_toml_str("[logging]\nenabled = true\nlog_level = \"info\"\n").unwrap();
    config
        .apply_env(|key| match key {
            "HTTP_TO_CURL_LOGGING" => Some("off".to_string()),
            "HTTP_TO_CURL_LOG_LEVEL" => Some("critical".to_string()),
            _ => None,
        })
        .unwrap();

    assert!(!config.logging.enabled);
    assert_eq!(config.logging.log_level, LogLevel::Error);
    assert_eq!(config.logging.channel, "stack");
}

#[test]
fn test_missing_file_is_an_error() {
    let env = MockEnvironment::new();
    assert!(Config::load_from(Some(env.config_path().join("absent.toml").as_path())).is_err());
}

// ============================================================================
// Binary
// ============================================================================

#[tokio::test]
async fn test_config_file_enables_logging() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let env = MockEnvironment::new();
    env.write_config("[logging]\nenabled = true\nlog_level = \"info\"\nchannel = \"outgoing\"\n");

    let r = run_with_env(&["--send", &server.uri()], &env);

    assert_eq!(r.exit_status, ExitStatus::Success);
    let stderr = strip_colors(&r.stderr);
    assert!(stderr.contains("outgoing"), "{}", stderr);
    assert!(stderr.contains("-X 'GET'"), "{}", stderr);
}

#[tokio::test]
async fn test_env_disables_configured_logging() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut env = MockEnvironment::new();
    env.write_config("[logging]\nenabled = true\n");
    env.set_env("HTTP_TO_CURL_LOGGING", "0");

    let r = run_with_env(&["--send", &server.uri()], &env);

    assert_eq!(r.exit_status, ExitStatus::Success);
    assert!(!r.stderr.contains("curl "), "{}", r.stderr);
}

#[test]
fn test_explicit_config_flag() {
    let env = MockEnvironment::new();
    let path = env.config_path().join("custom.toml");
    fs::write(&path, "[logging]\nenabled = false\n").unwrap();

    let r = run(&["--config", path.to_str().unwrap(), "https://example.com"]);

    assert_eq!(r.exit_status, ExitStatus::Success);
    assert_eq!(r.stdout.trim_end(), "curl -X 'GET' 'https://example.com'");
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let env = MockEnvironment::new();
    env.write_config("[logging]\nlog_level = \"loud\"\n");

    let r = run_with_env(&["https://example.com"], &env);

    assert_eq!(r.exit_status, ExitStatus::Success);
    assert!(r.stderr.contains("Failed to load config"), "{}", r.stderr);
    assert!(r.contains("curl -X 'GET'"));
}
