use ent_client::config::{Config, Credentials, RestApiConfig};
use ent_client::constants::{DEFAULT_BASE_URL, USER_AGENT};
use ent_client::error::AppError;
use std::env;
use std::io::Write;

#[test]
fn test_rest_api_default() {
    let rest_api = RestApiConfig::default();
    assert_eq!(rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(rest_api.user_agent, USER_AGENT);
}

#[test]
fn test_with_credentials_and_base_url() {
    let config = Config::with_credentials("jean.dupont", "secret").with_base_url("https://ent.test/");
    assert_eq!(config.credentials.username, "jean.dupont");
    assert_eq!(config.credentials.password, "secret");
    assert_eq!(config.rest_api.base_url, "https://ent.test/");
}

#[test]
fn test_config_from_environment() {
    unsafe {
        env::set_var("ENT_USERNAME", "env.user");
        env::set_var("ENT_PASSWORD", "env-pass");
        env::set_var("ENT_BASE_URL", "https://ent.example/");
    }

    let config = Config::new();
    assert_eq!(config.credentials.username, "env.user");
    assert_eq!(config.credentials.password, "env-pass");
    assert_eq!(config.rest_api.base_url, "https://ent.example/");

    unsafe {
        env::remove_var("ENT_USERNAME");
        env::remove_var("ENT_PASSWORD");
        env::remove_var("ENT_BASE_URL");
    }
}

#[test]
fn test_validate_rejects_empty_credentials() {
    assert!(Credentials::new("jean.dupont", "secret").validate().is_ok());
    assert!(matches!(
        Credentials::new("", "secret").validate(),
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        Credentials::new("jean.dupont", "").validate(),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn test_credentials_never_print_password() {
    let credentials = Credentials::new("jean.dupont", "hunter2");
    assert!(!format!("{credentials:?}").contains("hunter2"));
    assert!(!credentials.to_string().contains("hunter2"));

    let config = Config::with_credentials("jean.dupont", "hunter2");
    assert!(!format!("{config:?}").contains("hunter2"));
    assert!(!serde_json::to_string(&config).unwrap().contains("hunter2"));
}

#[test]
fn test_credentials_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"username": "jean.dupont", "password": "secret"}}"#).unwrap();

    let credentials = Credentials::from_json_file(file.path()).unwrap();
    assert_eq!(credentials, Credentials::new("jean.dupont", "secret"));
}

#[test]
fn test_credentials_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Credentials::from_json_file(dir.path().join("creds.json"));
    assert!(matches!(result, Err(AppError::Io(_))));
}
