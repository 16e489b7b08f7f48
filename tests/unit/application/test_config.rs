use educa_client::config::Config;
use educa_client::constants::{DEFAULT_STORAGE_DIR, SESSION_STORAGE_KEY};
use std::env;

#[test]
fn test_config_with_base_url() {
    let config = Config::with_base_url("http://127.0.0.1:9000/api");
    assert_eq!(config.rest_api.base_url, "http://127.0.0.1:9000/api");
    assert_eq!(config.rest_api.timeout, None);
    assert_eq!(config.storage.dir, DEFAULT_STORAGE_DIR);
    assert_eq!(config.storage.session_key, SESSION_STORAGE_KEY);
}

#[test]
fn test_config_from_env() {
    unsafe {
        env::set_var("EDUCA_API_BASE_URL", "https://staging.example.org/api");
        env::set_var("EDUCA_REST_TIMEOUT", "12");
        env::set_var("EDUCA_STORAGE_DIR", "/tmp/educa-test");
        env::set_var("EDUCA_SESSION_KEY", "usuario");

        let config = Config::new();
        assert_eq!(config.rest_api.base_url, "https://staging.example.org/api");
        assert_eq!(config.rest_api.timeout, Some(12));
        assert_eq!(config.storage.dir, "/tmp/educa-test");
        assert_eq!(config.storage.session_key, "usuario");

        env::remove_var("EDUCA_API_BASE_URL");
        env::remove_var("EDUCA_REST_TIMEOUT");
        env::remove_var("EDUCA_STORAGE_DIR");
        env::remove_var("EDUCA_SESSION_KEY");
    }
}

#[test]
fn test_config_serializes() {
    let config = Config::with_base_url("https://educa.tyjet.org/api");
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["rest_api"]["base_url"], "https://educa.tyjet.org/api");
    let back: Config = serde_json::from_value(value).unwrap();
    assert_eq!(back, config);
}
