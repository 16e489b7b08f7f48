use educa_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("EDUCA_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("EDUCA_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("EDUCA_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("EDUCA_MISSING_VAR");
        let result: String = get_env_or_default("EDUCA_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_blank_var() {
    unsafe {
        env::set_var("EDUCA_TEST_VAR_BLANK", "   ");
        let result: String = get_env_or_default("EDUCA_TEST_VAR_BLANK", "default".to_string());
        assert_eq!(result, "default");
        env::remove_var("EDUCA_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("EDUCA_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("EDUCA_TEST_VAR_INVALID", 30);
        assert_eq!(result, 30); // Should return default
        env::remove_var("EDUCA_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_with_existing_var() {
    unsafe {
        env::set_var("EDUCA_TEST_VAR_TIMEOUT", "15");
        let result: Option<u64> = get_env_or_none("EDUCA_TEST_VAR_TIMEOUT");
        assert_eq!(result, Some(15));
        env::remove_var("EDUCA_TEST_VAR_TIMEOUT");
    }
}

#[test]
fn test_get_env_or_none_with_invalid_parse() {
    unsafe {
        env::set_var("EDUCA_TEST_VAR_BAD_TIMEOUT", "soon");
        let result: Option<u64> = get_env_or_none("EDUCA_TEST_VAR_BAD_TIMEOUT");
        assert_eq!(result, None);
        env::remove_var("EDUCA_TEST_VAR_BAD_TIMEOUT");
    }
}
