use super::*;

#[test]
fn new_trims_trailing_slashes() {
    assert_eq!(ApiConfig::new("http://api.local:5000///").base_url(), "http://api.local:5000");
}

#[test]
fn new_blank_uses_default() {
    assert_eq!(ApiConfig::new("   ").base_url(), DEFAULT_API_BASE);
}

#[test]
fn url_joins_absolute_path() {
    let config = ApiConfig::new("http://localhost:5000");
    assert_eq!(config.url("/tasks"), "http://localhost:5000/tasks");
}

#[test]
fn url_inserts_missing_separator() {
    let config = ApiConfig::new("http://localhost:5000/");
    assert_eq!(config.url("users"), "http://localhost:5000/users");
}

#[test]
fn from_build_env_is_normalized() {
    let config = ApiConfig::from_build_env();
    assert!(!config.base_url().ends_with('/'));
    assert!(!config.base_url().is_empty());
}
