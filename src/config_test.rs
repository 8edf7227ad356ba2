use super::*;

#[test]
fn new_trims_trailing_slashes() {
    let config = ApiConfig::new("https://api.school.test/", " ");
    assert_eq!(config.backend_url, "https://api.school.test");
    assert_eq!(config.auth_base, "");
}

#[test]
fn backend_joins_path() {
    let config = ApiConfig::new("http://localhost:8000", "");
    assert_eq!(
        config.backend("/api/announcements/"),
        "http://localhost:8000/api/announcements/"
    );
}

#[test]
fn auth_is_same_origin_by_default() {
    let config = ApiConfig::new(DEFAULT_BACKEND_URL, "");
    assert_eq!(config.auth("/api/auth/login"), "/api/auth/login");
}

#[test]
fn auth_uses_configured_base() {
    let config = ApiConfig::new(DEFAULT_BACKEND_URL, "https://portal.school.test/");
    assert_eq!(
        config.auth("/api/auth/forgot-password"),
        "https://portal.school.test/api/auth/forgot-password"
    );
}
