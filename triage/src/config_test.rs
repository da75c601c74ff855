use super::*;

#[test]
fn default_points_at_local_backend() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url(), "http://localhost:8000");
    assert_eq!(config.predict_url(), "http://localhost:8000/predict");
}

#[test]
fn new_trims_trailing_slashes_and_whitespace() {
    let config = ApiConfig::new("  https://triage.example.org/api//  ");
    assert_eq!(config.base_url(), "https://triage.example.org/api");
    assert_eq!(config.login_url(), "https://triage.example.org/api/auth/login");
}

#[test]
fn blank_base_falls_back_to_default() {
    assert_eq!(ApiConfig::new("   ").base_url(), DEFAULT_API_BASE);
    assert_eq!(ApiConfig::new("/").base_url(), DEFAULT_API_BASE);
}

#[test]
fn endpoint_urls_cover_every_call() {
    let config = ApiConfig::new("http://127.0.0.1:8000");
    assert_eq!(config.signup_url(), "http://127.0.0.1:8000/auth/signup");
    assert_eq!(config.report_url(), "http://127.0.0.1:8000/generate-report");
}
