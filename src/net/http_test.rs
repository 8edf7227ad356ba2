use super::*;

#[test]
fn authorization_renders_bearer_header() {
    let req = HttpRequest::get("/api/announcements/").with_bearer("abc");
    assert_eq!(req.authorization(), Some("Bearer abc".to_owned()));
}

#[test]
fn authorization_absent_without_token() {
    let req = HttpRequest::post_json("/api/auth/login", serde_json::json!({}));
    assert_eq!(req.authorization(), None);
    assert_eq!(req.method, Method::Post);
}

#[test]
fn is_success_covers_2xx_only() {
    assert!(HttpResponse::new(200, "").is_success());
    assert!(HttpResponse::new(204, "").is_success());
    assert!(!HttpResponse::new(199, "").is_success());
    assert!(!HttpResponse::new(301, "").is_success());
    assert!(!HttpResponse::new(401, "").is_success());
}

#[test]
fn json_decodes_body() {
    let resp = HttpResponse::new(200, r#"{"n":3}"#);
    let value: serde_json::Value = resp.json().unwrap();
    assert_eq!(value["n"], 3);
}
