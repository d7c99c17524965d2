//! Integration tests for bearer-token authentication on booking routes.

mod helpers;

use http::StatusCode;

use roomhub_auth::JwtEncoder;
use roomhub_core::config::AuthConfig;
use roomhub_core::types::UserId;

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let app = helpers::TestApp::new();

    for (method, path) in [("GET", "/booking"), ("POST", "/booking"), ("PUT", "/booking/1")] {
        let response = app
            .request(method, path, Some(serde_json::json!({ "roomId": 1 })), None)
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {path}");
        assert_eq!(response.body["error"], "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/booking", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_without_session_is_rejected() {
    let app = helpers::TestApp::new();
    let encoder = JwtEncoder::new(&app.config.auth);
    let token = encoder.issue(UserId(1)).unwrap();

    let response = app.request("GET", "/booking", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = helpers::TestApp::new();
    let foreign = AuthConfig {
        jwt_secret: "someone-else".to_string(),
        ..app.config.auth.clone()
    };
    let token = JwtEncoder::new(&foreign).issue(UserId(1)).unwrap();
    app.store.add_session(UserId(1), &token).await;

    let response = app.request("GET", "/booking", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_session_reaches_handler() {
    let app = helpers::TestApp::new();
    let token = app.login(1).await;

    let response = app.request("GET", "/booking", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
