//! Registration, login and session token behavior against the real
//! router and an ephemeral Postgres.

mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn register_login_me_flow() {
    let app = TestApp::spawn().await;

    let (token, user) = app.register("Alice", "a@x.com", "P@ssw0rd1", "adopter").await;
    assert_eq!(user["name"], "Alice");
    assert_eq!(user["email"], "a@x.com");
    assert_eq!(user["role"], "adopter");
    assert!(user.get("passwordHash").is_none());
    assert!(user.get("password_hash").is_none());

    // Wrong password: identical shape to unknown email, 401.
    let (status, body) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": "a@x.com", "password": "wrong"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    // Unknown email: same status, same body.
    let (status, body) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": "nobody@x.com", "password": "P@ssw0rd1"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    // Correct password logs in.
    let (status, body) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": "a@x.com", "password": "P@ssw0rd1"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some());

    // The registration token authenticates /me and decodes to the same
    // identity it was issued for.
    let (status, body) = app.request("GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], user["id"]);
    assert_eq!(body["user"]["name"], "Alice");
    assert_eq!(body["user"]["email"], "a@x.com");
    assert_eq!(body["user"]["role"], "adopter");

    app.stop().await;
}

#[tokio::test]
async fn duplicate_email_registration_conflicts() {
    let app = TestApp::spawn().await;

    app.register("Alice", "dup@x.com", "P@ssw0rd1", "adopter").await;

    let (status, body) = app
        .request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Mallory",
                "email": "dup@x.com",
                "password": "hunter22",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Email already in use");

    app.stop().await;
}

#[tokio::test]
async fn register_requires_all_fields() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({"name": "Alice", "email": "a@x.com"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Name, email, and password are required");

    app.stop().await;
}

#[tokio::test]
async fn password_whitespace_is_preserved() {
    let app = TestApp::spawn().await;

    // A password with edge whitespace is stored verbatim.
    app.register("Alice", "a@x.com", " padded pw ", "adopter").await;

    let (status, _) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": "a@x.com", "password": " padded pw "})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // The trimmed variant is a different credential.
    let (status, body) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": "a@x.com", "password": "padded pw"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    app.stop().await;
}

#[tokio::test]
async fn unknown_role_defaults_to_adopter() {
    let app = TestApp::spawn().await;

    let (_, user) = app.register("Eve", "e@x.com", "P@ssw0rd1", "admin").await;
    assert_eq!(user["role"], "adopter");

    app.stop().await;
}

#[tokio::test]
async fn protected_routes_reject_missing_and_invalid_tokens() {
    let app = TestApp::spawn().await;

    // No token at all: 401.
    let (status, body) = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Missing token");

    // Garbage token: 403.
    let (status, body) = app
        .request("GET", "/api/auth/me", Some("not-a-jwt"), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Invalid token");

    // Valid token with a flipped signature character: 403.
    let (token, _) = app.register("Alice", "sig@x.com", "P@ssw0rd1", "adopter").await;
    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });
    let (status, _) = app.request("GET", "/api/auth/me", Some(&tampered), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    app.stop().await;
}

#[tokio::test]
async fn google_auth_requires_code() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .request("POST", "/api/auth/google", None, Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing authorization code");

    app.stop().await;
}

#[tokio::test]
async fn google_auth_maps_provider_failure_upstream() {
    let app = TestApp::spawn().await;

    // The harness points the token endpoint at a closed port, so the
    // exchange fails at the provider, not in our code.
    let (status, body) = app
        .request(
            "POST",
            "/api/auth/google",
            None,
            Some(json!({"code": "4/0AdQt8qh"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["message"], "Google authentication failed");

    app.stop().await;
}
