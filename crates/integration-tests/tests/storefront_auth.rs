//! Integration tests for stub authentication and rate limiting.
//!
//! Run with: cargo test -p cotton-row-integration-tests

#![allow(clippy::unwrap_used)]

use cotton_row_integration_tests::TestContext;
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_register_then_me() {
    let ctx = TestContext::spawn().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/auth/register"))
        .json(&json!({"email": "lia@example.ph", "password": "linen42", "name": "Lia"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Registration successful");
    assert_eq!(body["user"]["email"], "lia@example.ph");
    let token = body["token"].as_str().unwrap();

    let resp = ctx
        .client
        .get(ctx.url("/api/auth/me"))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["name"], "Lia");
    assert_eq!(body["user"]["role"], "CUSTOMER");
}

#[tokio::test]
async fn test_login_accepts_any_password() {
    let ctx = TestContext::spawn().await;

    let resp = ctx
        .client
        .post(ctx.url("/api/auth/login"))
        .json(&json!({"email": "lia@example.ph", "password": "x"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["id"], "mock-user-id");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_me_rejects_bad_tokens() {
    let ctx = TestContext::spawn().await;

    let resp = ctx.client.get(ctx.url("/api/auth/me")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = ctx
        .client
        .get(ctx.url("/api/auth/me"))
        .bearer_auth("not.a.jwt")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"success": false, "message": "Invalid token"}));
}

#[tokio::test]
async fn test_auth_rate_limit_returns_json() {
    let ctx = TestContext::spawn_with(true).await;

    let mut limited = None;
    for _ in 0..10 {
        let resp = ctx
            .client
            .post(ctx.url("/api/auth/login"))
            .json(&json!({"email": "lia@example.ph", "password": "x"}))
            .send()
            .await
            .unwrap();
        if resp.status() == StatusCode::TOO_MANY_REQUESTS {
            limited = Some(resp);
            break;
        }
    }

    let resp = limited.expect("login was never rate limited");
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"success": false, "message": "Too many requests"}));
}
