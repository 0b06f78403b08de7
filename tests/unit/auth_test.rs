//! Tests for the auth façade

use crate::common::{EMAIL, Harness, PASSWORD};

#[tokio::test]
async fn test_register_returns_account() {
    let h = Harness::new();
    let user = h.client.auth().register("Grace@Example.com", "password123").await.unwrap();
    assert_eq!(user.email, "grace@example.com");
    assert!(user.is_active);
    assert!(!user.id.is_empty());
    assert_eq!(h.token(), None);
}

#[tokio::test]
async fn test_register_twice_is_rejected() {
    let h = Harness::new();
    h.client.auth().register(EMAIL, PASSWORD).await.unwrap();
    let err = h.client.auth().register(EMAIL, PASSWORD).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message(), "Email already registered");
}

#[tokio::test]
async fn test_login_stores_token() {
    let h = Harness::new();
    h.client.auth().register(EMAIL, PASSWORD).await.unwrap();
    let response = h.client.auth().login(EMAIL, PASSWORD).await.unwrap();

    assert_eq!(response.token_type, "bearer");
    assert_eq!(h.token(), Some(response.access_token));
}

#[tokio::test]
async fn test_logout_clears_token_and_revokes() {
    let h = Harness::signed_in().await;
    let token = h.token().unwrap();

    h.client.auth().logout().await.unwrap();
    assert_eq!(h.token(), None);

    let last = h.server.requests().pop().unwrap();
    assert_eq!(last.path, "/api/auth/logout");
    assert_eq!(last.authorization, Some(format!("Bearer {token}")));
}

#[tokio::test]
async fn test_logout_clears_token_even_when_server_fails() {
    let h = Harness::signed_in().await;
    h.server.fail_next(500, r#"{"detail":"database unavailable"}"#);

    let err = h.client.auth().logout().await.unwrap_err();
    assert_eq!(err.user_message(), "database unavailable");
    assert_eq!(h.token(), None);
    assert!(h.navigator.routes().is_empty());
}
