//! Tests for the request function: headers, error mapping and 401 handling

use std::sync::Arc;

use serde_json::{Value, json};
use todopro::api::{CreateTaskRequest, Error, RequestOptions};
use todopro::session::{IgnoreUnauthorized, LOGIN_ROUTE};
use todopro::storage::{MemoryTokenStore, TokenStore};
use todopro::ApiClient;

use crate::common::{Harness, unreachable_client};

// =============================================================================
// SUCCESS PATH
// =============================================================================

#[tokio::test]
async fn test_bearer_and_content_type_sent() {
    let h = Harness::signed_in().await;
    let token = h.token().unwrap();

    h.client.tasks().list().await.unwrap();

    let last = h.server.requests().pop().unwrap();
    assert_eq!(last.method, "GET");
    assert_eq!(last.path, "/api/tasks");
    assert_eq!(last.authorization, Some(format!("Bearer {token}")));
}

#[tokio::test]
async fn test_no_authorization_without_token() {
    let h = Harness::new();
    h.client.auth().register("new@example.com", "password123").await.unwrap();

    let last = h.server.requests().pop().unwrap();
    assert_eq!(last.authorization, None);
    let body: Value = serde_json::from_str(&last.body).unwrap();
    assert_eq!(body["email"], "new@example.com");
}

#[tokio::test]
async fn test_raw_request_decodes_json() {
    let h = Harness::signed_in().await;
    let options = RequestOptions::post().json(&CreateTaskRequest::new("Raw")).unwrap();
    let created: Value = h.client.request("/api/tasks", options).await.unwrap();
    assert_eq!(created["title"], "Raw");
}

#[tokio::test]
async fn test_no_content_decodes_as_unit() {
    let h = Harness::signed_in().await;
    h.server.fail_next(204, "");
    h.client.request::<()>("/api/anything", RequestOptions::delete()).await.unwrap();
}

#[tokio::test]
async fn test_empty_success_body_into_struct_is_decode_error() {
    let h = Harness::signed_in().await;
    h.server.fail_next(200, "");
    let err = h.client.tasks().list().await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

#[tokio::test]
async fn test_error_detail_from_json_body() {
    let h = Harness::signed_in().await;
    h.server.fail_next(404, r#"{"detail":"Task not found"}"#);

    let err = h.client.tasks().get("missing").await.unwrap_err();
    let api = err.as_api().unwrap();
    assert_eq!(api.status, 404);
    assert_eq!(api.status_text, "Not Found");
    assert_eq!(api.detail(), "Task not found");
    assert_eq!(err.user_message(), "Task not found");
}

#[tokio::test]
async fn test_error_without_json_falls_back_to_status_text() {
    let h = Harness::signed_in().await;
    h.server.fail_next(500, "<html>boom</html>");

    let err = h.client.tasks().list().await.unwrap_err();
    let api = err.as_api().unwrap();
    assert_eq!(api.status, 500);
    assert_eq!(api.detail(), "Internal Server Error");
}

#[tokio::test]
async fn test_uncommon_status_still_has_text() {
    let h = Harness::signed_in().await;
    h.server.fail_next(599, "upstream exploded");

    let err = h.client.tasks().list().await.unwrap_err();
    let api = err.as_api().unwrap();
    assert_eq!(api.status, 599);
    assert_eq!(api.status_text, "HTTP 599");
    assert_eq!(api.detail(), "HTTP 599");
    assert_eq!(err.user_message(), "HTTP 599");
}

#[tokio::test]
async fn test_error_keeps_extra_fields() {
    let h = Harness::signed_in().await;
    h.server.fail_next(422, r#"{"detail":"Bad title","field":"title"}"#);

    let err = h.client.tasks().create(&CreateTaskRequest::new("x")).await.unwrap_err();
    let api = err.as_api().unwrap();
    assert_eq!(api.data.extra.get("field"), Some(&json!("title")));
    assert_eq!(err.status(), Some(422));
}

#[tokio::test]
async fn test_backend_validation_error() {
    let h = Harness::signed_in().await;
    let err = h.client.tasks().create(&CreateTaskRequest::new("   ")).await.unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert_eq!(err.user_message(), "Title is required");
}

#[tokio::test]
async fn test_transport_error_passes_through() {
    let client = unreachable_client();
    let err = client.tasks().list().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.status(), None);
    // Token is only cleared on a 401 response
    assert!(client.tokens().is_present());
}

// =============================================================================
// 401 HANDLING
// =============================================================================

#[tokio::test]
async fn test_unauthorized_clears_token_and_redirects() {
    let h = Harness::signed_in().await;
    h.server.fail_next(401, r#"{"detail":"Invalid or expired token"}"#);

    let err = h.client.tasks().list().await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(err.as_api().unwrap().is_unauthorized());
    assert_eq!(h.token(), None);
    assert_eq!(h.navigator.routes(), vec![LOGIN_ROUTE.to_string()]);
}

#[tokio::test]
async fn test_unauthorized_from_every_facade() {
    let h = Harness::new();
    h.tokens.save("forged").unwrap();
    let _ = h.client.tasks().list().await;

    h.tokens.save("forged").unwrap();
    let _ = h.client.chat().conversations().await;

    assert_eq!(h.token(), None);
    assert_eq!(h.navigator.routes().len(), 2);
}

#[tokio::test]
async fn test_failed_login_is_a_401_too() {
    let h = Harness::new();
    h.client.auth().register("bob@example.com", "password123").await.unwrap();

    let err = h.client.auth().login("bob@example.com", "nope-nope").await.unwrap_err();
    assert_eq!(err.user_message(), "Invalid email or password");
    assert_eq!(h.navigator.routes(), vec![LOGIN_ROUTE.to_string()]);
}

#[tokio::test]
async fn test_custom_unauthorized_handler_keeps_token() {
    let h = Harness::new();
    let tokens = Arc::new(MemoryTokenStore::with_token("kept"));
    let client =
        ApiClient::with_handler(h.server.base_url(), tokens.clone(), Arc::new(IgnoreUnauthorized))
            .unwrap();

    let err = client.tasks().list().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(tokens.load().as_deref(), Some("kept"));
}
