//! Tests for token persistence through the client

use std::sync::Arc;

use tempfile::TempDir;
use todopro::ApiClient;
use todopro::session::RecordingNavigator;
use todopro::storage::{FileTokenStore, TokenStore};

use crate::common::{EMAIL, Harness, PASSWORD};

#[tokio::test]
async fn test_file_token_survives_new_client() {
    let h = Harness::new();
    h.client.auth().register(EMAIL, PASSWORD).await.unwrap();

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state/auth_token");
    let navigator = Arc::new(RecordingNavigator::new());

    let first =
        ApiClient::new(h.server.base_url(), Arc::new(FileTokenStore::new(&path)), navigator.clone())
            .unwrap();
    first.auth().login(EMAIL, PASSWORD).await.unwrap();
    assert!(path.exists());

    // A second client over the same file is already signed in
    let second =
        ApiClient::new(h.server.base_url(), Arc::new(FileTokenStore::new(&path)), navigator)
            .unwrap();
    assert!(second.tasks().list().await.is_ok());

    second.auth().logout().await.unwrap();
    assert!(!path.exists());
    assert!(!FileTokenStore::new(&path).is_present());
}

#[tokio::test]
async fn test_file_token_removed_on_401() {
    let h = Harness::new();
    let temp = TempDir::new().unwrap();
    let store = Arc::new(FileTokenStore::new(temp.path().join("auth_token")));
    store.save("expired").unwrap();

    let navigator = Arc::new(RecordingNavigator::new());
    let client = ApiClient::new(h.server.base_url(), store.clone(), navigator.clone()).unwrap();
    client.tasks().list().await.unwrap_err();

    assert!(!store.is_present());
    assert_eq!(navigator.routes(), vec!["/login".to_string()]);
}
