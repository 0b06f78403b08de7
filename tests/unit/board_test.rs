//! Tests for the optimistic task board

use todopro::TaskBoard;
use todopro::api::{CreateTaskRequest, Error, UpdateTaskRequest};

use crate::common::Harness;

async fn board_with_task(h: &Harness) -> (TaskBoard, String) {
    let mut board = TaskBoard::load(&h.client).await.unwrap();
    let task = board.create(&h.client, &CreateTaskRequest::new("Buy milk")).await.unwrap();
    (board, task.id)
}

#[tokio::test]
async fn test_toggle_adopts_server_task() {
    let h = Harness::signed_in().await;
    let (mut board, id) = board_with_task(&h).await;

    let task = board.toggle_complete(&h.client, &id).await.unwrap();

    assert!(task.is_completed);
    assert_eq!(board.get(&id), Some(&task));
    assert_eq!(board.completed_count(), 1);
}

#[tokio::test]
async fn test_toggle_rolls_back_on_failure() {
    let h = Harness::signed_in().await;
    let (mut board, id) = board_with_task(&h).await;
    let before = board.get(&id).cloned().unwrap();

    h.server.fail_next(500, r#"{"detail":"boom"}"#);
    let err = board.toggle_complete(&h.client, &id).await.unwrap_err();

    assert_eq!(err.user_message(), "boom");
    assert_eq!(board.get(&id), Some(&before));
    assert_eq!(board.pending_count(), 1);
}

#[tokio::test]
async fn test_toggle_rolls_back_on_401() {
    let h = Harness::signed_in().await;
    let (mut board, id) = board_with_task(&h).await;

    h.server.fail_next(401, r#"{"detail":"Invalid or expired token"}"#);
    board.toggle_complete(&h.client, &id).await.unwrap_err();

    assert!(!board.get(&id).unwrap().is_completed);
    assert_eq!(h.token(), None);
}

#[tokio::test]
async fn test_toggle_unknown_task_sends_nothing() {
    let h = Harness::signed_in().await;
    let mut board = TaskBoard::load(&h.client).await.unwrap();
    let before = h.server.requests().len();

    let err = board.toggle_complete(&h.client, "ghost").await.unwrap_err();

    assert!(matches!(err, Error::NotOnBoard(ref id) if id == "ghost"));
    assert_eq!(h.server.requests().len(), before);
}

#[tokio::test]
async fn test_create_update_remove_refresh() {
    let h = Harness::signed_in().await;
    let (mut board, id) = board_with_task(&h).await;
    board.create(&h.client, &CreateTaskRequest::new("Walk dog")).await.unwrap();
    assert_eq!(board.tasks()[0].title, "Walk dog");

    board.update(&h.client, &id, &UpdateTaskRequest::new().title("Buy oat milk")).await.unwrap();
    assert_eq!(board.get(&id).unwrap().title, "Buy oat milk");

    board.remove(&h.client, &id).await.unwrap();
    assert!(board.get(&id).is_none());

    board.refresh(&h.client).await.unwrap();
    assert_eq!(board.len(), 1);
}
