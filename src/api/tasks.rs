//! Task endpoints

use super::client::{ApiClient, RequestOptions};
use super::error::Result;
use super::types::{CreateTaskRequest, UpdateTaskRequest};
use crate::models::Task;

const TASKS: &str = "/api/tasks";

/// CRUD over the signed-in user's tasks
#[derive(Debug, Clone, Copy)]
pub struct TasksApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TasksApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// All tasks, newest first
    pub async fn list(&self) -> Result<Vec<Task>> {
        self.client.request(TASKS, RequestOptions::get()).await
    }

    /// One task by ID
    pub async fn get(&self, id: &str) -> Result<Task> {
        self.client.request(&format!("{TASKS}/{id}"), RequestOptions::get()).await
    }

    /// Create a task
    pub async fn create(&self, request: &CreateTaskRequest) -> Result<Task> {
        self.client.request(TASKS, RequestOptions::post().json(request)?).await
    }

    /// Change some fields of a task
    pub async fn update(&self, id: &str, request: &UpdateTaskRequest) -> Result<Task> {
        self.client
            .request(&format!("{TASKS}/{id}"), RequestOptions::put().json(request)?)
            .await
    }

    /// Delete a task
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.request(&format!("{TASKS}/{id}"), RequestOptions::delete()).await
    }

    /// Flip a task's completion state; returns the server's copy
    pub async fn toggle_complete(&self, id: &str) -> Result<Task> {
        self.client
            .request(&format!("{TASKS}/{id}/complete"), RequestOptions::patch())
            .await
    }
}
