//! Task board - the client's working copy of the task list
//!
//! The board holds the tasks the user is looking at. Every mutation goes to
//! the backend and the board adopts the server's answer. Completion toggles
//! are optimistic: the local flag flips before the request is sent and is
//! restored if the request fails.

use crate::api::{ApiClient, CreateTaskRequest, Error, Result, UpdateTaskRequest};
use crate::models::Task;

/// In-memory task list kept in sync with the backend
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    /// Empty board
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Board seeded with tasks already fetched
    #[must_use]
    pub const fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Load a fresh board from the backend
    pub async fn load(client: &ApiClient) -> Result<Self> {
        Ok(Self::with_tasks(client.tasks().list().await?))
    }

    /// Tasks in display order
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by ID
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of tasks on the board
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the board is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed).count()
    }

    /// Number of open tasks
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Replace the board with the server's list
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<()> {
        self.tasks = client.tasks().list().await?;
        Ok(())
    }

    /// Create a task and put it at the top of the board
    pub async fn create(&mut self, client: &ApiClient, request: &CreateTaskRequest) -> Result<Task> {
        let task = client.tasks().create(request).await?;
        self.tasks.insert(0, task.clone());
        Ok(task)
    }

    /// Update a task and adopt the server's copy
    pub async fn update(
        &mut self,
        client: &ApiClient,
        id: &str,
        changes: &UpdateTaskRequest,
    ) -> Result<Task> {
        let task = client.tasks().update(id, changes).await?;
        self.replace(task.clone());
        Ok(task)
    }

    /// Delete a task on the server, then drop it locally
    pub async fn remove(&mut self, client: &ApiClient, id: &str) -> Result<()> {
        client.tasks().delete(id).await?;
        self.tasks.retain(|t| t.id != id);
        Ok(())
    }

    /// Flip a task's completion state optimistically
    ///
    /// On success the local task becomes exactly what the server returned.
    /// On failure the flag goes back to its previous value and the error is
    /// returned. Tasks not on the board fail before any request is made.
    pub async fn toggle_complete(&mut self, client: &ApiClient, id: &str) -> Result<Task> {
        let index = self.position(id)?;
        let previous = self.tasks[index].is_completed;
        self.tasks[index].is_completed = !previous;

        match client.tasks().toggle_complete(id).await {
            Ok(task) => {
                self.tasks[index] = task.clone();
                Ok(task)
            },
            Err(e) => {
                log::debug!("Rolling back completion of {id}: {e}");
                self.tasks[index].is_completed = previous;
                Err(e)
            },
        }
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| Error::NotOnBoard(id.to_string()))
    }

    fn replace(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => *slot = task,
            None => self.tasks.insert(0, task),
        }
    }
}
