//! Task command - manage tasks

use todopro::api::{CreateTaskRequest, UpdateTaskRequest};
use todopro::output::{OperationResult, OutputMode, TaskChangeResult, TaskListResult, TaskShowResult};
use todopro::{ApiClient, TaskBoard};

use crate::cli::TaskAction;

/// Handle task subcommands
pub async fn task_cmd(client: &ApiClient, action: TaskAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        TaskAction::List { pending, completed } => list(client, pending, completed, mode).await,
        TaskAction::Show { id } => show(client, &id, mode).await,
        TaskAction::Add { title, description } => {
            add(client, &title, description.as_deref(), mode).await
        },
        TaskAction::Edit {
            id,
            title,
            description,
        } => edit(client, &id, title, description, mode).await,
        TaskAction::Done { id } => done(client, &id, mode).await,
        TaskAction::Rm { id } => remove(client, &id, mode).await,
    }
}

async fn list(
    client: &ApiClient,
    pending: bool,
    completed: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let board = TaskBoard::load(client).await?;

    let tasks = board
        .tasks()
        .iter()
        .filter(|t| match (pending, completed) {
            (true, _) => !t.is_completed,
            (_, true) => t.is_completed,
            _ => true,
        })
        .cloned()
        .collect();

    let result = TaskListResult {
        tasks,
        total: board.len(),
        completed: board.completed_count(),
    };

    result.render(mode);
    Ok(())
}

async fn show(client: &ApiClient, id: &str, mode: OutputMode) -> anyhow::Result<()> {
    let task = client.tasks().get(id).await?;
    TaskShowResult { task }.render(mode);
    Ok(())
}

async fn add(
    client: &ApiClient,
    title: &str,
    description: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let request = CreateTaskRequest::validated(title, description)?;
    let task = client.tasks().create(&request).await?;

    TaskChangeResult {
        action: "created".to_string(),
        task,
    }
    .render(mode);
    Ok(())
}

async fn edit(
    client: &ApiClient,
    id: &str,
    title: Option<String>,
    description: Option<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let mut changes = UpdateTaskRequest::new();
    if let Some(title) = title {
        changes = changes.title(title);
    }
    if let Some(description) = description {
        changes = changes.description(description);
    }
    if changes.is_empty() {
        anyhow::bail!("Nothing to change. Pass --title or --description.");
    }

    let task = client.tasks().update(id, &changes.validate()?).await?;

    TaskChangeResult {
        action: "updated".to_string(),
        task,
    }
    .render(mode);
    Ok(())
}

async fn done(client: &ApiClient, id: &str, mode: OutputMode) -> anyhow::Result<()> {
    let mut board = TaskBoard::load(client).await?;
    let task = board.toggle_complete(client, id).await?;

    let action = if task.is_completed { "completed" } else { "reopened" };
    TaskChangeResult {
        action: action.to_string(),
        task,
    }
    .render(mode);
    Ok(())
}

async fn remove(client: &ApiClient, id: &str, mode: OutputMode) -> anyhow::Result<()> {
    client.tasks().delete(id).await?;
    OperationResult::ok(format!("Removed task: {id}")).render(mode);
    Ok(())
}
