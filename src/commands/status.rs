//! Status command - backend, session and task count

use todopro::ApiClient;
use todopro::output::{OutputMode, StatusResult};
use todopro::paths;

/// Show where the client points and whether it is signed in
pub async fn status(client: &ApiClient, mode: OutputMode) -> anyhow::Result<()> {
    let task_count = if client.tokens().is_present() {
        match client.tasks().list().await {
            Ok(tasks) => Some(tasks.len()),
            Err(e) => {
                log::debug!("Could not fetch tasks: {e}");
                None
            },
        }
    } else {
        None
    };

    let result = StatusResult {
        version: todopro::VERSION.to_string(),
        api_url: client.base_url().to_string(),
        logged_in: client.tokens().is_present(),
        token_file: paths::token_file().display().to_string(),
        task_count,
    };

    result.render(mode);
    Ok(())
}
