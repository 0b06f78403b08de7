//! Register, login and logout commands

use todopro::ApiClient;
use todopro::output::{OperationResult, OutputMode};

/// Create an account
pub async fn register(
    client: &ApiClient,
    email: &str,
    password: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let user = client.auth().register(email, password).await?;
    OperationResult::ok(format!("Registered {}. Run `todopro login {}` next.", user.email, user.email))
        .render(mode);
    Ok(())
}

/// Sign in and store the token
pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    client.auth().login(email, password).await?;
    OperationResult::ok(format!("Logged in as {email}")).render(mode);
    Ok(())
}

/// Sign out; the local token is gone even if the backend call fails
pub async fn logout(client: &ApiClient, mode: OutputMode) -> anyhow::Result<()> {
    if !client.tokens().is_present() {
        OperationResult::ok("Not logged in").render(mode);
        return Ok(());
    }

    let message = match client.auth().logout().await {
        Ok(()) => "Logged out".to_string(),
        Err(e) => {
            log::warn!("Logout request failed: {e}");
            format!("Logged out locally ({})", e.user_message())
        },
    };
    OperationResult::ok(message).render(mode);
    Ok(())
}
