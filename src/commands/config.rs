//! Config command - show or change client configuration

use serde::Serialize;

use todopro::config::ClientConfig;
use todopro::output::{OperationResult, OutputMode};

use crate::cli::ConfigAction;

#[derive(Debug, Serialize)]
struct ConfigView {
    config_file: String,
    api_url: Option<String>,
    effective_api_url: String,
}

/// Handle config subcommands
pub fn config_cmd(
    action: ConfigAction,
    api_url: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let config = ClientConfig::load();
            let view = ConfigView {
                config_file: ClientConfig::config_path().display().to_string(),
                effective_api_url: config.resolve_api_url(api_url),
                api_url: config.api_url,
            };
            if mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("Config file: {}", view.config_file);
                println!("  api_url:   {}", view.api_url.as_deref().unwrap_or("(not set)"));
                println!("  in use:    {}", view.effective_api_url);
            }
            Ok(())
        },
        ConfigAction::SetUrl { url } => {
            let url = url.trim().trim_end_matches('/').to_string();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("API URL must start with http:// or https://");
            }
            let mut config = ClientConfig::load();
            config.api_url = Some(url.clone());
            config.save()?;
            OperationResult::ok(format!("API URL set to {url}")).render(mode);
            Ok(())
        },
        ConfigAction::Reset => {
            let path = ClientConfig::config_path();
            if path.exists() {
                std::fs::remove_file(&path)?;
            }
            OperationResult::ok("Configuration reset").render(mode);
            Ok(())
        },
    }
}
