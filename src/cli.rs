//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use todopro::config::API_URL_ENV;
use todopro::output::OutputMode;

/// todopro - Todo Pro from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "todopro",
    version,
    about = "Todo Pro from the terminal",
    long_about = "Sign in to a Todo Pro backend, manage your tasks and talk to the task assistant.\n\n\
                  The backend URL comes from --api-url, then TODOPRO_API_URL, then\n\
                  `todopro config set-url`, then http://localhost:8000."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Backend base URL for this invocation
    #[arg(long, global = true, env = API_URL_ENV)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an account
    Register {
        /// Email address
        email: String,

        /// Password (at least 8 characters)
        #[arg(short, long, env = "TODOPRO_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sign in and store the access token
    Login {
        /// Email address
        email: String,

        /// Password
        #[arg(short, long, env = "TODOPRO_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sign out and forget the access token
    Logout,

    /// Show backend, session and task count
    Status,

    /// Manage tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Talk to the task assistant
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },

    /// Show or change client configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Run an in-memory backend for local testing
    #[command(hide = true)]
    ServeStub {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8000")]
        addr: String,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// List tasks, newest first
    List {
        /// Only open tasks
        #[arg(long, conflicts_with = "completed")]
        pending: bool,

        /// Only completed tasks
        #[arg(long)]
        completed: bool,
    },

    /// Show task details
    Show {
        /// Task ID
        id: String,
    },

    /// Add a new task
    Add {
        /// Task title (what needs to be done)
        title: String,

        /// Longer description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Change a task's title or description
    Edit {
        /// Task ID
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Toggle a task between done and open
    Done {
        /// Task ID
        id: String,
    },

    /// Remove a task
    #[command(alias = "remove")]
    Rm {
        /// Task ID
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ChatAction {
    /// Send a message to the assistant
    Send {
        /// Message text
        message: String,

        /// Continue this conversation instead of starting a new one
        #[arg(short, long)]
        conversation: Option<String>,
    },

    /// List conversations
    Conversations,

    /// Show the messages of a conversation
    Messages {
        /// Conversation ID
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Store the backend base URL
    SetUrl {
        /// Base URL, e.g. https://todo.example.com
        url: String,
    },

    /// Remove stored configuration
    Reset,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let api_url = cli.api_url.as_deref();

    match cli.command {
        Some(Command::Config { action }) => commands::config_cmd(action, api_url, output_mode),
        Some(Command::ServeStub { addr }) => commands::serve_stub(&addr),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": todopro::VERSION
                    })
                );
            } else {
                println!("todopro v{}", todopro::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": todopro::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("todopro v{}", todopro::VERSION);
                println!("\nRun 'todopro --help' for usage");
                println!("Run 'todopro login <email>' to get started");
            }
            Ok(())
        },
        Some(command) => {
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
            runtime.block_on(dispatch(command, api_url, output_mode))
        },
    }
}

/// Commands that talk to the backend
async fn dispatch(command: Command, api_url: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let client = commands::connect(api_url)?;

    match command {
        Command::Register { email, password } => {
            commands::register(&client, &email, &password, mode).await
        },
        Command::Login { email, password } => commands::login(&client, &email, &password, mode).await,
        Command::Logout => commands::logout(&client, mode).await,
        Command::Status => commands::status(&client, mode).await,
        Command::Task { action } => commands::task_cmd(&client, action, mode).await,
        Command::Chat { action } => commands::chat_cmd(&client, action, mode).await,
        Command::Config { .. } | Command::ServeStub { .. } | Command::Version => Ok(()),
    }
}
