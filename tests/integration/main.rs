//! Integration tests for the todopro CLI
//!
//! These tests run the binary against an in-process stub backend, walking
//! the full cycle: register → login → task add → done → rm → logout


use assert_cmd::cargo;
use tempfile::TempDir;
use todopro::server::StubServer;

/// A stub backend and a private state directory for the CLI
struct Env {
    server: StubServer,
    home: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            server: StubServer::start_local().expect("failed to start stub backend"),
            home: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// CLI command pointed at the stub and the temp home
    fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("todopro"));
        cmd.env("TODOPRO_HOME", self.home.path())
            .env("TODOPRO_API_URL", self.server.base_url())
            .env_remove("TODOPRO_PASSWORD");
        cmd
    }

    fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.cmd().arg("--json").args(args).output().expect("failed to run todopro");
        assert!(
            output.status.success(),
            "todopro {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout was not JSON")
    }

    fn signed_in() -> Self {
        let env = Self::new();
        env.cmd().args(["register", "ada@example.com", "-p", "password123"]).assert().success();
        env.cmd().args(["login", "ada@example.com", "-p", "password123"]).assert().success();
        env
    }
}
