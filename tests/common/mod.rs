#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Path to the compiled `ticketdesk` binary.
pub fn ticketdesk_binary() -> &'static str {
    env!("CARGO_BIN_EXE_ticketdesk")
}

/// Helper struct to run ticketdesk commands in an isolated temp directory
pub struct TicketDeskTest {
    pub temp_dir: TempDir,
}

impl TicketDeskTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        TicketDeskTest { temp_dir }
    }

    /// A desk whose card timestamps render in UTC.
    pub fn with_utc() -> Self {
        let test = Self::new();
        test.write_config("time_zone: UTC\n");
        test
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(ticketdesk_binary());
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("TICKETDESK_ROOT")
            .env_remove("TICKETDESK_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute ticketdesk command")
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn ticketdesk command");
        child
            .stdin
            .take()
            .expect("stdin should be piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");
        child
            .wait_with_output()
            .expect("Failed to wait for ticketdesk command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_success(args);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("Invalid JSON from {:?}: {e}\n{stdout}", args))
    }

    /// Submit a valid ticket and return its id.
    pub fn submit(&self, name: &str, message: &str, priority: &str) -> u64 {
        let email = format!("{}@example.com", name.to_lowercase());
        let json = self.run_json(&[
            "submit",
            "--name",
            name,
            "--email",
            &email,
            "--message",
            message,
            "--priority",
            priority,
            "--json",
        ]);
        json["ticket"]["id"].as_u64().expect("ticket id")
    }

    pub fn store_path(&self) -> std::path::PathBuf {
        self.temp_dir
            .path()
            .join(".ticketdesk")
            .join("store")
            .join("tickets.json")
    }

    pub fn read_store(&self) -> Option<String> {
        fs::read_to_string(self.store_path()).ok()
    }

    pub fn write_store(&self, content: &str) {
        let path = self.store_path();
        fs::create_dir_all(path.parent().expect("store dir")).expect("Failed to create store dir");
        fs::write(path, content).expect("Failed to write store file");
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.temp_dir.path().join(".ticketdesk");
        fs::create_dir_all(&dir).expect("Failed to create .ticketdesk directory");
        fs::write(dir.join("config.yaml"), content).expect("Failed to write config file");
    }
}
