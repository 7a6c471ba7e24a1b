#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory with its own config location.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp workspace"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// pclock running inside the workspace, never touching the real config
    pub fn pclock(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("pclock");
        cmd.current_dir(self.path())
            .env("PCLOCK_CONFIG", self.file("pclock.conf"))
            .env("NO_COLOR", "1")
            .env_remove("PCLOCK_LOG");
        cmd
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let p = self.file(name);
        fs::write(&p, content).expect("write fixture");
        p
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.file(name)).expect("read file")
    }

    pub fn json(&self, name: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(name)).expect("valid json")
    }
}

/// A finished task and a running one.
pub const ACME_SHEET: &str = r#"{
  "projectName": "Acme",
  "projectSettings": {
    "timeParams": { "day": 8, "week": 5, "month": 4, "year": 12 }
  },
  "tasks": [
    { "begin": "2025-03-01T09:00:00Z", "end": "2025-03-01T11:30:00Z", "message": "kickoff" },
    { "begin": "2025-03-02T09:00:00Z", "message": "design" }
  ]
}
"#;
