// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides isolated temp directories, fixture files and binary commands

#![allow(dead_code)]

use assert_cmd::cargo;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub const CLOUD_CONFIG_TEMPLATE: &str = r#"#cloud-config
hostname: {{ vmname }}
users:
  - name: ubuntu
    sudo: ALL=(ALL) NOPASSWD:ALL
    ssh_authorized_keys:
      - {{ ssh_key }}
"#;

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.file(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.file(name)).expect("Failed to read output file")
    }

    /// Command for a binary, run inside the temp directory with no ambient configuration
    pub fn command(&self, bin: &str) -> Command {
        let path = match bin {
            "generate-cloud-init" => cargo::cargo_bin!("generate-cloud-init"),
            "inject-ssh-key" => cargo::cargo_bin!("inject-ssh-key"),
            other => panic!("unknown binary {}", other),
        };

        let mut cmd = Command::new(path);
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env_remove("RUST_LOG")
            .env_remove("CLOUD_INIT_GEN_LOG_LEVEL")
            .env_remove("CLOUD_INIT_GEN_LOG_FORMAT")
            .env_remove("CLOUD_INIT_GEN_CREATE_DIRS");
        cmd
    }
}
