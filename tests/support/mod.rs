#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub struct TestApp {
    dir: TempDir,
}

impl TestApp {
    pub fn init() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    /// A declutter command pointed at this app's data directory
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("declutter").expect("binary");
        cmd.env("DECLUTTER_DATA_DIR", self.data_dir());
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Pass the gate directly, the way a prior session would have
    pub fn sign_in(&self) {
        fs::create_dir_all(self.data_dir()).expect("create data dir");
        fs::write(self.data_dir().join("hasSignedIn"), "true").expect("write sign-in flag");
    }

    pub fn write_config(&self, contents: &str) {
        fs::create_dir_all(self.data_dir()).expect("create data dir");
        fs::write(self.data_dir().join("declutter.toml"), contents).expect("write config");
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir().join("mental-clutter-tasks.json")
    }

    pub fn signin_file(&self) -> PathBuf {
        self.data_dir().join("hasSignedIn")
    }

    /// Read the persisted task collection as JSON
    pub fn read_tasks(&self) -> serde_json::Value {
        let contents = fs::read_to_string(self.tasks_file()).expect("read tasks file");
        serde_json::from_str(&contents).expect("parse tasks file")
    }

    /// Parse stdout of a `--json` invocation into the envelope value
    pub fn json_output(output: &[u8]) -> serde_json::Value {
        serde_json::from_slice(output).expect("parse json output")
    }
}
