//! Storage layer for declutter
//!
//! All persistent state lives in a single per-user data directory:
//!
//! ```text
//! <data dir>/
//!   mental-clutter-tasks.json   # JSON-serialized task collection
//!   hasSignedIn                 # literal "true" once the gate is passed
//!   declutter.toml              # optional configuration
//! ```
//!
//! The directory defaults to the platform data dir and can be overridden
//! with `--data-dir` or `DECLUTTER_DATA_DIR`.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// Storage key for the task collection
pub const TASKS_KEY: &str = "mental-clutter-tasks";

/// Storage key for the sign-in flag
pub const SIGNIN_KEY: &str = "hasSignedIn";

/// Name of the configuration file within the data directory
pub const CONFIG_FILE: &str = "declutter.toml";

/// Storage manager for declutter state
#[derive(Debug, Clone)]
pub struct Storage {
    data_dir: PathBuf,
}

impl Storage {
    /// Create a storage manager rooted at an explicit directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Resolve the data directory: explicit override first, then the
    /// platform per-user data dir.
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = override_dir {
            return Ok(Self::new(dir));
        }
        let dirs = ProjectDirs::from("", "", "declutter").ok_or_else(|| {
            Error::OperationFailed(
                "could not determine a data directory; pass --data-dir".to_string(),
            )
        })?;
        Ok(Self::new(dirs.data_dir().to_path_buf()))
    }

    /// Path to the data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path to the JSON file backing a storage key
    pub fn slot_file(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    /// Path to the task collection file
    pub fn tasks_file(&self) -> PathBuf {
        self.slot_file(TASKS_KEY)
    }

    /// Path to the sign-in flag file
    pub fn signin_file(&self) -> PathBuf {
        self.data_dir.join(SIGNIN_KEY)
    }

    /// Path to the configuration file
    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    /// Initialize the data directory
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    // =========================================================================
    // File I/O helpers (atomic writes for safety)
    // =========================================================================

    /// Write JSON data atomically (write to temp, then rename)
    pub fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        self.write_atomic(path, json.as_bytes())
    }

    /// Read JSON data from a file
    pub fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = fs::read_to_string(path)?;
        let data: T = serde_json::from_str(&content)?;
        Ok(data)
    }

    /// Write data atomically using temp file + rename
    ///
    /// Readers never see partial writes: the file is either fully
    /// written or not at all.
    pub fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");

        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;

        fs::rename(&temp_path, path)?;

        Ok(())
    }

    // =========================================================================
    // Flag slots (raw string files)
    // =========================================================================

    /// Read a flag slot: true only when the file holds the literal `true`
    pub fn read_flag(&self, path: &Path) -> bool {
        fs::read_to_string(path)
            .map(|content| content.trim() == "true")
            .unwrap_or(false)
    }

    /// Set a flag slot to the literal `true`
    pub fn write_flag(&self, path: &Path) -> Result<()> {
        self.init()?;
        self.write_atomic(path, b"true")
    }
}
