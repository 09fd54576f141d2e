//! Configuration for the task list manager.
//!
//! Configuration can be set via environment variables:
//! - `TASKS_FILE` - Optional. Path of the backing file. Defaults to
//!   `tasks.txt` in the working directory.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the flat file holding the task collection.
    pub tasks_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let tasks_file = std::env::var("TASKS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("tasks.txt"));
        Self { tasks_file }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: PathBuf::from("tasks.txt"),
        }
    }
}
