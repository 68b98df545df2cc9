use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tasklist configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite database file
    pub database: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from("todos.db"),
        }
    }
}
