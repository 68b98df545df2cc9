use thiserror::Error;

/// Tasklist error types
#[derive(Error, Debug)]
pub enum TasklistError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("todo not found: id {0}")]
    NotFound(i64),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Input error: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for tasklist operations
pub type Result<T> = std::result::Result<T, TasklistError>;
