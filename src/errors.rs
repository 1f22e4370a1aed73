use thiserror::Error;

use crate::ledger::CategoryKind;

/// Failures raised by wallet lookups and kind-restricted operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalletError {
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Category {name} is not an {expected} category.")]
    InvalidCategoryType { name: String, expected: CategoryKind },
}

/// Registration and authentication failures against the user store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("User already exists!")]
    UserExists(String),
    #[error("Username and password cannot be empty.")]
    InvalidCredentials,
    #[error("Invalid username or password.")]
    AuthenticationFailed,
}

/// Persistence failures for the user store snapshot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Backup not found: {0}")]
    BackupNotFound(String),
}

/// Configuration file failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Top-level error surfaced by the interactive shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
