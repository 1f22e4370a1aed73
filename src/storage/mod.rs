pub mod json_backend;

use std::path::Path;

use crate::{errors::StorageError, ledger::UserStore};

pub type Result<T> = std::result::Result<T, StorageError>;

/// Abstraction over backends that persist the whole user store as one snapshot.
pub trait StorageBackend {
    /// Returns `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<UserStore>>;
    fn save(&self, store: &UserStore) -> Result<()>;
    /// Human-readable location, used in status messages.
    fn location(&self) -> &Path;
}

pub use json_backend::JsonStorage;
