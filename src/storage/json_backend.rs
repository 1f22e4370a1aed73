use chrono::Utc;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::{Config, ConfigManager},
    core::utils::{ensure_dir, write_atomic, PathResolver},
    errors::StorageError,
    ledger::UserStore,
};

use super::{Result, StorageBackend};

const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S_%3f";

/// Stores the user map as pretty JSON and keeps rolling copies of earlier saves.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    data_path: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonStorage {
    pub fn new(data_path: PathBuf, backups_dir: PathBuf, retention: usize) -> Self {
        Self {
            data_path,
            backups_dir,
            retention: retention.max(1),
        }
    }

    pub fn from_config(manager: &ConfigManager, config: &Config) -> Self {
        Self::new(
            manager.data_path(config),
            PathResolver::backup_dir_in(manager.base_dir()),
            config.backup_retention,
        )
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Backup files, newest first.
    pub fn list_backups(&self) -> Result<Vec<PathBuf>> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(BACKUP_EXTENSION) {
                entries.push(path);
            }
        }
        entries.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
        Ok(entries)
    }

    /// Replaces the data file with a backup and returns the restored store.
    pub fn restore_backup(&self, backup: &Path) -> Result<UserStore> {
        if !backup.exists() {
            return Err(StorageError::BackupNotFound(backup.display().to_string()));
        }
        let data = fs::read_to_string(backup)?;
        let store: UserStore = serde_json::from_str(&data)?;
        write_atomic(&self.data_path, &data)?;
        tracing::info!(backup = %backup.display(), "restored store from backup");
        Ok(store)
    }

    fn backup_existing_file(&self) -> Result<()> {
        if !self.data_path.exists() {
            return Ok(());
        }
        ensure_dir(&self.backups_dir)?;
        let stem = self
            .data_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("wallet_data");
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT);
        let backup = self
            .backups_dir
            .join(format!("{stem}_{timestamp}.{BACKUP_EXTENSION}"));
        fs::copy(&self.data_path, &backup)?;
        self.prune_backups()
    }

    fn prune_backups(&self) -> Result<()> {
        for stale in self.list_backups()?.iter().skip(self.retention) {
            if let Err(err) = fs::remove_file(stale) {
                tracing::warn!(path = %stale.display(), %err, "failed to prune backup");
            }
        }
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Option<UserStore>> {
        if !self.data_path.exists() {
            tracing::info!(path = %self.data_path.display(), "no data file found");
            return Ok(None);
        }
        let data = fs::read_to_string(&self.data_path)?;
        let store: UserStore = serde_json::from_str(&data)?;
        tracing::info!(users = store.len(), "loaded user store");
        Ok(Some(store))
    }

    fn save(&self, store: &UserStore) -> Result<()> {
        let json = serde_json::to_string_pretty(store)?;
        if let Err(err) = self.backup_existing_file() {
            tracing::warn!(%err, dir = %self.backups_dir.display(), "failed to back up previous data file");
        }
        write_atomic(&self.data_path, &json)?;
        tracing::info!(users = store.len(), path = %self.data_path.display(), "saved user store");
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.data_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Transaction;
    use tempfile::TempDir;

    fn storage_with_temp_dir(retention: usize) -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(
            temp.path().join("wallet_data.json"),
            temp.path().join("backups"),
            retention,
        );
        (storage, temp)
    }

    fn sample_store() -> UserStore {
        let mut store = UserStore::new();
        let alice = store.register("alice", "pw1").unwrap();
        crate::core::services::TransactionService::post(
            alice.wallet_mut(),
            Transaction::expense("food", 12.0),
        )
        .unwrap();
        store
    }

    #[test]
    fn load_without_file_is_none() {
        let (storage, _guard) = storage_with_temp_dir(3);
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir(3);
        let store = sample_store();
        storage.save(&store).unwrap();
        assert_eq!(storage.load().unwrap(), Some(store));
    }

    #[test]
    fn repeated_saves_keep_bounded_backups() {
        let (storage, _guard) = storage_with_temp_dir(2);
        let store = sample_store();
        for _ in 0..4 {
            storage.save(&store).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        let backups = storage.list_backups().unwrap();
        assert_eq!(backups.len(), 2);
    }

    #[test]
    fn save_survives_unusable_backup_dir() {
        let (storage, temp) = storage_with_temp_dir(3);
        fs::write(temp.path().join("backups"), "not a directory").unwrap();
        let first = sample_store();
        storage.save(&first).unwrap();

        let mut second = first.clone();
        second.register("bob", "pw2").unwrap();
        storage.save(&second).unwrap();

        assert_eq!(storage.load().unwrap(), Some(second));
    }

    #[test]
    fn corrupt_file_reports_serde_error() {
        let (storage, _guard) = storage_with_temp_dir(3);
        fs::write(storage.data_path(), "{ broken").unwrap();
        assert!(matches!(storage.load(), Err(StorageError::Serde(_))));
    }

    #[test]
    fn restore_replaces_data_file() {
        let (storage, _guard) = storage_with_temp_dir(3);
        let first = sample_store();
        storage.save(&first).unwrap();

        let mut second = first.clone();
        second.register("bob", "pw2").unwrap();
        storage.save(&second).unwrap();

        let backup = storage.list_backups().unwrap().remove(0);
        let restored = storage.restore_backup(&backup).unwrap();
        assert_eq!(restored, first);
        assert_eq!(storage.load().unwrap(), Some(first));
    }

    #[test]
    fn restore_missing_backup_fails() {
        let (storage, temp) = storage_with_temp_dir(3);
        let err = storage
            .restore_backup(&temp.path().join("backups").join("nope.json"))
            .unwrap_err();
        assert!(matches!(err, StorageError::BackupNotFound(_)));
    }
}
