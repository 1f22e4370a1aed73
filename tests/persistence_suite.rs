mod common;

use wallet_core::{
    config::{Config, ConfigManager},
    core::services::{BudgetService, TransactionService},
    ledger::{Transaction, UserStore},
    storage::{JsonStorage, StorageBackend},
};

fn populated_store() -> UserStore {
    let mut store = UserStore::new();

    let alice = store.register("alice", "secret").unwrap();
    TransactionService::post(alice.wallet_mut(), Transaction::income("salary", 1200.0)).unwrap();
    BudgetService::set_budget(alice.wallet_mut(), "food", 300.0).unwrap();
    TransactionService::post(alice.wallet_mut(), Transaction::expense("food", 45.25)).unwrap();
    alice.add_notification("Expense exceeds budget for category: food");

    let bob = store.register("bob", "hunter2").unwrap();
    TransactionService::post(bob.wallet_mut(), Transaction::expense("travel", 80.0)).unwrap();

    store
}

#[test]
fn store_roundtrips_every_user_and_wallet() {
    let base = common::temp_base();
    let storage = common::storage_in(&base);
    let store = populated_store();

    storage.save(&store).unwrap();
    let loaded = storage.load().unwrap().expect("store present");

    assert_eq!(loaded, store);
    let alice = loaded.user("alice").unwrap();
    assert_eq!(alice.wallet().balance(), 1154.75);
    assert_eq!(alice.wallet().category("food").unwrap().budget(), Some(300.0));
    assert!(alice.pending_notification().is_some());
    assert!(loaded.authenticate("bob", "hunter2").is_ok());
}

#[test]
fn storage_uses_config_locations() {
    let base = common::temp_base();
    let manager = ConfigManager::with_base_dir(base.clone()).unwrap();
    let config = Config {
        data_file: "custom.json".into(),
        ..Config::default()
    };
    manager.save(&config).unwrap();

    let loaded = manager.load().unwrap();
    let storage = JsonStorage::from_config(&manager, &loaded);
    storage.save(&populated_store()).unwrap();

    assert!(base.join("custom.json").exists());
    assert_eq!(storage.location(), base.join("custom.json").as_path());
}

#[test]
fn second_save_creates_backup() {
    let base = common::temp_base();
    let storage = common::storage_in(&base);
    let store = populated_store();

    storage.save(&store).unwrap();
    assert!(storage.list_backups().unwrap().is_empty());
    storage.save(&store).unwrap();
    assert_eq!(storage.list_backups().unwrap().len(), 1);
}
