#![allow(dead_code)]

use std::{
    io::Cursor,
    path::PathBuf,
    sync::Mutex,
};

use once_cell::sync::Lazy;
use tempfile::TempDir;
use wallet_core::{
    cli::{io::ScriptSource, output, Session},
    storage::JsonStorage,
};

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn storage_in(base: &std::path::Path) -> JsonStorage {
    JsonStorage::new(base.join("wallet_data.json"), base.join("backups"), 3)
}

/// Runs a scripted session against the store in `base` and returns the console text.
pub fn run_script(base: &std::path::Path, script: &str) -> String {
    output::set_color_enabled(false);
    let input = ScriptSource::new(Cursor::new(script.to_string()));
    let mut session = Session::new(Box::new(storage_in(base)), Box::new(input), Vec::new())
        .expect("create session");
    session.run().expect("run session");
    String::from_utf8(session.console().clone()).expect("utf8 console")
}
