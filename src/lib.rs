#![doc(test(attr(deny(warnings))))]

//! Wallet Core is a multi-user personal-finance ledger: wallets of income and
//! expense categories, budgets, threshold notifications, and a numbered-menu
//! shell that persists every user's wallet between sessions.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Wallet Core tracing initialized.");
    });
}
