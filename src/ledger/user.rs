use serde::{Deserialize, Serialize};

use super::wallet::Wallet;

/// A registered account owning one wallet and a notification pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    username: String,
    password: String,
    #[serde(default)]
    wallet: Wallet,
    #[serde(default)]
    pending_notification: Option<String>,
    #[serde(default)]
    notification_history: Vec<String>,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            wallet: Wallet::new(),
            pending_notification: None,
            notification_history: Vec::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Plain equality check; passwords are stored as entered.
    pub fn authenticate(&self, password: &str) -> bool {
        self.password == password
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn wallet_mut(&mut self) -> &mut Wallet {
        &mut self.wallet
    }

    /// Sets the pending notification, discarding one that was never read.
    pub fn add_notification(&mut self, text: impl Into<String>) {
        self.pending_notification = Some(text.into());
    }

    pub fn pending_notification(&self) -> Option<&str> {
        self.pending_notification.as_deref()
    }

    /// Drains the pending notification into the history and returns it.
    pub fn take_notification(&mut self) -> Option<String> {
        let notification = self.pending_notification.take()?;
        self.notification_history.push(notification.clone());
        Some(notification)
    }

    pub fn notifications(&self) -> &[String] {
        &self.notification_history
    }
}
