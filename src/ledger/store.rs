use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::user::User;
use crate::errors::StoreError;

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Every registered user keyed by username; persisted as a single snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserStore {
    #[serde(default = "UserStore::schema_version_default")]
    pub schema_version: u8,
    #[serde(default)]
    users: BTreeMap<String, User>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            users: BTreeMap::new(),
        }
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new user with an empty wallet.
    pub fn register(&mut self, username: &str, password: &str) -> Result<&mut User, StoreError> {
        if username.is_empty() || password.is_empty() {
            return Err(StoreError::InvalidCredentials);
        }
        if self.users.contains_key(username) {
            return Err(StoreError::UserExists(username.to_string()));
        }
        tracing::info!(username, "registered user");
        Ok(self
            .users
            .entry(username.to_string())
            .or_insert_with(|| User::new(username, password)))
    }

    /// Looks up a user and checks the password.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<&User, StoreError> {
        self.users
            .get(username)
            .filter(|user| user.authenticate(password))
            .ok_or(StoreError::AuthenticationFailed)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn user(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    pub fn user_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.get_mut(username)
    }

    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
