//! Credential store seam.
//!
//! The authentication core and the request gate only ever talk to
//! [`UserStore`]; the backing storage is interchangeable. The in-memory
//! implementation backs the service process and the test suite.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;
use uuid::Uuid;

use super::model::{NewUser, User};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("username already exists")]
    DuplicateUsername,
}

/// Store of identity records, keyed by unique username.
pub trait UserStore: Send + Sync {
    fn find_by_username(&self, username: &str) -> Option<User>;

    /// Persist a new identity, assigning its id.
    ///
    /// The store enforces username uniqueness; a conflicting save leaves
    /// the existing record untouched.
    fn save(&self, user: NewUser) -> Result<User, StoreError>;
}

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn find_by_username(&self, username: &str) -> Option<User> {
        // A panicked writer cannot leave the map half-updated, so a
        // poisoned lock is still safe to read through.
        self.users
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(username)
            .cloned()
    }

    fn save(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());

        if users.contains_key(&user.username) {
            return Err(StoreError::DuplicateUsername);
        }

        let user = User {
            id: Uuid::new_v4(),
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            password_hash: user.password_hash,
            role: user.role,
        };
        users.insert(user.username.clone(), user.clone());

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::users::model::UserRole;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password_hash: "$2b$12$fakehash".to_string(),
            role: UserRole::User,
        }
    }

    #[test]
    fn test_save_assigns_id_and_find_returns_record() {
        let store = InMemoryUserStore::new();

        let saved = store.save(new_user("alice")).unwrap();
        assert_eq!(saved.username, "alice");

        let found = store.find_by_username("alice").unwrap();
        assert_eq!(found, saved);
    }

    #[test]
    fn test_find_unknown_username() {
        let store = InMemoryUserStore::new();
        assert!(store.find_by_username("nobody").is_none());
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let store = InMemoryUserStore::new();

        let first = store.save(new_user("bob")).unwrap();
        let result = store.save(new_user("bob"));
        assert_eq!(result.unwrap_err(), StoreError::DuplicateUsername);

        // The original record is untouched.
        assert_eq!(store.find_by_username("bob").unwrap(), first);
    }

    #[test]
    fn test_store_survives_poisoned_lock() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryUserStore::new());
        store.save(new_user("alice")).unwrap();

        // Panic while holding the write lock to poison it.
        let poisoner = Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.users.write().unwrap();
            panic!("poisoning the store lock");
        })
        .join();

        assert!(store.find_by_username("alice").is_some());
        store.save(new_user("bob")).unwrap();
    }

    #[test]
    fn test_distinct_usernames_get_distinct_ids() {
        let store = InMemoryUserStore::new();

        let alice = store.save(new_user("alice")).unwrap();
        let bob = store.save(new_user("bob")).unwrap();
        assert_ne!(alice.id, bob.id);
    }
}
