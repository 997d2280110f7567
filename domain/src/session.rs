//! Session identity provider.

use std::cell::RefCell;
use std::collections::HashMap;

use shared::SessionUser;
use thiserror::Error;

/// Key/value session storage, shaped like the browser's `localStorage`
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no user in session storage under '{key}'")]
    Missing { key: String },

    #[error("malformed session user: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Read the authenticated user stored as JSON under `key`
pub fn current_user(storage: &dyn SessionStorage, key: &str) -> Result<SessionUser, SessionError> {
    let raw = storage.get_item(key).ok_or_else(|| SessionError::Missing {
        key: key.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(SessionError::Malformed)
}

/// Session storage held in memory, for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct InMemorySessionStorage {
    items: RefCell<HashMap<String, String>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage already holding `user` as JSON under `key`
    pub fn with_user(key: &str, user: &SessionUser) -> Result<Self, serde_json::Error> {
        let storage = Self::new();
        storage.set_item(key, &serde_json::to_string(user)?);
        Ok(storage)
    }

    pub fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }

    pub fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_reads_email() {
        let storage = InMemorySessionStorage::new();
        storage.set_item("user", r#"{"email":"test@employee.com"}"#);

        let user = current_user(&storage, "user").unwrap();
        assert_eq!(user.email, "test@employee.com");
    }

    #[test]
    fn test_with_user_round_trip() {
        let user = SessionUser {
            email: "employee@test.tld".to_string(),
            user_type: Some("Employee".to_string()),
            status: Some("connected".to_string()),
        };
        let storage = InMemorySessionStorage::with_user("user", &user).unwrap();

        assert_eq!(current_user(&storage, "user").unwrap(), user);
    }

    #[test]
    fn test_with_user_under_custom_key() {
        let user = SessionUser {
            email: "admin@test.tld".to_string(),
            user_type: Some("Admin".to_string()),
            status: None,
        };
        let storage = InMemorySessionStorage::with_user("billed-user", &user).unwrap();

        assert_eq!(current_user(&storage, "billed-user").unwrap(), user);
        assert!(matches!(current_user(&storage, "user"), Err(SessionError::Missing { .. })));
    }

    #[test]
    fn test_missing_user() {
        let storage = InMemorySessionStorage::new();

        let err = current_user(&storage, "user").unwrap_err();
        assert!(matches!(err, SessionError::Missing { ref key } if key == "user"));
    }

    #[test]
    fn test_malformed_user() {
        let storage = InMemorySessionStorage::new();
        storage.set_item("user", "not json");
        assert!(matches!(current_user(&storage, "user"), Err(SessionError::Malformed(_))));

        storage.set_item("user", r#"{"type":"Employee"}"#);
        assert!(matches!(current_user(&storage, "user"), Err(SessionError::Malformed(_))));
    }

    #[test]
    fn test_removed_user() {
        let storage = InMemorySessionStorage::new();
        storage.set_item("user", r#"{"email":"a@b.c"}"#);
        storage.remove_item("user");

        assert!(storage.get_item("user").is_none());
    }
}
