//! In-memory mock of the user directory for tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::entities::user::DirectoryUser;
use crate::errors::DomainError;

use super::r#trait::UserDirectoryTrait;

/// Mock user directory backed by an in-memory vector.
///
/// Tokens are registered explicitly; any unregistered token resolves to
/// no user, mirroring how the real directory treats invalid bearers.
#[derive(Default)]
pub struct MockUserDirectory {
    users: Arc<Mutex<Vec<DirectoryUser>>>,
    tokens: Arc<Mutex<HashMap<String, Uuid>>>,
}

impl MockUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory seeded with one user
    pub fn with_user(user: DirectoryUser) -> Self {
        let directory = Self::new();
        directory.users.lock().unwrap().push(user);
        directory
    }

    /// Add a user to the directory
    pub fn insert(&self, user: DirectoryUser) {
        self.users.lock().unwrap().push(user);
    }

    /// Associate a bearer token with a user id
    pub fn register_token(&self, token: impl Into<String>, user_id: Uuid) {
        self.tokens.lock().unwrap().insert(token.into(), user_id);
    }

    /// Fetch a user by id (test helper)
    pub fn get(&self, user_id: Uuid) -> Option<DirectoryUser> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
    }
}

#[async_trait]
impl UserDirectoryTrait for MockUserDirectory {
    async fn find_by_auth_token(&self, token: &str) -> Result<Option<DirectoryUser>, DomainError> {
        let user_id = match self.tokens.lock().unwrap().get(token) {
            Some(id) => *id,
            None => return Ok(None),
        };
        Ok(self.get(user_id))
    }

    async fn mark_phone_verified(&self, user_id: Uuid) -> Result<(), DomainError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == user_id) {
            Some(user) => {
                user.phone_verified = true;
                Ok(())
            }
            None => Err(DomainError::NotFound {
                resource: format!("user {}", user_id),
            }),
        }
    }

    async fn find_and_mark_phone_verified(
        &self,
        variants: &[String],
    ) -> Result<Option<DirectoryUser>, DomainError> {
        let mut users = self.users.lock().unwrap();
        for user in users.iter_mut() {
            if let Some(stored) = &user.phone {
                if variants.iter().any(|v| v == stored) {
                    user.phone_verified = true;
                    return Ok(Some(user.clone()));
                }
            }
        }
        Ok(None)
    }
}
