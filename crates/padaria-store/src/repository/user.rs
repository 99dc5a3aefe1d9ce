//! # User Repository
//!
//! The in-memory user list. Users are only ever appended.

use std::sync::Arc;

use padaria_core::{NewUser, User, ValidationError};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StoreResult;

/// Repository for user records.
#[derive(Debug, Clone)]
pub struct UserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(users: Arc<RwLock<Vec<User>>>) -> Self {
        UserRepository { users }
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }

    /// Finds a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    /// Appends a regular user with id = (number of users + 1).
    ///
    /// The uniqueness check and the append happen under one write lock.
    pub async fn insert(&self, profile: NewUser) -> StoreResult<User> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.username == profile.username) {
            return Err(ValidationError::Duplicate {
                field: "username".to_string(),
                value: profile.username,
            }
            .into());
        }

        let user = profile.into_user((users.len() + 1).to_string());
        debug!(id = %user.id, username = %user.username, "Inserting user");

        users.push(user.clone());
        Ok(user)
    }
}
