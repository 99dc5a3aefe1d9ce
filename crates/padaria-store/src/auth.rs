//! # Auth Service
//!
//! Mock authentication over the user list.
//!
//! ## Rules
//! ```text
//! sign_in(u, p)   u == "admin" && p == "senha123"  ──► admin user
//!                 anything else                    ──► InvalidCredentials
//!
//! sign_up(profile)
//!   1. phone  ^[0-9]{10,11}$                       ──► else ValidationError
//!   2. email  ^[^\s@]+@[^\s@]+\.[^\s@]+$           ──► else ValidationError
//!   3. username not taken                          ──► else ValidationError
//!   4. append { id: len + 1, is_admin: false }
//!
//! sign_out()       always Ok, clears nothing
//! current_user()   always None
//! ```
//!
//! No passwords are stored. Users created by sign-up exist in the list but
//! cannot sign in.

use padaria_core::validation::{validate_email, validate_phone};
use padaria_core::{NewUser, User};
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};
use crate::repository::user::UserRepository;
use crate::seed::{self, ADMIN_PASSWORD, ADMIN_USERNAME};

/// Sign-in, sign-up and session stubs.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: UserRepository,
}

impl AuthService {
    pub fn new(users: UserRepository) -> Self {
        AuthService { users }
    }

    /// Signs in with the hardcoded administrator pair.
    pub async fn sign_in(&self, username: &str, password: &str) -> StoreResult<User> {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            warn!(username = %username, "Sign-in rejected");
            return Err(StoreError::InvalidCredentials);
        }

        let user = self
            .users
            .find_by_username(ADMIN_USERNAME)
            .await
            .unwrap_or_else(seed::admin_user);

        info!(user_id = %user.id, "Signed in");
        Ok(user)
    }

    /// Registers a new regular user.
    ///
    /// ## Errors
    /// `StoreError::Validation` for a malformed phone, a malformed email, or
    /// a username that is already taken, checked in that order.
    pub async fn sign_up(&self, profile: NewUser) -> StoreResult<User> {
        validate_phone(&profile.phone)?;
        validate_email(&profile.email)?;

        let user = self.users.insert(profile).await?;
        info!(user_id = %user.id, username = %user.username, "Signed up");
        Ok(user)
    }

    /// Always succeeds. Session state lives with the caller.
    pub async fn sign_out(&self) -> StoreResult<()> {
        info!("Signed out");
        Ok(())
    }

    /// Session restore stub: there is never a remembered user.
    pub async fn current_user(&self) -> Option<User> {
        None
    }
}
