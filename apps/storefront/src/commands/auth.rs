//! # Auth Commands
//!
//! Sign-in, sign-up, sign-out and the profile view.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Flow                                         │
//! │                                                                         │
//! │  Login screen ── sign_in ──► AuthService ──► SessionState.set_user      │
//! │                                  │                  │                   │
//! │                       INVALID_CREDENTIALS        Home screen            │
//! │                       (stay on Login)                                   │
//! │                                                                         │
//! │  SignUp screen ── SignUpForm.validate ──► AuthService.sign_up           │
//! │                        │                        │                       │
//! │                  VALIDATION_ERROR          Login screen                 │
//! │                                                                         │
//! │  Home "Sair" ── sign_out ──► SessionState.clear_user ──► Login screen   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use padaria_core::validation::{validate_password, validate_person_name, validate_username};
use padaria_core::{NewUser, User, ValidationError};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{SessionState, StoreState};

/// Fields of the sign-up screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    /// Checks the form-only rules and yields the profile to register.
    ///
    /// Phone, email and username uniqueness are checked by the auth service.
    /// The password is dropped here.
    pub fn validate(&self) -> Result<NewUser, ValidationError> {
        validate_person_name(&self.name)?;
        validate_username(&self.username)?;
        validate_password(&self.password, &self.confirm_password)?;

        Ok(NewUser {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            username: self.username.trim().to_string(),
        })
    }
}

/// Signs in and remembers the user for this session.
///
/// Username and password are compared exactly as typed.
pub async fn sign_in(
    store: &StoreState,
    session: &SessionState,
    username: &str,
    password: &str,
) -> Result<User, ApiError> {
    debug!(username = %username, "sign_in command");

    let user = store.inner().auth().sign_in(username, password).await?;
    session.set_user(user.clone());
    Ok(user)
}

/// Registers a new user. Does not sign them in.
pub async fn sign_up(store: &StoreState, form: &SignUpForm) -> Result<User, ApiError> {
    debug!(username = %form.username, "sign_up command");

    let profile = form.validate()?;
    Ok(store.inner().auth().sign_up(profile).await?)
}

/// Signs out and forgets the session user.
pub async fn sign_out(store: &StoreState, session: &SessionState) -> Result<(), ApiError> {
    debug!("sign_out command");

    store.inner().auth().sign_out().await?;
    session.clear_user();
    Ok(())
}

/// The signed-in user, for the Profile screen.
pub fn get_profile(session: &SessionState) -> Result<User, ApiError> {
    session
        .current_user()
        .ok_or_else(|| ApiError::forbidden("Faça login para ver seu perfil"))
}

/// Startup session restore. The auth service never remembers anyone, so
/// this only ever leaves the session signed out.
pub async fn restore_session(store: &StoreState, session: &SessionState) -> Option<User> {
    let user = store.inner().auth().current_user().await;
    match &user {
        Some(user) => {
            info!(user_id = %user.id, "Session restored");
            session.set_user(user.clone());
        }
        None => debug!("No session to restore"),
    }
    user
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use padaria_store::{Store, StoreConfig};

    fn store() -> StoreState {
        StoreState::new(Store::seeded(StoreConfig::instant()))
    }

    fn form() -> SignUpForm {
        SignUpForm {
            name: "Joana Silva".to_string(),
            phone: "11999999999".to_string(),
            email: "joana@example.com".to_string(),
            username: "joana".to_string(),
            password: "segredo".to_string(),
            confirm_password: "segredo".to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_in_sets_session() {
        let store = store();
        let session = SessionState::new();

        let user = sign_in(&store, &session, "admin", "senha123").await.unwrap();
        assert!(user.is_admin);
        assert_eq!(session.current_user(), Some(user));
        assert_eq!(get_profile(&session).unwrap().email, "admin@example.com");
    }

    #[tokio::test]
    async fn test_sign_in_failure_keeps_session_empty() {
        let store = store();
        let session = SessionState::new();

        let err = sign_in(&store, &session, "admin", "errada").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert!(!session.is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_in_compares_username_as_typed() {
        let store = store();
        let session = SessionState::new();

        for username in [" admin", "admin ", "Admin"] {
            let err = sign_in(&store, &session, username, "senha123")
                .await
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidCredentials);
        }
        assert!(!session.is_signed_in());
    }

    #[tokio::test]
    async fn test_sign_out_clears_session() {
        let store = store();
        let session = SessionState::new();
        sign_in(&store, &session, "admin", "senha123").await.unwrap();

        sign_out(&store, &session).await.unwrap();
        assert!(!session.is_signed_in());
        assert_eq!(get_profile(&session).unwrap_err().code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn test_sign_up_registers_regular_user() {
        let store = store();
        let user = sign_up(&store, &form()).await.unwrap();

        assert_eq!(user.id, "2");
        assert!(!user.is_admin);
        assert_eq!(store.inner().users().count().await, 2);
    }

    #[tokio::test]
    async fn test_sign_up_form_rules() {
        let store = store();

        let short = SignUpForm {
            password: "12345".to_string(),
            confirm_password: "12345".to_string(),
            ..form()
        };
        assert!(matches!(
            short.validate(),
            Err(ValidationError::TooShort { min: 6, .. })
        ));

        let mismatch = SignUpForm {
            confirm_password: "outra".to_string(),
            ..form()
        };
        assert!(matches!(
            mismatch.validate(),
            Err(ValidationError::Mismatch { .. })
        ));

        let blank_name = SignUpForm {
            name: "  ".to_string(),
            ..form()
        };
        let err = sign_up(&store, &blank_name).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(store.inner().users().count().await, 1);
    }

    #[tokio::test]
    async fn test_sign_up_bad_phone_and_duplicate() {
        let store = store();

        let bad_phone = SignUpForm {
            phone: "123".to_string(),
            ..form()
        };
        let err = sign_up(&store, &bad_phone).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let taken = SignUpForm {
            username: "admin".to_string(),
            ..form()
        };
        let err = sign_up(&store, &taken).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_restore_session_is_always_signed_out() {
        let session = SessionState::new();
        assert!(restore_session(&store(), &session).await.is_none());
        assert!(!session.is_signed_in());
    }
}
