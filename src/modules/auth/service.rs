//! Registration and credential verification.

use thiserror::Error;
use tracing::instrument;

use crate::modules::users::model::NewUser;
use crate::modules::users::store::UserStore;
use crate::utils::errors::AppError;
use crate::utils::jwt::TokenCodec;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, RegisterRequest};

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("username already taken")]
    UsernameTaken,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("unknown user")]
    UnknownUser,
    #[error("password mismatch")]
    BadCredentials,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<RegistrationError> for AppError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::UsernameTaken => AppError::conflict(err),
            RegistrationError::Internal(err) => AppError::internal(err),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            // One message for both outcomes so responses cannot be used
            // to enumerate usernames.
            AuthError::UnknownUser | AuthError::BadCredentials => {
                AppError::unauthorized(anyhow::anyhow!("Invalid username or password"))
            }
            AuthError::Internal(err) => AppError::internal(err),
        }
    }
}

pub struct AuthService;

impl AuthService {
    /// Register a new identity and issue its first token.
    ///
    /// A failed registration persists nothing: uniqueness is checked up
    /// front and re-enforced by the store at save time, so a losing
    /// racer also surfaces `UsernameTaken`.
    #[instrument(skip_all, fields(username = %request.username))]
    pub fn register(
        store: &dyn UserStore,
        codec: &TokenCodec,
        request: RegisterRequest,
    ) -> Result<String, RegistrationError> {
        if store.find_by_username(&request.username).is_some() {
            return Err(RegistrationError::UsernameTaken);
        }

        let password_hash = hash_password(&request.password)?;

        let user = store
            .save(NewUser {
                username: request.username,
                first_name: request.first_name,
                last_name: request.last_name,
                password_hash,
                role: request.role,
            })
            .map_err(|_| RegistrationError::UsernameTaken)?;

        tracing::info!(user_id = %user.id, "user registered");

        Ok(codec.issue(&user.username)?)
    }

    /// Verify credentials and issue a token on success.
    ///
    /// Reads the store, never writes it.
    #[instrument(skip_all, fields(username = %request.username))]
    pub fn authenticate(
        store: &dyn UserStore,
        codec: &TokenCodec,
        request: LoginRequest,
    ) -> Result<String, AuthError> {
        let user = store
            .find_by_username(&request.username)
            .ok_or(AuthError::UnknownUser)?;

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AuthError::BadCredentials);
        }

        Ok(codec.issue(&user.username)?)
    }
}
