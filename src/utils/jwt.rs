//! Token encoding and verification.
//!
//! Tokens are compact JWS strings signed with HMAC-SHA-256. Validity is
//! decided purely from the signature and the `exp` claim; there is no
//! server-side token record.

use anyhow::Context;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::utils::errors::AppError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,
    #[error("invalid token signature")]
    BadSignature,
    #[error("token expired")]
    Expired,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::unauthorized(err)
    }
}

/// Signs and verifies bearer tokens with a single process-wide secret.
///
/// Built once at startup from [`JwtConfig`] and shared through
/// `AppState`; there is no hidden global key.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // A token is valid strictly while now < exp.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            token_expiry: config.token_expiry,
            validation,
        }
    }

    /// Issue a signed token for `subject`, valid for the configured
    /// expiry window (24h by default).
    pub fn issue(&self, subject: &str) -> anyhow::Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now as usize,
            exp: (now + self.token_expiry) as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key).context("failed to sign token")
    }

    /// Parse and verify a token, returning its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::Malformed,
            })
    }

    /// Return the subject claim without enforcing expiry.
    ///
    /// Used by the request gate to decide whether full validation is
    /// worth attempting. Malformed or wrongly signed input yields `None`.
    pub fn extract_subject(&self, token: &str) -> Option<String> {
        let mut validation = self.validation.clone();
        validation.validate_exp = false;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .ok()
            .map(|data| data.claims.sub)
    }
}
