//! Per-request authentication gate.
//!
//! Every route that is not on the public allow-list is layered with
//! [`require_auth`]. The gate turns a `Authorization: Bearer <token>`
//! header into a request-scoped [`AuthenticatedContext`] or rejects the
//! request with an explicit 401; it never silently drops the chain.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use thiserror::Error;

use crate::modules::users::model::User;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("missing authorization header")]
    MissingHeader,
    #[error("authorization header is not a bearer token")]
    InvalidScheme,
    #[error("token subject could not be resolved")]
    UnresolvedSubject,
}

impl From<GateError> for AppError {
    fn from(err: GateError) -> Self {
        AppError::unauthorized(err)
    }
}

/// Verified identity bound to a single request.
///
/// Lives in the request extensions for the duration of one request and
/// nowhere else.
#[derive(Debug, Clone)]
pub struct AuthenticatedContext {
    pub user: User,
    pub authorities: Vec<String>,
}

impl AuthenticatedContext {
    fn new(user: User) -> Self {
        let authorities = vec![user.role.as_str().to_string()];
        Self { user, authorities }
    }
}

/// Middleware guarding protected routes.
///
/// Order of checks: header shape, subject extraction, identity lookup,
/// then full signature + expiry verification with the subject matched
/// against the stored username. Any failure short-circuits with 401.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(GateError::MissingHeader)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(GateError::InvalidScheme)?;

    let subject = state
        .token_codec
        .extract_subject(token)
        .ok_or(GateError::UnresolvedSubject)?;

    if req.extensions().get::<AuthenticatedContext>().is_none() {
        let user = state
            .users
            .find_by_username(&subject)
            .ok_or(GateError::UnresolvedSubject)?;

        let claims = state.token_codec.verify(token)?;
        if claims.sub != user.username {
            return Err(GateError::UnresolvedSubject.into());
        }

        req.extensions_mut().insert(AuthenticatedContext::new(user));
    }

    Ok(next.run(req).await)
}

/// Extractor handing the gate-established context to handlers.
///
/// Rejects with 401 if a request somehow reaches a protected handler
/// without having passed the gate.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedContext);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedContext>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Authentication required")))
    }
}
