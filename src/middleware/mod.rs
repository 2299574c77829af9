//! Request-processing middleware.
//!
//! # Authentication flow
//!
//! 1. Client sends a request with `Authorization: Bearer <token>`
//! 2. [`auth::require_auth`] verifies the token and loads the identity
//! 3. A request-scoped [`auth::AuthenticatedContext`] is established
//! 4. Handlers receive it through the [`auth::CurrentUser`] extractor
//!
//! Allow-listed routes (register, login, health, docs) are never layered
//! with the gate and need no credentials.

pub mod auth;
