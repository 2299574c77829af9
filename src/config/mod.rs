//! Configuration loaded from environment variables at startup.
//!
//! - [`cors`]: allowed CORS origins (`ALLOWED_ORIGINS`)
//! - [`jwt`]: token signing secret and expiry window
//!   (`JWT_SECRET`, `JWT_TOKEN_EXPIRY`)
//!
//! Config structs are plain values passed into `AppState`; nothing reads
//! the environment after startup.

pub mod cors;
pub mod jwt;
