//! # Tokengate
//!
//! A minimal stateless authentication service built with Rust and Axum.
//! It registers users, verifies credentials and issues signed bearer
//! tokens that gate access to protected endpoints.
//!
//! ## Overview
//!
//! - **Registration/Login**: bcrypt-hashed credentials, token issued on
//!   success
//! - **Stateless tokens**: HMAC-SHA-256 signed JWTs carrying subject,
//!   issued-at and expiry; no server-side session or token record
//! - **Request gate**: middleware that converts a bearer token into a
//!   request-scoped authenticated context, or rejects with 401
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Env-loaded configuration (JWT secret, CORS)
//! ├── middleware/       # Authentication gate and extractors
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Registration and login
//! │   ├── users/       # Identity model and credential store
//! │   └── demo/        # Protected demo + public health endpoints
//! └── utils/           # Errors, token codec, password hashing
//! ```
//!
//! Each feature module follows a consistent structure: `controller.rs`
//! for HTTP handlers, `service.rs` for business logic, `model.rs` for
//! data types and `router.rs` for route wiring.
//!
//! ## Authentication
//!
//! Tokens are valid for 24 hours by default (`JWT_TOKEN_EXPIRY`). There
//! is no refresh or revocation: validity is decided purely from the
//! signature and the expiry claim at verification time.
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_TOKEN_EXPIRY=86400
//! ALLOWED_ORIGINS=http://localhost:3000
//! ```
//!
//! ## Security Considerations
//!
//! - Passwords are hashed with bcrypt and never stored or logged in
//!   plaintext
//! - Unknown-user and wrong-password logins return the same response so
//!   usernames cannot be enumerated
//! - The signing secret should be cryptographically random and sourced
//!   from a secret store in production

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
