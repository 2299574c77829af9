use anyhow::Context;
use bcrypt::{DEFAULT_COST, hash, verify};

/// Hash a plaintext password with bcrypt.
///
/// The plaintext is consumed here and nowhere else; it is never stored
/// or logged.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    hash(password, DEFAULT_COST).context("failed to hash password")
}

/// Check a plaintext password against a stored bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> anyhow::Result<bool> {
    verify(password, hash).context("failed to verify password")
}
