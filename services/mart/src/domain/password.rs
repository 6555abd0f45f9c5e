//! Argon2id password hashing.

use anyhow::anyhow;
use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};

use crate::error::MartServiceError;

/// Hash a raw password into a PHC-format Argon2id string.
pub fn hash_password(password: &str) -> Result<String, MartServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| MartServiceError::Internal(anyhow!("hash password: {e}")))?;
    Ok(hash.to_string())
}

/// Verify a raw password against a stored PHC string.
///
/// An unparseable stored hash is an internal error, not a credential
/// mismatch.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, MartServiceError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| MartServiceError::Internal(anyhow!("parse stored password hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
