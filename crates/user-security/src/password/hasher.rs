//! Password hashing using Argon2.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher as _, SaltString},
    Algorithm, Argon2, Params, Version,
};
use std::sync::Arc;
use tracing::debug;
use user_core::{AppResult, ErrorKind};

/// Interface for password hashing operations.
pub trait PasswordHasherInterface: Send + Sync {
    /// Hashes a plaintext password into a PHC string.
    fn hash(&self, password: &str) -> AppResult<String>;
}

/// Argon2id password hasher with a fixed cost.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Arc<Argon2<'static>>,
}

impl PasswordHasher {
    /// Creates a hasher using the Argon2id default cost (19 MiB, 2 passes, 1 lane).
    #[must_use]
    pub fn new() -> Self {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::DEFAULT);
        Self {
            argon2: Arc::new(argon2),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherInterface for PasswordHasher {
    fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ErrorKind::Hashing.error("Hash Password Err").with_context(e))?;

        debug!("Password hashed successfully");
        Ok(hash.to_string())
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}
