//! Password hashing for SkillSwap.
//!
//! The mock-auth original kept passwords in the clear; this service replaces
//! that with PBKDF2-HMAC-SHA256 digests and per-user random salts. Sign-in
//! verifies against the stored digest, so plaintext never touches the store.

use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};
use std::num::NonZeroU32;
use zeroize::Zeroize;

use crate::types::errors::CryptoError;

/// PBKDF2 iteration count for password hashing.
const PBKDF2_ITERATIONS: u32 = 100_000;

/// Salt length in bytes.
const SALT_LENGTH: usize = 16;

/// Derived hash length in bytes.
const HASH_LENGTH: usize = 32;

/// Trait defining password hashing operations.
pub trait CryptoServiceTrait {
    /// Generates a cryptographically secure random salt.
    fn generate_salt(&self) -> Result<Vec<u8>, CryptoError>;

    /// Derives a password hash from a password and salt using PBKDF2.
    fn hash_password(&self, password: &str, salt: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Verifies a password against a previously derived hash.
    fn verify_password(&self, password: &str, salt: &[u8], expected_hash: &[u8]) -> bool;

    /// Securely clears sensitive data from memory by overwriting with zeros.
    fn zeroize_memory(&self, data: &mut [u8]);
}

/// Implementation of password hashing using the `ring` crate.
pub struct CryptoService {
    rng: SystemRandom,
}

impl CryptoService {
    /// Creates a new CryptoService instance.
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for CryptoService {
    fn default() -> Self {
        Self::new()
    }
}

impl CryptoServiceTrait for CryptoService {
    fn generate_salt(&self) -> Result<Vec<u8>, CryptoError> {
        let mut salt = vec![0u8; SALT_LENGTH];
        self.rng
            .fill(&mut salt)
            .map_err(|_| CryptoError::RandomGeneration("Failed to generate salt".to_string()))?;
        Ok(salt)
    }

    fn hash_password(&self, password: &str, salt: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let iterations = NonZeroU32::new(PBKDF2_ITERATIONS)
            .ok_or_else(|| CryptoError::KeyDerivation("Invalid iteration count".to_string()))?;

        let mut hash = vec![0u8; HASH_LENGTH];
        pbkdf2::derive(
            pbkdf2::PBKDF2_HMAC_SHA256,
            iterations,
            salt,
            password.as_bytes(),
            &mut hash,
        );

        Ok(hash)
    }

    fn verify_password(&self, password: &str, salt: &[u8], expected_hash: &[u8]) -> bool {
        let Some(iterations) = NonZeroU32::new(PBKDF2_ITERATIONS) else {
            return false;
        };
        pbkdf2::verify(
            pbkdf2::PBKDF2_HMAC_SHA256,
            iterations,
            salt,
            password.as_bytes(),
            expected_hash,
        )
        .is_ok()
    }

    fn zeroize_memory(&self, data: &mut [u8]) {
        data.zeroize();
    }
}
