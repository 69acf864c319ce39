//! Password value object and the credential capability.
//!
//! Hashing uses Argon2 with default parameters and a random salt per hash.
//! The plain text never leaves the functions that receive it.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::constants::UNUSABLE_PASSWORD_PREFIX;
use crate::error::{DomainError, DomainResult};

/// Capability of an entity that stores a hashed secret.
pub trait Credential {
    /// Replace the stored credential. `None` stores an unusable password.
    fn set_password(&mut self, raw: Option<&str>) -> DomainResult<()>;

    /// Check a plain text password against the stored credential.
    fn check_password(&self, raw: &str) -> bool;

    /// Whether the stored credential can ever verify.
    fn has_usable_password(&self) -> bool;

    /// Replace the stored credential with one that never verifies.
    fn set_unusable_password(&mut self) -> DomainResult<()> {
        self.set_password(None)
    }
}

/// Stored password: an Argon2 PHC string or an unusable marker.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain text password.
    ///
    /// # Errors
    /// Returns a password error if Argon2 rejects the input.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Hash `raw` when present, otherwise build an unusable password.
    pub fn from_raw(raw: Option<&str>) -> DomainResult<Self> {
        match raw {
            Some(plain_text) => Self::new(plain_text),
            None => Ok(Self::unusable()),
        }
    }

    /// A password that never verifies: the marker prefix plus random characters.
    pub fn unusable() -> Self {
        let noise = SaltString::generate(&mut OsRng);
        Self {
            hash: format!("{}{}", UNUSABLE_PASSWORD_PREFIX, noise.as_str()),
        }
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    pub fn is_usable(&self) -> bool {
        !self.hash.starts_with(UNUSABLE_PASSWORD_PREFIX)
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str) -> bool {
        if !self.is_usable() {
            return false;
        }
        Self::verify_hash(plain_text, &self.hash).unwrap_or(false)
    }

    fn hash(plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::password(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_hash(plain_text: &str, hash: &str) -> DomainResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| DomainError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Self::argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "SecurePassword123!";
        let password = Password::new(plain).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("WrongPassword123"));
        assert_ne!(password.as_str(), plain);
    }

    #[test]
    fn test_password_from_hash() {
        let plain = "TestPassword123";
        let password = Password::new(plain).unwrap();
        let hash = password.as_str().to_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify(plain));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::new(plain).unwrap();
        let pass2 = Password::new(plain).unwrap();

        assert_ne!(pass1.as_str(), pass2.as_str());
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_short_password_accepted() {
        let password = Password::new("x").unwrap();
        assert!(password.verify("x"));
    }

    #[test]
    fn test_unusable_password_never_verifies() {
        let password = Password::unusable();

        assert!(!password.is_usable());
        assert!(password.as_str().starts_with(UNUSABLE_PASSWORD_PREFIX));
        assert!(!password.verify(""));
        assert!(!password.verify(password.as_str()));
    }

    #[test]
    fn test_unusable_passwords_differ() {
        assert_ne!(Password::unusable().as_str(), Password::unusable().as_str());
    }

    #[test]
    fn test_from_raw() {
        assert!(Password::from_raw(Some("secret")).unwrap().is_usable());
        assert!(!Password::from_raw(None).unwrap().is_usable());
    }

    #[test]
    fn test_malformed_hash_fails_verification() {
        let password = Password::from_hash("not-a-phc-string".to_string());
        assert!(!password.verify("not-a-phc-string"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::new("hunter22").unwrap();
        let debug = format!("{:?}", password);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(password.as_str()));
    }
}
