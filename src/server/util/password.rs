//! Password hashing with Argon2id.
//!
//! Hashes are stored as PHC strings with the salt embedded; verification
//! yields a plain boolean and never the hash itself.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::Error;

/// Hash a password with a freshly generated salt.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored PHC string.
///
/// A mismatch is `Ok(false)`; only a malformed stored hash is an error.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| Error::PasswordHash(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::PasswordHash(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{hash_password, verify_password};

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_password("correct horse battery staple").unwrap();

        assert!(verify_password("correct horse battery staple", &hash).unwrap());
        assert!(!verify_password("incorrect horse", &hash).unwrap());
    }

    /// Two hashes of the same password differ because each gets a fresh
    /// salt.
    #[test]
    fn salts_are_unique_per_hash() {
        let first = hash_password("hunter2").unwrap();
        let second = hash_password("hunter2").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("hunter2", &first).unwrap());
        assert!(verify_password("hunter2", &second).unwrap());
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        let result = verify_password("anything", "not-a-phc-string");

        assert!(result.is_err());
    }
}
