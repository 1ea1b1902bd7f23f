use crate::utils::error::AppError;
use bcrypt::{hash, verify};

/// Cost factor used for every stored credential (salt rounds).
pub const BCRYPT_COST: u32 = 10;

/// Hashes a plaintext password with an embedded random salt.
///
/// A failure here must abort the write that requested it - plaintext is
/// never stored as a fallback.
pub fn hash_password(plaintext: &str) -> Result<String, AppError> {
    hash(plaintext, BCRYPT_COST).map_err(|e| AppError::HashError(e.to_string()))
}

/// Checks a plaintext password against a stored digest.
pub fn verify_password(plaintext: &str, digest: &str) -> Result<bool, AppError> {
    verify(plaintext, digest).map_err(|e| AppError::HashError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_never_returns_plaintext() {
        let digest = hash_password("secret1").unwrap();
        assert_ne!(digest, "secret1");
        assert!(digest.starts_with("$2"));
    }

    #[test]
    fn test_same_plaintext_different_digests() {
        // Salt is embedded in the output, so two hashes never collide
        let a = hash_password("secret1").unwrap();
        let b = hash_password("secret1").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_round_trip() {
        let digest = hash_password("secret1").unwrap();
        assert!(verify_password("secret1", &digest).unwrap());
        assert!(!verify_password("secret2", &digest).unwrap());
    }

    #[test]
    fn test_verify_garbage_digest_is_error() {
        assert!(verify_password("secret1", "not-a-bcrypt-digest").is_err());
    }
}
