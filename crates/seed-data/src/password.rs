//! Password hashing for seeded users.

use crate::db::SeedError;

/// bcrypt cost used for every stored password.
pub const HASH_COST: u32 = 10;

/// Hashes a plaintext password with a fresh salt.
pub fn hash_password(password: &str) -> Result<String, SeedError> {
    Ok(bcrypt::hash(password, HASH_COST)?)
}

/// Checks a plaintext password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, SeedError> {
    Ok(bcrypt::verify(password, hash)?)
}

/// Hashes on the blocking pool so concurrent rows don't stall the runtime.
pub(crate) async fn hash_password_blocking(password: String) -> Result<String, SeedError> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("123456").unwrap();

        assert_ne!(hash, "123456");
        assert!(hash.starts_with("$2b$10$"));
        assert!(verify_password("123456", &hash).unwrap());
        assert!(!verify_password("654321", &hash).unwrap());
    }

    #[test]
    fn test_salted() {
        let a = hash_password("123456").unwrap();
        let b = hash_password("123456").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(verify_password("123456", "not-a-hash").is_err());
    }

    #[tokio::test]
    async fn test_hash_password_blocking() {
        let hash = hash_password_blocking("secret".to_string()).await.unwrap();
        assert!(verify_password("secret", &hash).unwrap());
    }
}
