//! Argon2id password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;

use gobarber_core::providers::{HashProvider, ProviderError, Result};

/// Hashes passwords with Argon2id and the crate's default parameters.
///
/// Hashing is CPU bound, so both operations run on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2HashProvider;

impl Argon2HashProvider {
    pub fn new() -> Self {
        Self
    }
}

fn hash_password(payload: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(payload.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ProviderError::Hash(e.to_string()))
}

fn verify_password(payload: &str, hashed: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hashed).map_err(|e| ProviderError::Hash(e.to_string()))?;

    match Argon2::default().verify_password(payload.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(ProviderError::Hash(e.to_string())),
    }
}

#[async_trait]
impl HashProvider for Argon2HashProvider {
    async fn generate_hash(&self, payload: &str) -> Result<String> {
        let payload = payload.to_string();
        tokio::task::spawn_blocking(move || hash_password(&payload))
            .await
            .map_err(|e| ProviderError::Hash(e.to_string()))?
    }

    async fn compare_hash(&self, payload: &str, hashed: &str) -> Result<bool> {
        let payload = payload.to_string();
        let hashed = hashed.to_string();
        tokio::task::spawn_blocking(move || verify_password(&payload, &hashed))
            .await
            .map_err(|e| ProviderError::Hash(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_compare() {
        let provider = Argon2HashProvider::new();
        let hashed = provider.generate_hash("123456").await.unwrap();

        assert_ne!(hashed, "123456");
        assert!(hashed.starts_with("$argon2id$"));
        assert!(provider.compare_hash("123456", &hashed).await.unwrap());
        assert!(!provider.compare_hash("654321", &hashed).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let provider = Argon2HashProvider::new();
        let first = provider.generate_hash("123456").await.unwrap();
        let second = provider.generate_hash("123456").await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_compare_against_malformed_hash_fails() {
        let provider = Argon2HashProvider::new();
        let result = provider.compare_hash("123456", "not-a-hash").await;

        assert!(matches!(result, Err(ProviderError::Hash(_))));
    }
}
