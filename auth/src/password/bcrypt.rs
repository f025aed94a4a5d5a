use bcrypt::hash;
use bcrypt::verify;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Provides cryptographic password hashing (internally uses bcrypt).
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// bcrypt cost factor: 2^10 key-expansion rounds. Adaptive, raise to
    /// slow down brute force as hardware improves.
    pub const DEFAULT_COST: u32 = 10;

    /// Lowest cost bcrypt accepts. Only suitable for tests.
    pub const MIN_COST: u32 = 4;

    /// Create a new password hasher with the default cost factor.
    ///
    /// # Returns
    /// PasswordHasher instance configured with secure defaults
    pub fn new() -> Self {
        Self {
            cost: Self::DEFAULT_COST,
        }
    }

    /// Create a password hasher with an explicit cost factor.
    ///
    /// # Arguments
    /// * `cost` - bcrypt cost factor (log2 of the number of rounds)
    ///
    /// # Returns
    /// PasswordHasher instance with the given cost
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password securely.
    ///
    /// A fresh random salt is generated per call and embedded in the
    /// resulting hash, so no separate salt storage is needed.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Modular crypt format hash (includes algorithm, cost, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// The salt and cost are re-derived from the stored hash; the
    /// comparison of the derived digests is constant-time.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in modular crypt format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Hash format is invalid
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        verify(password, hash)
            .map_err(|e| PasswordError::VerificationFailed(format!("Invalid password hash: {}", e)))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        // Hash the password
        let hash = hasher.hash(password).expect("Failed to hash password");

        // Verify correct password
        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));

        // Verify incorrect password
        assert!(!hasher
            .verify("wrong_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::with_cost(PasswordHasher::MIN_COST);
        let password = "same_password";

        let first = hasher.hash(password).expect("Failed to hash password");
        let second = hasher.hash(password).expect("Failed to hash password");

        // Fresh salt per call: two hashes of the same password differ
        assert_ne!(first, second);
        assert!(hasher.verify(password, &first).unwrap());
        assert!(hasher.verify(password, &second).unwrap());
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hasher = PasswordHasher::with_cost(PasswordHasher::MIN_COST);
        let password = "plaintext_secret";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert_ne!(hash, password);
        assert!(!hash.contains(password));
        assert!(hash.starts_with("$2"));
    }

    #[test]
    fn test_min_cost_is_accepted() {
        let hasher = PasswordHasher::with_cost(PasswordHasher::MIN_COST);

        // Cost 4 is the floor bcrypt accepts; the hash embeds it
        let hash = hasher.hash("pw").expect("Failed to hash password");
        assert!(hash.starts_with("$2b$04$"));
        assert!(hasher.verify("pw", &hash).unwrap());
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "invalid_hash");
        assert!(result.is_err());
    }
}
