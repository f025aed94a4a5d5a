use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use tokio::sync::Mutex;

use crate::account::errors::AccountError;
use crate::account::models::AccountSummary;
use crate::account::models::Credentials;
use crate::account::models::RegisteredAccount;
use crate::account::ports::AccountRepository;
use crate::account::ports::AuthServicePort;

/// Domain service implementation for authentication operations.
///
/// Concrete implementation of AuthServicePort with dependency injection.
/// Owns all business-rule validation and the uniform-failure policy for
/// login.
pub struct AuthService<R>
where
    R: AccountRepository,
{
    repository: Arc<R>,
    password_hasher: PasswordHasher,
    /// Serializes the check-then-create sequence of registration so two
    /// concurrent registrations for the same username cannot both pass the
    /// uniqueness check. Plain lookups (the login path) do not take it.
    registration_gate: Mutex<()>,
}

impl<R> AuthService<R>
where
    R: AccountRepository,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    ///
    /// # Returns
    /// Configured service instance using the default bcrypt cost
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_hasher(repository, PasswordHasher::new())
    }

    /// Create an authentication service with an explicit password hasher.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `password_hasher` - Hashing primitive (e.g. with a lower cost in tests)
    pub fn with_hasher(repository: Arc<R>, password_hasher: PasswordHasher) -> Self {
        Self {
            repository,
            password_hasher,
            registration_gate: Mutex::new(()),
        }
    }

    /// Hash on the blocking thread pool; bcrypt is CPU-expensive by design
    /// and must not stall the async workers.
    async fn hash_password(&self, password: String) -> Result<String, AccountError> {
        let hasher = self.password_hasher.clone();
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AccountError::Unknown(format!("Hashing task failed: {}", e)))??;
        Ok(hash)
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, AccountError> {
        let hasher = self.password_hasher.clone();
        let matches = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AccountError::Unknown(format!("Verification task failed: {}", e)))??;
        Ok(matches)
    }
}

fn validate(credentials: &Credentials) -> Result<(), AccountError> {
    if credentials.username.is_empty() || credentials.password.is_empty() {
        return Err(AccountError::MissingCredentials);
    }
    Ok(())
}

#[async_trait]
impl<R> AuthServicePort for AuthService<R>
where
    R: AccountRepository,
{
    async fn register(&self, credentials: Credentials) -> Result<RegisteredAccount, AccountError> {
        validate(&credentials)?;

        // Known duplicates never pay the hashing cost
        if self
            .repository
            .find_by_username(&credentials.username)
            .await?
            .is_some()
        {
            return Err(AccountError::UsernameAlreadyExists(credentials.username));
        }

        let password_hash = self.hash_password(credentials.password).await?;

        // Re-check under the gate: a concurrent registration may have won
        // the race while we were hashing.
        let _guard = self.registration_gate.lock().await;
        if self
            .repository
            .find_by_username(&credentials.username)
            .await?
            .is_some()
        {
            return Err(AccountError::UsernameAlreadyExists(credentials.username));
        }

        let account = self
            .repository
            .create(&credentials.username, &password_hash)
            .await?;

        tracing::info!(
            account_id = %account.id,
            username = %account.username,
            "Account registered"
        );

        Ok(RegisteredAccount::from(&account))
    }

    async fn login(&self, credentials: Credentials) -> Result<(), AccountError> {
        validate(&credentials)?;

        let account = match self
            .repository
            .find_by_username(&credentials.username)
            .await?
        {
            Some(account) => account,
            None => {
                // Same error as a wrong password; only the log tells why
                tracing::warn!(username = %credentials.username, "Login failed: unknown username");
                return Err(AccountError::InvalidCredentials);
            }
        };

        let password_matches = self
            .verify_password(credentials.password, account.password_hash)
            .await?;

        if !password_matches {
            tracing::warn!(username = %credentials.username, "Login failed: wrong password");
            return Err(AccountError::InvalidCredentials);
        }

        tracing::info!(username = %credentials.username, "Login succeeded");
        Ok(())
    }

    async fn list_accounts(&self) -> Result<Vec<AccountSummary>, AccountError> {
        self.repository.list_all().await
    }
}
