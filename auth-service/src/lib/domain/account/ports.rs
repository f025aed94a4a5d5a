use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountSummary;
use crate::account::models::Credentials;
use crate::account::models::RegisteredAccount;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account with a securely hashed password.
    ///
    /// # Arguments
    /// * `credentials` - Submitted username and plaintext password
    ///
    /// # Returns
    /// Identity of the created account (id and username only)
    ///
    /// # Errors
    /// * `MissingCredentials` - Username or password is empty
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Hashing the password failed
    async fn register(&self, credentials: Credentials) -> Result<RegisteredAccount, AccountError>;

    /// Authenticate an existing account.
    ///
    /// # Arguments
    /// * `credentials` - Submitted username and plaintext password
    ///
    /// # Returns
    /// Unit on success; no token or session is issued
    ///
    /// # Errors
    /// * `MissingCredentials` - Username or password is empty
    /// * `InvalidCredentials` - Unknown username or wrong password
    async fn login(&self, credentials: Credentials) -> Result<(), AccountError>;

    /// List all registered accounts for diagnostics.
    ///
    /// # Returns
    /// Summaries (id, username, created_at) ordered by id; never hashes
    ///
    /// # Errors
    /// * `Store` - Store operation failed
    async fn list_accounts(&self) -> Result<Vec<AccountSummary>, AccountError>;
}

/// Persistence operations for the account aggregate.
///
/// The store is the authoritative owner of all accounts. It does not
/// enforce username uniqueness; the orchestrating service performs the
/// check so it can decide the user-facing response.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account with the next sequential id and the current
    /// timestamp.
    ///
    /// # Arguments
    /// * `username` - Username for the account
    /// * `password_hash` - Already-hashed password, never plaintext
    ///
    /// # Returns
    /// Created account entity
    ///
    /// # Errors
    /// * `Store` - Store operation failed (the in-memory adapter cannot fail)
    async fn create(&self, username: &str, password_hash: &str) -> Result<Account, AccountError>;

    /// Retrieve an account by username.
    ///
    /// Exact byte-for-byte match; no casing or trimming normalization.
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `Store` - Store operation failed
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountError>;

    /// Retrieve summaries of all accounts, ordered by id.
    ///
    /// # Returns
    /// Vector of account summaries without password hashes
    ///
    /// # Errors
    /// * `Store` - Store operation failed
    async fn list_all(&self) -> Result<Vec<AccountSummary>, AccountError>;
}
