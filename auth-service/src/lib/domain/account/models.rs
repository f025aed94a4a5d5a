use std::fmt;

use chrono::DateTime;
use chrono::Utc;

/// Account aggregate entity.
///
/// Represents a registered account. Immutable after creation: there is no
/// update, password-change, or delete operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Account unique identifier type.
///
/// Assigned sequentially by the credential store, starting at 1. Ids are
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(pub u64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identity of a freshly registered account.
///
/// Carries no password material by construction: registration never returns
/// the hash or the plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredAccount {
    pub id: AccountId,
    pub username: String,
}

impl From<&Account> for RegisteredAccount {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
        }
    }
}

/// Diagnostic listing entry for an account.
///
/// Excludes the password hash by construction; the store builds summaries
/// directly so hashes never pass through the listing path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub id: AccountId,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            created_at: account.created_at,
        }
    }
}

/// Submitted credentials for registration or login.
///
/// Carried as raw strings: usernames are compared byte-for-byte with no
/// casing or trimming normalization, and the only validation rule (both
/// fields non-empty) belongs to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}
