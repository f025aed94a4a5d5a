use thiserror::Error;

/// Top-level error for all account operations.
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    #[error("Username and password are required")]
    MissingCredentials,

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    /// Unified login failure. Covers both "unknown user" and "wrong
    /// password" so callers cannot enumerate usernames; the distinction is
    /// logged server-side only.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    // Infrastructure errors
    #[error("Store error: {0}")]
    Store(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AccountError {
    fn from(err: anyhow::Error) -> Self {
        AccountError::Unknown(err.to_string())
    }
}
