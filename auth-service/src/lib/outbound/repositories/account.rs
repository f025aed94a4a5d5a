use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::AccountSummary;
use crate::account::ports::AccountRepository;

/// Volatile, process-lifetime account store.
///
/// All accounts live behind one lock so create and lookup always see a
/// single consistent view: lookups take the read lock and may run
/// concurrently, creation takes the write lock. State dies with the
/// process, which is intentional.
pub struct InMemoryAccountRepository {
    state: RwLock<StoreState>,
}

struct StoreState {
    /// Keyed by the exact username bytes; no normalization.
    accounts: HashMap<String, Account>,
    next_id: u64,
}

impl InMemoryAccountRepository {
    /// Create an empty repository.
    ///
    /// # Returns
    /// Repository with no accounts; ids start at 1
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                accounts: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, username: &str, password_hash: &str) -> Result<Account, AccountError> {
        let mut state = self.state.write().await;

        let account = Account {
            id: AccountId(state.next_id),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        state.next_id += 1;

        tracing::debug!(account_id = %account.id, "Account stored");

        state
            .accounts
            .insert(account.username.clone(), account.clone());

        Ok(account)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountError> {
        let state = self.state.read().await;
        Ok(state.accounts.get(username).cloned())
    }

    async fn list_all(&self) -> Result<Vec<AccountSummary>, AccountError> {
        let state = self.state.read().await;

        let mut summaries: Vec<AccountSummary> =
            state.accounts.values().map(AccountSummary::from).collect();
        summaries.sort_by_key(|summary| summary.id);

        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_sequential_from_one() {
        let repository = InMemoryAccountRepository::new();

        let first = repository.create("alice", "$2b$10$hash_a").await.unwrap();
        let second = repository.create("bob", "$2b$10$hash_b").await.unwrap();
        let third = repository.create("carol", "$2b$10$hash_c").await.unwrap();

        assert_eq!(first.id, AccountId(1));
        assert_eq!(second.id, AccountId(2));
        assert_eq!(third.id, AccountId(3));
    }

    #[tokio::test]
    async fn test_find_by_username_exact_match() {
        let repository = InMemoryAccountRepository::new();
        repository.create("Alice", "$2b$10$hash").await.unwrap();

        let found = repository.find_by_username("Alice").await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().username, "Alice");

        // Byte-for-byte comparison: a different casing is a different user
        assert!(repository.find_by_username("alice").await.unwrap().is_none());
        assert!(repository
            .find_by_username("Alice ")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_find_by_username_missing() {
        let repository = InMemoryAccountRepository::new();

        let found = repository.find_by_username("nobody").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_list_all_ordered_by_id() {
        let repository = InMemoryAccountRepository::new();
        repository.create("zoe", "$2b$10$hash_z").await.unwrap();
        repository.create("adam", "$2b$10$hash_a").await.unwrap();

        let summaries = repository.list_all().await.unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, AccountId(1));
        assert_eq!(summaries[0].username, "zoe");
        assert_eq!(summaries[1].id, AccountId(2));
        assert_eq!(summaries[1].username, "adam");
    }

    #[tokio::test]
    async fn test_created_at_is_set() {
        let repository = InMemoryAccountRepository::new();
        let before = Utc::now();

        let account = repository.create("alice", "$2b$10$hash").await.unwrap();

        assert!(account.created_at >= before);
        assert!(account.created_at <= Utc::now());
    }
}
