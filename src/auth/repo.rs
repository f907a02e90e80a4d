use crate::auth::repo_types::Account;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Result of an insert that must not overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    AlreadyExists,
}

/// Storage behind the account registry, keyed by email as submitted.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Find an account by email.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Account>>;

    /// Insert the account unless one already exists for its email.
    /// The existence check and the write happen atomically.
    async fn insert_new(&self, account: Account) -> anyhow::Result<InsertOutcome>;
}

/// Process-local store; everything is lost on restart.
#[derive(Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Account>> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn insert_new(&self, account: Account) -> anyhow::Result<InsertOutcome> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.email) {
            return Ok(InsertOutcome::AlreadyExists);
        }
        accounts.insert(account.email.clone(), account);
        Ok(InsertOutcome::Inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repo_types::NewRole;

    fn account(email: &str, name: &str) -> Account {
        Account::new(NewRole::Passenger, name.into(), email.into(), "hash".into())
    }

    #[tokio::test]
    async fn find_returns_inserted_account() {
        let store = InMemoryAccountStore::new();
        let acc = account("ann@example.com", "Ann");
        let id = acc.id;
        assert_eq!(store.insert_new(acc).await.unwrap(), InsertOutcome::Inserted);

        let found = store.find_by_email("ann@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert!(store.find_by_email("bob@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_new_never_overwrites() {
        let store = InMemoryAccountStore::new();
        let first = account("ann@example.com", "Ann");
        let first_id = first.id;
        store.insert_new(first).await.unwrap();

        let outcome = store
            .insert_new(account("ann@example.com", "Impostor"))
            .await
            .unwrap();
        assert_eq!(outcome, InsertOutcome::AlreadyExists);

        let kept = store.find_by_email("ann@example.com").await.unwrap().unwrap();
        assert_eq!(kept.id, first_id);
        assert_eq!(kept.full_name, "Ann");
        assert_eq!(store.len().await, 1);
    }
}
