use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::domain::{
    error::{DomainError, RepositoryError},
    models::{
        account::{Account, AccountId, NewAccount, Username},
        credential::HashedPassword,
    },
    repositories::account_repository::AccountRepository,
    services::{password_service::PasswordHasher, random_service::RandomValueGenerator},
};

/// In-memory SQLite database with the `users` table migrated.
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

// mock repository interface

/// Vec-backed repository enforcing username uniqueness on insert.
///
/// With `hide_existing` set, lookups never see stored rows, which reproduces
/// two sign-ups racing past the existence check.
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<Mutex<Vec<Account>>>,
    hide_existing: bool,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn racing() -> Self {
        Self {
            hide_existing: true,
            ..Self::default()
        }
    }

    pub fn with_account(self, username: &str, password_hash: &str) -> Self {
        {
            let mut accounts = self.accounts.lock().unwrap();
            let id = accounts.len() as i32 + 1;
            accounts.push(Account::reconstruct(
                AccountId::new(id),
                Username::new(username.to_string()).unwrap(),
                HashedPassword::new(password_hash.to_string()),
            ));
        }
        self
    }

    pub fn len(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_username(&self, username: &Username) -> Result<Option<Account>, RepositoryError> {
        if self.hide_existing {
            return Ok(None);
        }
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.username() == username).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Account>, RepositoryError> {
        Ok(self.accounts.lock().unwrap().clone())
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, RepositoryError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.username() == &account.username) {
            return Err(RepositoryError::UniqueViolation("users.username".to_string()));
        }
        let stored = Account::reconstruct(
            AccountId::new(accounts.len() as i32 + 1),
            account.username,
            account.password_hash,
        );
        accounts.push(stored.clone());
        Ok(stored)
    }
}

/// Repository whose every call fails like a lost connection.
#[derive(Clone)]
pub struct FailingAccountRepository;

#[async_trait]
impl AccountRepository for FailingAccountRepository {
    async fn find_by_username(&self, _username: &Username) -> Result<Option<Account>, RepositoryError> {
        Err(RepositoryError::DatabaseError("connection lost".to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Account>, RepositoryError> {
        Err(RepositoryError::DatabaseError("connection lost".to_string()))
    }

    async fn insert(&self, _account: NewAccount) -> Result<Account, RepositoryError> {
        Err(RepositoryError::DatabaseError("connection lost".to_string()))
    }
}

const MOCK_HASH_PREFIX: &str = "mock_hash:";

/// Reversible stand-in for the Argon2 hasher.
#[derive(Clone)]
pub struct MockPasswordHasher;

impl MockPasswordHasher {
    pub fn hash_of(plain_password: &str) -> String {
        format!("{}{}", MOCK_HASH_PREFIX, plain_password)
    }
}

impl PasswordHasher for MockPasswordHasher {
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError> {
        Ok(HashedPassword::new(Self::hash_of(plain_password)))
    }

    fn verify(
        &self,
        plain_password: &str,
        hashed_password: &HashedPassword,
    ) -> Result<bool, DomainError> {
        match hashed_password.as_str().strip_prefix(MOCK_HASH_PREFIX) {
            Some(stored) => Ok(stored == plain_password),
            None => Err(DomainError::InvalidHashFormat(
                "missing mock prefix".to_string(),
            )),
        }
    }
}

#[derive(Clone)]
pub struct FixedValueGenerator(pub i32);

impl RandomValueGenerator for FixedValueGenerator {
    fn generate(&self) -> i32 {
        self.0
    }
}
