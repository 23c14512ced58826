use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::account::{Account, NewAccount, Username},
};

#[async_trait]
pub trait AccountRepository {
    async fn find_by_username(&self, username: &Username) -> Result<Option<Account>, RepositoryError>;

    /// All accounts in ascending id order.
    async fn find_all(&self) -> Result<Vec<Account>, RepositoryError>;

    /// Insert a new account.
    ///
    /// Returns `RepositoryError::UniqueViolation` when the username is already
    /// taken at insert time, even if an earlier lookup saw it as free.
    async fn insert(&self, account: NewAccount) -> Result<Account, RepositoryError>;
}
