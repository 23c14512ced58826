use crate::domain::{
    error::DomainError,
    models::account::{Account, Username},
    repositories::account_repository::AccountRepository,
};

/// Read-only account lookups.
pub struct FindAccountUsecase<R: AccountRepository> {
    account_repository: R,
}

impl<R: AccountRepository> FindAccountUsecase<R> {
    pub fn new(account_repository: R) -> Self {
        Self { account_repository }
    }

    pub async fn get_by_username(&self, username: String) -> Result<Option<Account>, DomainError>
    where
        R: Send + Sync,
    {
        let Ok(username) = Username::new(username) else {
            return Ok(None);
        };

        Ok(self.account_repository.find_by_username(&username).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Account>, DomainError>
    where
        R: Send + Sync,
    {
        Ok(self.account_repository.find_all().await?)
    }
}
