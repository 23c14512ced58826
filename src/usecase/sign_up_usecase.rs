use tracing::{info, warn};

use crate::domain::{
    error::{DomainError, RepositoryError},
    models::account::{Account, NewAccount, Username},
    repositories::account_repository::AccountRepository,
    services::password_service::PasswordHasher,
};

pub struct SignUpUsecase<R: AccountRepository, P: PasswordHasher> {
    account_repository: R,
    password_hasher: P,
}

impl<R: AccountRepository, P: PasswordHasher> SignUpUsecase<R, P> {
    pub fn new(account_repository: R, password_hasher: P) -> Self {
        Self {
            account_repository,
            password_hasher,
        }
    }

    pub async fn sign_up(&self, username: String, password: String) -> Result<Account, DomainError>
    where
        R: Send + Sync,
        P: Send + Sync,
    {
        let username = Username::new(username)?;

        if self
            .account_repository
            .find_by_username(&username)
            .await?
            .is_some()
        {
            warn!(username = username.as_str(), "sign-up rejected, username already exists");
            return Err(DomainError::DuplicateUsername);
        }

        let password_hash = self.password_hasher.hash(&password)?;

        // The unique index decides when two sign-ups race past the lookup above
        let account = self
            .account_repository
            .insert(NewAccount {
                username,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::UniqueViolation(_) => DomainError::DuplicateUsername,
                other => DomainError::Repository(other),
            })?;

        info!(
            account_id = account.id().value(),
            username = account.username().as_str(),
            "account created"
        );

        Ok(account)
    }
}
