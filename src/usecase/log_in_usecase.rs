use tracing::{error, warn};

use crate::domain::{
    error::DomainError,
    models::account::{Account, Username},
    repositories::account_repository::AccountRepository,
    services::password_service::PasswordHasher,
};

pub struct LogInUsecase<R: AccountRepository, P: PasswordHasher> {
    account_repository: R,
    password_hasher: P,
}

impl<R: AccountRepository, P: PasswordHasher> LogInUsecase<R, P> {
    pub fn new(account_repository: R, password_hasher: P) -> Self {
        Self {
            account_repository,
            password_hasher,
        }
    }

    /// Check the password of an existing account.
    ///
    /// Unknown usernames and wrong passwords fail with different errors, so a
    /// caller can tell whether a username is registered.
    pub async fn log_in(&self, username: String, password: String) -> Result<Account, DomainError>
    where
        R: Send + Sync,
        P: Send + Sync,
    {
        // a name the column could never hold cannot belong to an account
        let username = Username::new(username).map_err(|_| DomainError::AccountNotFound)?;

        let account = self
            .account_repository
            .find_by_username(&username)
            .await?
            .ok_or(DomainError::AccountNotFound)?;

        let verified = self
            .password_hasher
            .verify(&password, account.password_hash())
            .inspect_err(|e| {
                error!(account_id = account.id().value(), error = %e, "stored password hash unusable");
            })?;

        if !verified {
            warn!(username = username.as_str(), "log-in rejected, wrong password");
            return Err(DomainError::InvalidCredentials);
        }

        Ok(account)
    }
}
