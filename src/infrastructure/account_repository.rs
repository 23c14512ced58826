use async_trait::async_trait;
use entity::users;
use sea_orm::{
    ActiveModelTrait, ActiveValue::{NotSet, Set}, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, SqlErr,
};

use crate::domain::{
    error::RepositoryError,
    models::{
        account::{Account, AccountId, NewAccount, Username},
        credential::HashedPassword,
    },
    repositories::account_repository::AccountRepository,
};

#[derive(Clone)]
pub struct SeaOrmAccountRepository {
    db: DatabaseConnection,
}

impl SeaOrmAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_account(model: users::Model) -> Result<Account, RepositoryError> {
    let username =
        Username::new(model.username).map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

    Ok(Account::reconstruct(
        AccountId::new(model.id),
        username,
        HashedPassword::new(model.password_hash),
    ))
}

fn map_db_err(e: DbErr) -> RepositoryError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => RepositoryError::UniqueViolation(detail),
        // drivers that sea-orm cannot classify still name the constraint
        _ if e.to_string().contains("UNIQUE") => RepositoryError::UniqueViolation(e.to_string()),
        _ => RepositoryError::DatabaseError(e.to_string()),
    }
}

#[async_trait]
impl AccountRepository for SeaOrmAccountRepository {
    async fn find_by_username(&self, username: &Username) -> Result<Option<Account>, RepositoryError> {
        users::Entity::find()
            .filter(users::Column::Username.eq(username.as_str()))
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(to_account)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Account>, RepositoryError> {
        users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_account)
            .collect()
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, RepositoryError> {
        let user_model = users::ActiveModel {
            id: NotSet,
            username: Set(account.username.as_str().to_string()),
            password_hash: Set(account.password_hash.into_inner()),
        };

        let inserted = user_model.insert(&self.db).await.map_err(map_db_err)?;
        to_account(inserted)
    }
}
