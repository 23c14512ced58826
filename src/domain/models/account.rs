use crate::domain::{error::DomainError, models::credential::HashedPassword};

/// Column bound of `users.username`.
pub const USERNAME_MAX_LEN: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountId(i32);
impl AccountId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);
impl Username {
    pub fn new(value: String) -> Result<Self, DomainError> {
        if value.chars().count() > USERNAME_MAX_LEN {
            return Err(DomainError::InvalidUsername);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Account that has not been persisted yet, so it has no id.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: Username,
    pub password_hash: HashedPassword,
}

#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    username: Username,
    password_hash: HashedPassword,
}

impl Account {
    pub fn reconstruct(id: AccountId, username: Username, password_hash: HashedPassword) -> Self {
        Self {
            id,
            username,
            password_hash,
        }
    }

    // getterのみ提供
    pub fn id(&self) -> AccountId {
        self.id
    }
    pub fn username(&self) -> &Username {
        &self.username
    }
    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }
}
