// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, UserId, UserName};
use chrono::{DateTime, Utc};

/// The clinic administrator. There is a single role; every active user is
/// an admin.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub name: UserName,
    pub password_hash: PasswordHash,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub name: UserName,
    pub password_hash: PasswordHash,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        email: Email,
        name: UserName,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            name,
            password_hash,
            is_active: true,
            created_at,
        }
    }
}
