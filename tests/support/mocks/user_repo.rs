// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use clinic_cms::domain::errors::{DomainError, DomainResult};
use clinic_cms::domain::user::{
    Email, NewUser, PasswordHash, User, UserId, UserName, UserRepository,
};
use std::sync::Mutex;
use uuid::Uuid;

use super::security::{ADMIN_EMAIL, ADMIN_PASSWORD, DummyPasswordHasher};
use super::time::fixed_now;

pub const ADMIN_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0001);
pub const DISABLED_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0002);

/// 有効な管理者と無効化されたアカウントを1件ずつ持つユーザーストア
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

impl InMemoryUsers {
    pub fn seeded() -> Self {
        Self {
            users: Mutex::new(vec![
                user(ADMIN_ID, ADMIN_EMAIL, "Admin User", true),
                user(DISABLED_ID, "former@clinic.example", "Former Admin", false),
            ]),
        }
    }

    pub fn empty() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

fn user(id: Uuid, email: &str, name: &str, is_active: bool) -> User {
    User {
        id: UserId::from(id),
        email: Email::new(email).unwrap(),
        name: UserName::new(name).unwrap(),
        password_hash: PasswordHash::new(DummyPasswordHasher::hash_of(ADMIN_PASSWORD)).unwrap(),
        is_active,
        created_at: fixed_now(),
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict(
                "a user with this email already exists".into(),
            ));
        }
        let user = User {
            id: UserId::generate(),
            email: new_user.email,
            name: new_user.name,
            password_hash: new_user.password_hash,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}
