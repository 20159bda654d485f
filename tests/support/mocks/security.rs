// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use clinic_cms::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use clinic_cms::domain::user::UserId;
use uuid::Uuid;

use super::time::fixed_now;
use super::user_repo::{ADMIN_ID, DISABLED_ID};

/// 有効な管理者として認証されるトークン
pub const TEST_TOKEN: &str = "test-token";
/// 無効化されたアカウントのトークン
pub const DISABLED_TOKEN: &str = "disabled-token";
/// 署名は正しいがユーザーが存在しないトークン
pub const GHOST_TOKEN: &str = "ghost-token";

pub const ADMIN_EMAIL: &str = "admin@clinic.example";
pub const ADMIN_PASSWORD: &str = "correct-horse";

/* -------------------------------- TokenManager -------------------------------- */

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

fn claims(id: Uuid, email: &str, name: &str) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        id: UserId::from(id),
        email: email.into(),
        name: name.into(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = fixed_now();
        let token = if Uuid::from(subject.user_id) == ADMIN_ID {
            TEST_TOKEN
        } else {
            GHOST_TOKEN
        };
        Ok(AuthTokenDto {
            token: token.into(),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            TEST_TOKEN => Ok(claims(ADMIN_ID, ADMIN_EMAIL, "Admin User")),
            DISABLED_TOKEN => Ok(claims(DISABLED_ID, "former@clinic.example", "Former Admin")),
            GHOST_TOKEN => Ok(claims(
                Uuid::from_u128(0xdead),
                "ghost@clinic.example",
                "Ghost",
            )),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// `hash::<password>` 形式で保存し、照合も同じ規則で行う
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

impl DummyPasswordHasher {
    pub fn hash_of(password: &str) -> String {
        format!("hash::{password}")
    }
}

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(Self::hash_of(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if Self::hash_of(password) == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
