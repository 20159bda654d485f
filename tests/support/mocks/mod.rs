// tests/support/mocks/mod.rs
//! テスト用のインメモリ実装とダミーポート

pub mod content_repos;
pub mod misc_repos;
pub mod security;
pub mod storage;
pub mod time;
pub mod user_repo;

pub use content_repos::{InMemoryBlogPosts, InMemoryClinicServices, StaleSlugIndex};
pub use misc_repos::{
    InMemoryComments, InMemoryContactMessages, InMemoryFaqs, InMemoryMedia, InMemorySettings,
};
pub use security::{
    ADMIN_EMAIL, ADMIN_PASSWORD, DISABLED_TOKEN, DummyPasswordHasher, DummyTokenManager,
    GHOST_TOKEN, TEST_TOKEN,
};
pub use storage::InMemoryStorage;
pub use time::{TickingClock, fixed_now};
pub use user_repo::{ADMIN_ID, DISABLED_ID, InMemoryUsers};
