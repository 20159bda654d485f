// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_blog;
mod postgres_comment;
mod postgres_faq;
mod postgres_media;
mod postgres_message;
mod postgres_service;
mod postgres_settings;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_blog::{PostgresBlogPostReadRepository, PostgresBlogPostWriteRepository};
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_faq::PostgresFaqRepository;
pub use postgres_media::PostgresMediaRepository;
pub use postgres_message::PostgresContactMessageRepository;
pub use postgres_service::{
    PostgresClinicServiceReadRepository, PostgresClinicServiceWriteRepository,
};
pub use postgres_settings::PostgresSettingsRepository;
pub use postgres_user::PostgresUserRepository;

use crate::application::services::Repositories;
use sqlx::PgPool;
use std::sync::Arc;

/// Every store handle backed by the same connection pool.
pub fn postgres_repositories(pool: &PgPool) -> Repositories {
    Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        post_writes: Arc::new(PostgresBlogPostWriteRepository::new(pool.clone())),
        post_reads: Arc::new(PostgresBlogPostReadRepository::new(pool.clone())),
        service_writes: Arc::new(PostgresClinicServiceWriteRepository::new(pool.clone())),
        service_reads: Arc::new(PostgresClinicServiceReadRepository::new(pool.clone())),
        faqs: Arc::new(PostgresFaqRepository::new(pool.clone())),
        comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
        messages: Arc::new(PostgresContactMessageRepository::new(pool.clone())),
        settings: Arc::new(PostgresSettingsRepository::new(pool.clone())),
        media: Arc::new(PostgresMediaRepository::new(pool.clone())),
    }
}
