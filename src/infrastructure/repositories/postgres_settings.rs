// src/infrastructure/repositories/postgres_settings.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::settings::{SettingsRepository, SiteSettings, SiteSettingsUpdate};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

/// The table holds at most one row, pinned to this key.
const SETTINGS_ROW_ID: i32 = 1;

#[derive(Clone)]
pub struct PostgresSettingsRepository {
    pool: PgPool,
}

impl PostgresSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SettingsRow {
    profile_photo_url: Option<String>,
    hero_photo_url: Option<String>,
    updated_at: DateTime<Utc>,
}

impl From<SettingsRow> for SiteSettings {
    fn from(row: SettingsRow) -> Self {
        SiteSettings {
            profile_photo_url: row.profile_photo_url,
            hero_photo_url: row.hero_photo_url,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl SettingsRepository for PostgresSettingsRepository {
    async fn get_or_create(&self, now: DateTime<Utc>) -> DomainResult<SiteSettings> {
        sqlx::query("INSERT INTO settings (id, updated_at) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
            .bind(SETTINGS_ROW_ID)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, SettingsRow>(
            "SELECT profile_photo_url, hero_photo_url, updated_at FROM settings WHERE id = $1",
        )
        .bind(SETTINGS_ROW_ID)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        update: SiteSettingsUpdate,
        now: DateTime<Utc>,
    ) -> DomainResult<SiteSettings> {
        // Upsert so an update before the first read still lands.
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO settings (id, profile_photo_url, hero_photo_url, updated_at) VALUES (",
        );
        builder.push_bind(SETTINGS_ROW_ID);
        builder.push(", ");
        builder.push_bind(update.profile_photo_url.clone().flatten());
        builder.push(", ");
        builder.push_bind(update.hero_photo_url.clone().flatten());
        builder.push(", ");
        builder.push_bind(now);
        builder.push(") ON CONFLICT (id) DO UPDATE SET updated_at = EXCLUDED.updated_at");

        if update.profile_photo_url.is_some() {
            builder.push(", profile_photo_url = EXCLUDED.profile_photo_url");
        }
        if update.hero_photo_url.is_some() {
            builder.push(", hero_photo_url = EXCLUDED.hero_photo_url");
        }
        builder.push(" RETURNING profile_photo_url, hero_photo_url, updated_at");

        let row = builder
            .build_query_as::<SettingsRow>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(row.into())
    }
}
