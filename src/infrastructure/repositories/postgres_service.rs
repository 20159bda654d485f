// src/infrastructure/repositories/postgres_service.rs
use super::error::{count_to_u64, offset_to_i64};
use super::map_sqlx;
use crate::domain::clinic_service::{
    ClinicService, ClinicServiceReadRepository, ClinicServiceUpdate, ClinicServiceWriteRepository,
    NewClinicService, ServiceId,
};
use crate::domain::content::{Body, Page, PageRequest, Slug, SlugIndex, Title};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const SERVICE_COLUMNS: &str =
    "id, title, slug, description, content, icon, image, display_order, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresClinicServiceWriteRepository {
    pool: PgPool,
}

impl PostgresClinicServiceWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresClinicServiceReadRepository {
    pool: PgPool,
}

impl PostgresClinicServiceReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ServiceRow {
    id: Uuid,
    title: String,
    slug: String,
    description: String,
    content: String,
    icon: Option<String>,
    image: Option<String>,
    display_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ServiceRow> for ClinicService {
    type Error = DomainError;

    fn try_from(row: ServiceRow) -> Result<Self, Self::Error> {
        Ok(ClinicService {
            id: ServiceId::from(row.id),
            title: Title::new(row.title)?,
            slug: Slug::new(row.slug)?,
            description: Body::named(row.description, "description")?,
            content: Body::new(row.content)?,
            icon: row.icon,
            image: row.image,
            order: row.display_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_services(rows: Vec<ServiceRow>) -> DomainResult<Vec<ClinicService>> {
    rows.into_iter().map(ClinicService::try_from).collect()
}

#[async_trait]
impl ClinicServiceWriteRepository for PostgresClinicServiceWriteRepository {
    async fn insert(&self, service: NewClinicService) -> DomainResult<ClinicService> {
        let NewClinicService {
            title,
            slug,
            description,
            content,
            icon,
            image,
            order,
            created_at,
        } = service;

        let row = sqlx::query_as::<_, ServiceRow>(&format!(
            "INSERT INTO services (id, title, slug, description, content, icon, image,
                                   display_order, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
             RETURNING {SERVICE_COLUMNS}"
        ))
        .bind(Uuid::from(ServiceId::generate()))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(description.as_str())
        .bind(content.as_str())
        .bind(icon)
        .bind(image)
        .bind(order)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ClinicService::try_from(row)
    }

    async fn update(&self, update: ClinicServiceUpdate) -> DomainResult<ClinicService> {
        let ClinicServiceUpdate {
            id,
            title,
            slug,
            description,
            content,
            icon,
            image,
            order,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE services SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description.into_inner());
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }
        if let Some(icon) = icon {
            builder.push(", icon = ");
            builder.push_bind(icon);
        }
        if let Some(image) = image {
            builder.push(", image = ");
            builder.push_bind(image);
        }
        if let Some(order) = order {
            builder.push(", display_order = ");
            builder.push_bind(order);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(" RETURNING ");
        builder.push(SERVICE_COLUMNS);

        let row = builder
            .build_query_as::<ServiceRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("service not found".into()))?;

        ClinicService::try_from(row)
    }

    async fn delete(&self, id: ServiceId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("service not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SlugIndex<ServiceId> for PostgresClinicServiceReadRepository {
    async fn slug_owner(&self, slug: &Slug) -> DomainResult<Option<ServiceId>> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM services WHERE slug = $1")
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map(|id| id.map(ServiceId::from))
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl ClinicServiceReadRepository for PostgresClinicServiceReadRepository {
    async fn find_by_id(&self, id: ServiceId) -> DomainResult<Option<ClinicService>> {
        let row = sqlx::query_as::<_, ServiceRow>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services WHERE id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ClinicService::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<ClinicService>> {
        let row = sqlx::query_as::<_, ServiceRow>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ClinicService::try_from).transpose()
    }

    async fn list_ordered(&self) -> DomainResult<Vec<ClinicService>> {
        let rows = sqlx::query_as::<_, ServiceRow>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services ORDER BY display_order ASC, created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_services(rows)
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<Page<ClinicService>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM services")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, ServiceRow>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services
             ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(page.limit()))
        .bind(offset_to_i64(page.offset()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(Page::new(into_services(rows)?, count_to_u64(total), page))
    }
}
