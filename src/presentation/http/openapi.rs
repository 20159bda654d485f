// src/presentation/http/openapi.rs
use crate::presentation::http::controllers::{
    auth, blog, comments, contact, faqs, health, media, services, settings,
};
use axum::{Json, Router, routing::get};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi};
use utoipa_redoc::{Redoc, Servable};

const DEFAULT_SNAPSHOT_PATH: &str = "docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        auth::login,
        auth::me,
        blog::list_posts,
        blog::get_post_by_slug,
        blog::get_post,
        blog::create_post,
        blog::update_post,
        blog::delete_post,
        services::list_services,
        services::list_services_admin,
        services::get_service_by_slug,
        services::get_service,
        services::create_service,
        services::update_service,
        services::delete_service,
        faqs::list_faqs,
        faqs::get_faq,
        faqs::create_faq,
        faqs::update_faq,
        faqs::delete_faq,
        comments::list_active_comments,
        comments::list_all_comments,
        comments::submit_comment,
        comments::create_comment,
        comments::update_comment,
        comments::delete_comment,
        contact::send_message,
        contact::list_messages,
        settings::get_settings,
        settings::update_settings,
        media::list_media,
        media::upload_media,
        media::delete_media
    ),
    components(
        schemas(
            crate::presentation::http::error::ErrorResponse,
            health::HealthResponse,
            auth::LoginRequest,
            auth::LoginResponse,
            blog::CreateBlogPostRequest,
            blog::UpdateBlogPostRequest,
            services::CreateServiceRequest,
            services::UpdateServiceRequest,
            faqs::FaqRequest,
            comments::CreateCommentRequest,
            comments::UpdateCommentRequest,
            contact::ContactRequest,
            settings::UpdateSettingsRequest,
            media::UploadForm,
            crate::application::dto::UserDto,
            crate::application::dto::AuthorDto,
            crate::application::dto::BlogPostDto,
            crate::application::dto::ClinicServiceDto,
            crate::application::dto::FaqDto,
            crate::application::dto::CommentDto,
            crate::application::dto::ContactMessageDto,
            crate::application::dto::SiteSettingsDto,
            crate::application::dto::MediaDto
        )
    ),
    tags(
        (name = "Auth", description = "Admin login and session"),
        (name = "Blog", description = "Blog posts with publish state"),
        (name = "Services", description = "Clinic service listings"),
        (name = "FAQ", description = "Frequently asked questions"),
        (name = "Comments", description = "Patient comments and moderation"),
        (name = "Contact", description = "Contact form messages"),
        (name = "Settings", description = "Site-wide settings"),
        (name = "Media", description = "Uploaded files"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&BearerAuth),
    security(("bearerAuth" = [])),
    info(
        title = "Clinic CMS API",
        description = "Clinic website backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// `/openapi.json` plus a Redoc page at `/redoc`.
pub fn docs_router() -> Router {
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}

/// Write the document to `OPENAPI_SNAPSHOT_PATH` (default `docs/openapi.json`).
pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
