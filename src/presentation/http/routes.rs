// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::presentation::http::{
    controllers::{auth, blog, comments, contact, faqs, health, media, services, settings},
    middleware::rate_limit::{PublicWriteLimiter, public_write_limiter},
    openapi,
    state::HttpState,
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{MethodRouter, delete, get, post, put},
};
use std::{path::PathBuf, time::Duration};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Transport settings that sit outside the application services.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub allowed_origins: Vec<String>,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    /// Throttle anonymous comment and contact submissions per client IP.
    pub rate_limit: bool,
}

impl RouterSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().to_vec(),
            upload_dir: config.upload_dir().to_path_buf(),
            max_upload_bytes: config.max_upload_bytes(),
            rate_limit: true,
        }
    }
}

pub fn build_router(state: HttpState, settings: &RouterSettings) -> Router {
    let limiter = if settings.rate_limit {
        public_write_limiter()
    } else {
        None
    };
    let limiter = limiter.as_ref();

    Router::new()
        .merge(openapi::docs_router())
        .route("/api/health", get(health::health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/blog",
            get(blog::list_posts).post(blog::create_post),
        )
        .route("/api/blog/by-slug/{slug}", get(blog::get_post_by_slug))
        .route(
            "/api/blog/{id}",
            get(blog::get_post)
                .put(blog::update_post)
                .delete(blog::delete_post),
        )
        .route(
            "/api/services",
            get(services::list_services).post(services::create_service),
        )
        .route("/api/services/admin", get(services::list_services_admin))
        .route(
            "/api/services/by-slug/{slug}",
            get(services::get_service_by_slug),
        )
        .route(
            "/api/services/{id}",
            get(services::get_service)
                .put(services::update_service)
                .delete(services::delete_service),
        )
        .route("/api/faqs", get(faqs::list_faqs).post(faqs::create_faq))
        .route(
            "/api/faqs/{id}",
            get(faqs::get_faq)
                .put(faqs::update_faq)
                .delete(faqs::delete_faq),
        )
        .route(
            "/api/comments",
            throttled(post(comments::submit_comment), limiter)
                .get(comments::list_active_comments),
        )
        .route("/api/comments/all", get(comments::list_all_comments))
        .route("/api/comments/admin", post(comments::create_comment))
        .route(
            "/api/comments/{id}",
            put(comments::update_comment).delete(comments::delete_comment),
        )
        .route(
            "/api/contact",
            throttled(post(contact::send_message), limiter).get(contact::list_messages),
        )
        .route(
            "/api/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/api/media", get(media::list_media))
        .route("/api/media/upload", post(media::upload_media))
        .route("/api/media/{id}", delete(media::delete_media))
        .nest_service("/uploads", ServeDir::new(&settings.upload_dir))
        .layer(DefaultBodyLimit::max(settings.max_upload_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.allowed_origins))
        .layer(Extension(state))
}

/// The limiter only wraps the handlers registered so far on `route`.
fn throttled(route: MethodRouter, limiter: Option<&PublicWriteLimiter>) -> MethodRouter {
    match limiter {
        Some(limiter) => route.layer(limiter.clone()),
        None => route,
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
