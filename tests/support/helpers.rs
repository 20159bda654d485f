// tests/support/helpers.rs
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use chrono::Duration;
use clinic_cms::application::{
    dto::AuthenticatedUser,
    services::{ApplicationServices, Ports, Repositories},
};
use clinic_cms::domain::user::UserId;
use clinic_cms::infrastructure::util::DefaultSlugGenerator;
use clinic_cms::presentation::http::{
    routes::{RouterSettings, build_router},
    state::HttpState,
};
use serde_json::Value;
use std::sync::Arc;

use super::mocks::{
    ADMIN_EMAIL, ADMIN_ID, DummyPasswordHasher, DummyTokenManager, InMemoryBlogPosts,
    InMemoryClinicServices, InMemoryComments, InMemoryContactMessages, InMemoryFaqs,
    InMemoryMedia, InMemorySettings, InMemoryStorage, InMemoryUsers, TickingClock, fixed_now,
};

/// サービス群と、その裏にあるインメモリストアへの参照
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub users: Arc<InMemoryUsers>,
    pub posts: Arc<InMemoryBlogPosts>,
    pub clinic_services: Arc<InMemoryClinicServices>,
    pub faqs: Arc<InMemoryFaqs>,
    pub comments: Arc<InMemoryComments>,
    pub messages: Arc<InMemoryContactMessages>,
    pub settings: Arc<InMemorySettings>,
    pub media: Arc<InMemoryMedia>,
    pub storage: Arc<InMemoryStorage>,
    pub clock: Arc<TickingClock>,
}

pub fn build_context() -> TestContext {
    build_context_with_users(InMemoryUsers::seeded())
}

pub fn build_context_with_users(users: InMemoryUsers) -> TestContext {
    let users = Arc::new(users);
    let posts = Arc::new(InMemoryBlogPosts::new(Arc::clone(&users)));
    let clinic_services = Arc::new(InMemoryClinicServices::default());
    let faqs = Arc::new(InMemoryFaqs::default());
    let comments = Arc::new(InMemoryComments::default());
    let messages = Arc::new(InMemoryContactMessages::default());
    let settings = Arc::new(InMemorySettings::default());
    let media = Arc::new(InMemoryMedia::default());
    let storage = Arc::new(InMemoryStorage::default());
    let clock = Arc::new(TickingClock::default());

    let repos = Repositories {
        users: users.clone(),
        post_writes: posts.clone(),
        post_reads: posts.clone(),
        service_writes: clinic_services.clone(),
        service_reads: clinic_services.clone(),
        faqs: faqs.clone(),
        comments: comments.clone(),
        messages: messages.clone(),
        settings: settings.clone(),
        media: media.clone(),
    };
    let ports = Ports {
        password_hasher: Arc::new(DummyPasswordHasher),
        token_manager: Arc::new(DummyTokenManager),
        media_storage: storage.clone(),
        clock: clock.clone(),
        slugger: Arc::new(DefaultSlugGenerator),
    };

    TestContext {
        services: Arc::new(ApplicationServices::new(repos, ports)),
        users,
        posts,
        clinic_services,
        faqs,
        comments,
        messages,
        settings,
        media,
        storage,
        clock,
    }
}

impl TestContext {
    pub fn router(&self) -> Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
            environment: Arc::from("test"),
        };
        build_router(state, &test_router_settings())
    }
}

pub fn test_router_settings() -> RouterSettings {
    RouterSettings {
        allowed_origins: vec!["http://localhost:5173".into()],
        upload_dir: std::env::temp_dir().join("clinic_cms_test_uploads"),
        max_upload_bytes: 1024 * 1024,
        rate_limit: false,
    }
}

pub async fn make_test_router() -> Router {
    build_context().router()
}

/// `TEST_TOKEN` が表す管理者
pub fn admin() -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::from(ADMIN_ID),
        email: ADMIN_EMAIL.into(),
        name: "Admin User".into(),
        issued_at: fixed_now(),
        expires_at: fixed_now() + Duration::hours(1),
    }
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
