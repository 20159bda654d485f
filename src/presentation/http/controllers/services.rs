// src/presentation/http/controllers/services.rs
use crate::application::{
    commands::services::{
        CreateClinicServiceCommand, DeleteClinicServiceCommand, UpdateClinicServiceCommand,
    },
    dto::{ClinicServiceDto, Paginated},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult, OrNotFound};
use crate::presentation::http::extractors::{ApiJson, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

const SERVICE_NOT_FOUND: &str = "service not found";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateServiceRequest {
    pub title: String,
    pub description: String,
    pub content: String,
    pub icon: Option<String>,
    pub image: Option<String>,
    /// Display position; lower values are listed first.
    pub order: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateServiceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub order: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/services",
    responses(
        (status = 200, description = "All services in display order.", body = [ClinicServiceDto])
    ),
    security(()),
    tag = "Services"
)]
pub async fn list_services(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ClinicServiceDto>>> {
    state
        .services
        .service_queries
        .list_services()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/services/admin",
    params(PageParams),
    responses(
        (status = 200, description = "A page of services, newest first.", body = Paginated<ClinicServiceDto>),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn list_services_admin(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Paginated<ClinicServiceDto>>> {
    state
        .services
        .service_queries
        .list_services_page(params.page, params.limit)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/services/by-slug/{slug}",
    params(("slug" = String, Path, description = "Service slug")),
    responses(
        (status = 200, description = "The service.", body = ClinicServiceDto),
        (status = 404, description = "Unknown slug.", body = ErrorResponse)
    ),
    security(()),
    tag = "Services"
)]
pub async fn get_service_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ClinicServiceDto>> {
    state
        .services
        .service_queries
        .get_service_by_slug(&slug)
        .await
        .or_not_found(SERVICE_NOT_FOUND)
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/services/{id}",
    params(("id" = String, Path, description = "Service id")),
    responses(
        (status = 200, description = "The service.", body = ClinicServiceDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn get_service(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<ClinicServiceDto>> {
    state
        .services
        .service_queries
        .get_service_by_id(&id)
        .await
        .or_not_found(SERVICE_NOT_FOUND)
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/services",
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Service created.", body = ClinicServiceDto),
        (status = 400, description = "Missing required field.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 409, description = "Another service already uses this title.", body = ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn create_service(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<CreateServiceRequest>,
) -> HttpResult<(StatusCode, Json<ClinicServiceDto>)> {
    let command = CreateClinicServiceCommand {
        title: payload.title,
        description: payload.description,
        content: payload.content,
        icon: payload.icon,
        image: payload.image,
        order: payload.order,
    };

    let service = state
        .services
        .service_commands
        .create_service(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(service)))
}

#[utoipa::path(
    put,
    path = "/api/services/{id}",
    params(("id" = String, Path, description = "Service id")),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Service updated.", body = ClinicServiceDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown id.", body = ErrorResponse),
        (status = 409, description = "Another service already uses this title.", body = ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn update_service(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateServiceRequest>,
) -> HttpResult<Json<ClinicServiceDto>> {
    let command = UpdateClinicServiceCommand {
        id,
        title: payload.title,
        description: payload.description,
        content: payload.content,
        icon: payload.icon,
        image: payload.image,
        order: payload.order,
    };

    state
        .services
        .service_commands
        .update_service(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    params(("id" = String, Path, description = "Service id")),
    responses(
        (status = 204, description = "Service deleted."),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn delete_service(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .service_commands
        .delete_service(&user, DeleteClinicServiceCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
