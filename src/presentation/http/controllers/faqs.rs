use crate::application::{commands::faqs::SaveFaqCommand, dto::FaqDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult, OrNotFound};
use crate::presentation::http::extractors::{ApiJson, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct FaqRequest {
    pub question: String,
    pub answer: String,
}

impl From<FaqRequest> for SaveFaqCommand {
    fn from(value: FaqRequest) -> Self {
        Self {
            question: value.question,
            answer: value.answer,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/faqs",
    responses((status = 200, description = "FAQs, newest first.", body = [FaqDto])),
    security(()),
    tag = "FAQ"
)]
pub async fn list_faqs(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<FaqDto>>> {
    state
        .services
        .faq_queries
        .list_faqs()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/faqs/{id}",
    params(("id" = String, Path, description = "FAQ id")),
    responses(
        (status = 200, description = "The FAQ.", body = FaqDto),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    security(()),
    tag = "FAQ"
)]
pub async fn get_faq(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<FaqDto>> {
    state
        .services
        .faq_queries
        .get_faq(&id)
        .await
        .or_not_found("faq not found")
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/faqs",
    request_body = FaqRequest,
    responses(
        (status = 201, description = "FAQ created.", body = FaqDto),
        (status = 400, description = "Question or answer missing.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "FAQ"
)]
pub async fn create_faq(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<FaqRequest>,
) -> HttpResult<(StatusCode, Json<FaqDto>)> {
    let faq = state
        .services
        .faq_commands
        .create_faq(&user, payload.into())
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(faq)))
}

#[utoipa::path(
    put,
    path = "/api/faqs/{id}",
    params(("id" = String, Path, description = "FAQ id")),
    request_body = FaqRequest,
    responses(
        (status = 200, description = "FAQ updated.", body = FaqDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    tag = "FAQ"
)]
pub async fn update_faq(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<FaqRequest>,
) -> HttpResult<Json<FaqDto>> {
    state
        .services
        .faq_commands
        .update_faq(&user, &id, payload.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/faqs/{id}",
    params(("id" = String, Path, description = "FAQ id")),
    responses(
        (status = 204, description = "FAQ deleted."),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    tag = "FAQ"
)]
pub async fn delete_faq(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .faq_commands
        .delete_faq(&user, &id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
