use crate::application::{commands::messages::SendContactMessageCommand, dto::ContactMessageDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Message received.", body = ContactMessageDto),
        (status = 400, description = "Missing or malformed field.", body = ErrorResponse),
        (status = 429, description = "Too many submissions.")
    ),
    security(()),
    tag = "Contact"
)]
pub async fn send_message(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<ContactRequest>,
) -> HttpResult<(StatusCode, Json<ContactMessageDto>)> {
    let command = SendContactMessageCommand {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        message: payload.message,
    };

    let message = state
        .services
        .contact_commands
        .send_message(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(message)))
}

#[utoipa::path(
    get,
    path = "/api/contact",
    responses(
        (status = 200, description = "Messages, newest first.", body = [ContactMessageDto]),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Contact"
)]
pub async fn list_messages(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
) -> HttpResult<Json<Vec<ContactMessageDto>>> {
    state
        .services
        .contact_queries
        .list_messages()
        .await
        .into_http()
        .map(Json)
}
