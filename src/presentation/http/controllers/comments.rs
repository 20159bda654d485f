// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{SubmitCommentCommand, UpdateCommentCommand},
    dto::CommentDto,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub initials: String,
    /// Star rating from 1 to 5.
    pub rating: i64,
    pub content: String,
    /// Honoured only on the admin endpoint.
    pub is_active: Option<bool>,
}

impl From<CreateCommentRequest> for SubmitCommentCommand {
    fn from(value: CreateCommentRequest) -> Self {
        Self {
            initials: value.initials,
            rating: value.rating,
            content: value.content,
            is_active: value.is_active,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentRequest {
    pub initials: Option<String>,
    pub rating: Option<i64>,
    pub content: Option<String>,
    pub is_active: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/comments",
    responses((status = 200, description = "Visible comments, newest first.", body = [CommentDto])),
    security(()),
    tag = "Comments"
)]
pub async fn list_active_comments(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_comments(false)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/comments/all",
    responses(
        (status = 200, description = "Every comment, hidden ones included.", body = [CommentDto]),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_all_comments(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_comments(true)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment submitted.", body = CommentDto),
        (status = 400, description = "Invalid initials, rating or content.", body = ErrorResponse),
        (status = 429, description = "Too many submissions.")
    ),
    security(()),
    tag = "Comments"
)]
pub async fn submit_comment(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let comment = state
        .services
        .comment_commands
        .submit_comment(payload.into())
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    post,
    path = "/api/comments/admin",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created.", body = CommentDto),
        (status = 400, description = "Invalid initials, rating or content.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let comment = state
        .services
        .comment_commands
        .create_comment(&user, payload.into())
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    params(("id" = String, Path, description = "Comment id")),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated.", body = CommentDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn update_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateCommentRequest>,
) -> HttpResult<Json<CommentDto>> {
    let command = UpdateCommentCommand {
        id,
        initials: payload.initials,
        rating: payload.rating,
        content: payload.content,
        is_active: payload.is_active,
    };

    state
        .services
        .comment_commands
        .update_comment(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    params(("id" = String, Path, description = "Comment id")),
    responses(
        (status = 204, description = "Comment deleted."),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(&user, &id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
