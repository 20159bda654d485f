// src/presentation/http/controllers/media.rs
use crate::application::{commands::media::UploadMediaCommand, dto::MediaDto};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path},
    http::StatusCode,
};
use utoipa::ToSchema;

const FILE_FIELD: &str = "file";
const FALLBACK_MIME: &str = "application/octet-stream";

/// Multipart body accepted by the upload endpoint.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

#[utoipa::path(
    get,
    path = "/api/media",
    responses(
        (status = 200, description = "Uploaded files, newest first.", body = [MediaDto]),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Media"
)]
pub async fn list_media(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
) -> HttpResult<Json<Vec<MediaDto>>> {
    state
        .services
        .media_queries
        .list_media()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/media/upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File stored.", body = MediaDto),
        (status = 400, description = "No file field or empty file.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 413, description = "File exceeds the upload limit.")
    ),
    tag = "Media"
)]
pub async fn upload_media(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    mut multipart: Multipart,
) -> HttpResult<(StatusCode, Json<MediaDto>)> {
    let command = read_file_field(&mut multipart)
        .await?
        .ok_or_else(|| HttpError::bad_request("no file uploaded"))?;

    let media = state
        .services
        .media_commands
        .upload(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(media)))
}

async fn read_file_field(multipart: &mut Multipart) -> HttpResult<Option<UploadMediaCommand>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::bad_request(err.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let original_name = field.file_name().unwrap_or(FILE_FIELD).to_string();
        let mime_type = field.content_type().unwrap_or(FALLBACK_MIME).to_string();
        let contents = field
            .bytes()
            .await
            .map_err(|err| HttpError::bad_request(err.body_text()))?;
        return Ok(Some(UploadMediaCommand {
            original_name,
            mime_type,
            contents,
        }));
    }
    Ok(None)
}

#[utoipa::path(
    delete,
    path = "/api/media/{id}",
    params(("id" = String, Path, description = "Media id")),
    responses(
        (status = 204, description = "Record and file removed."),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    tag = "Media"
)]
pub async fn delete_media(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .media_commands
        .delete(&user, &id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
