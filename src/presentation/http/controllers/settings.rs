use crate::application::{commands::settings::UpdateSettingsCommand, dto::SiteSettingsDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, Authenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

/// Omitted fields are left alone; an empty string clears the stored URL.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub profile_photo_url: Option<String>,
    pub hero_photo_url: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/settings",
    responses((status = 200, description = "Site settings.", body = SiteSettingsDto)),
    security(()),
    tag = "Settings"
)]
pub async fn get_settings(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<SiteSettingsDto>> {
    state
        .services
        .settings_queries
        .get_settings()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/settings",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Updated settings.", body = SiteSettingsDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Settings"
)]
pub async fn update_settings(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<UpdateSettingsRequest>,
) -> HttpResult<Json<SiteSettingsDto>> {
    let command = UpdateSettingsCommand {
        profile_photo_url: payload.profile_photo_url,
        hero_photo_url: payload.hero_photo_url,
    };

    state
        .services
        .settings_commands
        .update_settings(&user, command)
        .await
        .into_http()
        .map(Json)
}
