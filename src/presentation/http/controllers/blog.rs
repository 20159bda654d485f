// src/presentation/http/controllers/blog.rs
use crate::application::{
    commands::blog::{CreateBlogPostCommand, DeleteBlogPostCommand, UpdateBlogPostCommand},
    dto::{BlogPostDto, Paginated},
    queries::blog::{GetBlogPostByIdQuery, GetBlogPostBySlugQuery, ListBlogPostsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult, OrNotFound};
use crate::presentation::http::extractors::{ApiJson, Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

const POST_NOT_FOUND: &str = "blog post not found";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BlogListParams {
    /// One-based page number.
    #[serde(default)]
    pub page: u32,
    /// Page size, capped at 100.
    #[serde(default)]
    pub limit: u32,
    /// Admin only: include unpublished posts.
    #[serde(default)]
    pub include_drafts: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPostRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/blog",
    params(BlogListParams),
    responses(
        (status = 200, description = "A page of posts.", body = Paginated<BlogPostDto>),
        (status = 401, description = "Drafts requested without a token.", body = ErrorResponse)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Blog"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(actor): MaybeAuthenticated,
    Query(params): Query<BlogListParams>,
) -> HttpResult<Json<Paginated<BlogPostDto>>> {
    state
        .services
        .blog_queries
        .list_posts(
            actor.as_ref(),
            ListBlogPostsQuery {
                page: params.page,
                limit: params.limit,
                include_drafts: params.include_drafts,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/blog/by-slug/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "The post.", body = BlogPostDto),
        (status = 404, description = "Unknown slug or unpublished post.", body = ErrorResponse)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Blog"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(actor): MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<BlogPostDto>> {
    state
        .services
        .blog_queries
        .get_post_by_slug(actor.as_ref(), GetBlogPostBySlugQuery { slug })
        .await
        .or_not_found(POST_NOT_FOUND)
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/blog/{id}",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post, drafts included.", body = BlogPostDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<BlogPostDto>> {
    state
        .services
        .blog_queries
        .get_post_by_id(GetBlogPostByIdQuery { id })
        .await
        .or_not_found(POST_NOT_FOUND)
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/blog",
    request_body = CreateBlogPostRequest,
    responses(
        (status = 201, description = "Post created.", body = BlogPostDto),
        (status = 400, description = "Missing title or content.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 409, description = "Another post already uses this title.", body = ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<CreateBlogPostRequest>,
) -> HttpResult<(StatusCode, Json<BlogPostDto>)> {
    let command = CreateBlogPostCommand {
        title: payload.title,
        excerpt: payload.excerpt,
        content: payload.content,
        cover_image: payload.cover_image,
        published: payload.published,
    };

    let post = state
        .services
        .blog_commands
        .create_post(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    put,
    path = "/api/blog/{id}",
    params(("id" = String, Path, description = "Post id")),
    request_body = UpdateBlogPostRequest,
    responses(
        (status = 200, description = "Post updated.", body = BlogPostDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown id.", body = ErrorResponse),
        (status = 409, description = "Another post already uses this title.", body = ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateBlogPostRequest>,
) -> HttpResult<Json<BlogPostDto>> {
    let command = UpdateBlogPostCommand {
        id,
        title: payload.title,
        excerpt: payload.excerpt,
        content: payload.content,
        cover_image: payload.cover_image,
        published: payload.published,
    };

    state
        .services
        .blog_commands
        .update_post(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/blog/{id}",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted."),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .blog_commands
        .delete_post(&user, DeleteBlogPostCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
