use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{http::JsonApiError, types::Health, CoreError};
use service::post::{repository::SeaOrmPostRepository, service::PostService};

use crate::details_client::{DetailsClient, PostDetailsView};
use crate::openapi::ApiDoc;

pub type Posts = PostService<SeaOrmPostRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub posts: Arc<Posts>,
    pub details: DetailsClient,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreatePostInput {
    pub title: String,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "OK"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[utoipa::path(
    post, path = "/api/post", tag = "post",
    request_body = crate::openapi::CreatePostInputDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreatePostInput>,
) -> Result<Json<models::post::Model>, JsonApiError> {
    info!(title = %input.title, "post_create_request");
    match state.posts.create(&input.title).await {
        Ok(m) => Ok(Json(m)),
        Err(e) => {
            error!(err = %e, "create post failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create Failed", Some(e.to_string())))
        }
    }
}

#[utoipa::path(
    get, path = "/api/post", tag = "post",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<models::post::Model>>, JsonApiError> {
    match state.posts.list().await {
        Ok(list) => {
            info!(count = list.len(), "list posts");
            Ok(Json(list))
        }
        Err(e) => Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "List Failed", Some(e.to_string()))),
    }
}

/// Read-by-id assembles the response from the details service rather
/// than this service's own store.
#[utoipa::path(
    get, path = "/api/post/{id}", tag = "post",
    params(("id" = i64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found"),
        (status = 502, description = "Detail Fetch Failed")
    )
)]
pub async fn get_details(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<PostDetailsView>, JsonApiError> {
    match state.details.fetch_by_post_id(id).await {
        Ok(view) => Ok(Json(view)),
        Err(CoreError::RemoteStatus(404)) => Err(JsonApiError::new(
            StatusCode::NOT_FOUND,
            "Not Found",
            Some(format!("no post details for post {}", id)),
        )),
        Err(e) => {
            error!(err = %e, post_id = id, "fetch post details failed");
            Err(JsonApiError::new(StatusCode::BAD_GATEWAY, "Detail Fetch Failed", Some(e.to_string())))
        }
    }
}

/// Build the full application router.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let api = Router::new()
        .route("/api/post", get(list).post(create))
        .route("/api/post/:id", get(get_details))
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
