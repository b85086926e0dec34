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

use common::{http::JsonApiError, types::Health};
use service::errors::ServiceError;
use service::post_details::{repository::SeaOrmPostDetailsRepository, service::PostDetailsService};

use crate::openapi::ApiDoc;

pub type DetailsService = PostDetailsService<SeaOrmPostDetailsRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub details: Arc<DetailsService>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostDetailsInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub body: String,
    pub post_id: i64,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "OK"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[utoipa::path(
    post, path = "/api/post-details", tag = "post-details",
    request_body = crate::openapi::CreatePostDetailsInputDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreatePostDetailsInput>,
) -> Result<Json<models::post_details::Model>, JsonApiError> {
    info!(title = %input.title, post_id = input.post_id, "post_details_create_request");
    match state.details.create(&input.title, &input.description, &input.body, input.post_id).await {
        Ok(m) => Ok(Json(m)),
        Err(e) => {
            error!(err = %e, "create post details failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Create Failed", Some(e.to_string())))
        }
    }
}

#[utoipa::path(
    get, path = "/api/post-details", tag = "post-details",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::post_details::Model>>, JsonApiError> {
    match state.details.list().await {
        Ok(list) => {
            info!(count = list.len(), "list post details");
            Ok(Json(list))
        }
        Err(e) => Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "List Failed", Some(e.to_string()))),
    }
}

#[utoipa::path(
    get, path = "/api/post-details/{id}", tag = "post-details",
    params(("id" = i64, Path, description = "Post id the detail record is linked to")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Read Failed")
    )
)]
pub async fn get_by_post_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<models::post_details::Model>, JsonApiError> {
    match state.details.get_by_post_id(id).await {
        Ok(m) => Ok(Json(m)),
        Err(e @ ServiceError::NotFound(_)) => {
            Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())))
        }
        Err(e) => {
            error!(err = %e, post_id = id, "read post details failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Read Failed", Some(e.to_string())))
        }
    }
}

/// Build the full application router.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let api = Router::new()
        .route("/api/post-details", get(list).post(create))
        .route("/api/post-details/:id", get(get_by_post_id))
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
