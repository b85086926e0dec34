use utoipa::OpenApi;

#[derive(utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(utoipa::ToSchema)]
pub struct CreatePostDetailsInputDoc {
    pub title: String,
    pub description: String,
    pub body: String,
    pub post_id: i64,
}

#[derive(utoipa::ToSchema)]
pub struct PostDetailsDoc {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub body: String,
    pub post_id: i64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::create,
        crate::routes::list,
        crate::routes::get_by_post_id,
    ),
    components(
        schemas(
            HealthResponse,
            CreatePostDetailsInputDoc,
            PostDetailsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "post-details"),
    )
)]
pub struct ApiDoc;
