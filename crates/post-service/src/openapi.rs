use utoipa::OpenApi;

#[derive(utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(utoipa::ToSchema)]
pub struct CreatePostInputDoc {
    pub title: String,
}

#[derive(utoipa::ToSchema)]
pub struct PostDoc {
    pub id: i64,
    pub title: String,
}

#[derive(utoipa::ToSchema)]
pub struct PostDetailsViewDoc {
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
        crate::routes::get_details,
    ),
    components(
        schemas(
            HealthResponse,
            CreatePostInputDoc,
            PostDoc,
            PostDetailsViewDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "post"),
    )
)]
pub struct ApiDoc;
