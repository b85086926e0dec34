use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Persistence seam for posts. The HTTP layer only sees this trait.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, title: &str) -> Result<models::post::Model, ServiceError>;
    async fn list(&self) -> Result<Vec<models::post::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmPostRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn create(&self, title: &str) -> Result<models::post::Model, ServiceError> {
        crate::db::post_service::create_post(&self.db, title).await
    }

    async fn list(&self) -> Result<Vec<models::post::Model>, ServiceError> {
        crate::db::post_service::list_posts(&self.db).await
    }
}
