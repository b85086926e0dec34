use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Persistence seam for detail records: create, list, and the
/// secondary-key lookup used by the read path.
#[async_trait]
pub trait PostDetailsRepository: Send + Sync {
    async fn create(
        &self,
        title: &str,
        description: &str,
        body: &str,
        post_id: i64,
    ) -> Result<models::post_details::Model, ServiceError>;
    async fn list(&self) -> Result<Vec<models::post_details::Model>, ServiceError>;
    async fn find_by_post_id(&self, post_id: i64) -> Result<Option<models::post_details::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmPostDetailsRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl PostDetailsRepository for SeaOrmPostDetailsRepository {
    async fn create(
        &self,
        title: &str,
        description: &str,
        body: &str,
        post_id: i64,
    ) -> Result<models::post_details::Model, ServiceError> {
        crate::db::post_details_service::create_details(&self.db, title, description, body, post_id).await
    }

    async fn list(&self) -> Result<Vec<models::post_details::Model>, ServiceError> {
        crate::db::post_details_service::list_details(&self.db).await
    }

    async fn find_by_post_id(&self, post_id: i64) -> Result<Option<models::post_details::Model>, ServiceError> {
        crate::db::post_details_service::find_by_post_id(&self.db, post_id).await
    }
}
