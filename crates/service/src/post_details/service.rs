use std::sync::Arc;

use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::post_details::repository::PostDetailsRepository;

/// Application service for post details.
pub struct PostDetailsService<R: PostDetailsRepository> {
    repo: Arc<R>,
}

impl<R: PostDetailsRepository> PostDetailsService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, description, body))]
    pub async fn create(
        &self,
        title: &str,
        description: &str,
        body: &str,
        post_id: i64,
    ) -> Result<models::post_details::Model, ServiceError> {
        let created = self.repo.create(title, description, body, post_id).await?;
        info!(id = created.id, post_id = created.post_id, "created post details");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<models::post_details::Model>, ServiceError> {
        self.repo.list().await
    }

    /// Read path keyed by `post_id`, not the primary id.
    pub async fn get_by_post_id(&self, post_id: i64) -> Result<models::post_details::Model, ServiceError> {
        self.repo
            .find_by_post_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("post details"))
    }
}
