use std::sync::Arc;

use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::post::repository::PostRepository;

/// Application service for posts: create and list, no update or delete.
pub struct PostService<R: PostRepository> {
    repo: Arc<R>,
}

impl<R: PostRepository> PostService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, title: &str) -> Result<models::post::Model, ServiceError> {
        let created = self.repo.create(title).await?;
        info!(id = created.id, "created post");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<models::post::Model>, ServiceError> {
        self.repo.list().await
    }
}
