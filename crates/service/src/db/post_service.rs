use models::post;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::errors::ServiceError;

/// Insert a post; the id is assigned by the database.
pub async fn create_post(db: &DatabaseConnection, title: &str) -> Result<post::Model, ServiceError> {
    let am = post::ActiveModel {
        title: Set(title.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn list_posts(db: &DatabaseConnection) -> Result<Vec<post::Model>, ServiceError> {
    post::Entity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}
