use models::post_details;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::errors::ServiceError;

/// Insert a detail record. `post_id` is not checked against the post
/// service's store; the reference is logical only.
pub async fn create_details(
    db: &DatabaseConnection,
    title: &str,
    description: &str,
    body: &str,
    post_id: i64,
) -> Result<post_details::Model, ServiceError> {
    let am = post_details::ActiveModel {
        title: Set(title.to_string()),
        description: Set(description.to_string()),
        body: Set(body.to_string()),
        post_id: Set(post_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn list_details(db: &DatabaseConnection) -> Result<Vec<post_details::Model>, ServiceError> {
    post_details::Entity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Look up by the secondary key. Returns the first match when more than
/// one record carries the same `post_id`.
pub async fn find_by_post_id(
    db: &DatabaseConnection,
    post_id: i64,
) -> Result<Option<post_details::Model>, ServiceError> {
    post_details::Entity::find()
        .filter(post_details::Column::PostId.eq(post_id))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn details_crud_and_secondary_key_lookup() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let created = create_details(&db, "title", "desc", "body text", 42).await?;
        assert!(created.id > 0);
        assert_eq!(created.post_id, 42);

        let found = find_by_post_id(&db, 42).await?.expect("details present");
        assert_eq!(found.id, created.id);
        assert_eq!(found.title, "title");

        let missing = find_by_post_id(&db, 9999).await?;
        assert!(missing.is_none());

        let all = list_details(&db).await?;
        assert_eq!(all.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_post_id_is_not_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        create_details(&db, "a", "d", "b", 7).await?;
        create_details(&db, "b", "d", "b", 7).await?;
        // Lookup still succeeds and yields a single record
        let found = find_by_post_id(&db, 7).await?;
        assert!(found.is_some());
        assert_eq!(list_details(&db).await?.len(), 2);
        Ok(())
    }
}
