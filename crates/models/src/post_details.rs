use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Detail record linked to a post via `post_id`. The link is a logical
/// reference only: no foreign key, and uniqueness per post is not enforced.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "post_details")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_deserializing)]
    pub id: i64,
    pub title: String,
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub post_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_post_id_in_camel_case() {
        let m = Model {
            id: 3,
            title: "t".into(),
            description: "d".into(),
            body: "b".into(),
            post_id: 7,
        };
        let json = serde_json::to_value(&m).expect("serialize");
        assert_eq!(json["postId"], 7);
        assert!(json.get("post_id").is_none());
    }

    #[test]
    fn deserializes_client_payload_without_id() {
        let m: Model = serde_json::from_str(
            r#"{"title":"t","description":"d","body":"b","postId":7}"#,
        )
        .expect("deserialize");
        assert_eq!(m.id, 0);
        assert_eq!(m.post_id, 7);
    }
}
