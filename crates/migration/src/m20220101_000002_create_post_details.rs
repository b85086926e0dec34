//! Create `post_details` table.
//!
//! `post_id` is a logical reference to a post owned by the sibling
//! service's store; no foreign key is created on purpose.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostDetails::Table)
                    .if_not_exists()
                    .col(big_integer(PostDetails::Id).primary_key().auto_increment())
                    .col(string_len(PostDetails::Title, 256).not_null())
                    .col(string_len(PostDetails::Description, 1024).not_null())
                    .col(text(PostDetails::Body).not_null())
                    .col(big_integer(PostDetails::PostId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PostDetails::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PostDetails {
    Table,
    Id,
    Title,
    Description,
    Body,
    PostId,
}
