use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // PostDetails: index on post_id, the secondary lookup key.
        // Not unique: at-most-one-details-per-post is an unenforced intent.
        manager
            .create_index(
                Index::create()
                    .name("idx_post_details_post_id")
                    .table(PostDetails::Table)
                    .col(PostDetails::PostId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_post_details_post_id").table(PostDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PostDetails {
    Table,
    PostId,
}
