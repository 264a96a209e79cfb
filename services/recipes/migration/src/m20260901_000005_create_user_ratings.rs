use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserRatings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserRatings::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserRatings::RecipeId).uuid().not_null())
                    .col(ColumnDef::new(UserRatings::Rating).double().null())
                    .col(
                        ColumnDef::new(UserRatings::IsFavorite)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserRatings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserRatings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserRatings::UserId)
                            .col(UserRatings::RecipeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserRatings::Table, UserRatings::RecipeId)
                            .to(Recipes::Table, Recipes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        // Aggregate reads scan by recipe; the primary key only covers user-first lookups.
        manager
            .create_index(
                Index::create()
                    .table(UserRatings::Table)
                    .col(UserRatings::RecipeId)
                    .name("idx_user_ratings_recipe_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserRatings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserRatings {
    Table,
    UserId,
    RecipeId,
    Rating,
    IsFavorite,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Recipes {
    Table,
    Id,
}
