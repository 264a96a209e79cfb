use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    TransactionTrait,
    sea_query::{Expr, OnConflict},
};
use uuid::Uuid;

use larder_domain::id::{GroupId, RecipeId, UserId};
use larder_domain::rating::{RatingFilter, RatingPatch};
use larder_recipes_schema::{recipes, recipes_tags, tags, user_ratings, users};

use crate::domain::repository::{RatingRepository, RecipeRepository, TagRepository, UserDirectory};
use crate::domain::types::{Rating, Recipe, Tag};
use crate::error::RecipesServiceError;

// ── Recipe repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRecipeRepository {
    pub db: DatabaseConnection,
}

impl RecipeRepository for DbRecipeRepository {
    async fn find_by_slug(
        &self,
        group_id: GroupId,
        slug: &str,
    ) -> Result<Option<Recipe>, RecipesServiceError> {
        let model = recipes::Entity::find()
            .filter(recipes::Column::GroupId.eq(group_id.0))
            .filter(recipes::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .context("find recipe by slug")?;
        Ok(model.map(recipe_from_model))
    }

    async fn create(&self, recipe: &Recipe) -> Result<bool, RecipesServiceError> {
        let model = recipes::ActiveModel {
            id: Set(recipe.id.0),
            group_id: Set(recipe.group_id.0),
            user_id: Set(recipe.user_id.0),
            name: Set(recipe.name.clone()),
            slug: Set(recipe.slug.clone()),
            description: Set(recipe.description.clone()),
            created_at: Set(recipe.created_at),
            updated_at: Set(recipe.updated_at),
        };
        let inserted = recipes::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([recipes::Column::GroupId, recipes::Column::Slug])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("insert recipe")?;
        Ok(inserted > 0)
    }

    async fn update(&self, recipe: &Recipe) -> Result<(), RecipesServiceError> {
        recipes::ActiveModel {
            id: Set(recipe.id.0),
            name: Set(recipe.name.clone()),
            description: Set(recipe.description.clone()),
            updated_at: Set(recipe.updated_at),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update recipe")?;
        Ok(())
    }

    async fn delete(&self, id: RecipeId) -> Result<bool, RecipesServiceError> {
        let deleted = self
            .db
            .transaction::<_, u64, DbErr>(|txn| {
                Box::pin(async move {
                    user_ratings::Entity::delete_many()
                        .filter(user_ratings::Column::RecipeId.eq(id.0))
                        .exec(txn)
                        .await?;
                    recipes_tags::Entity::delete_many()
                        .filter(recipes_tags::Column::RecipeId.eq(id.0))
                        .exec(txn)
                        .await?;
                    let result = recipes::Entity::delete_by_id(id.0).exec(txn).await?;
                    Ok(result.rows_affected)
                })
            })
            .await
            .context("delete recipe")?;
        Ok(deleted > 0)
    }
}

fn recipe_from_model(model: recipes::Model) -> Recipe {
    Recipe {
        id: RecipeId(model.id),
        group_id: GroupId(model.group_id),
        user_id: UserId(model.user_id),
        name: model.name,
        slug: model.slug,
        description: model.description,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Rating repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRatingRepository {
    pub db: DatabaseConnection,
}

impl RatingRepository for DbRatingRepository {
    async fn get(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> Result<Option<Rating>, RecipesServiceError> {
        let model = user_ratings::Entity::find_by_id((user_id.0, recipe_id.0))
            .one(&self.db)
            .await
            .context("get rating")?;
        Ok(model.map(rating_from_model))
    }

    async fn list_by_user(
        &self,
        user_id: UserId,
        filter: RatingFilter,
    ) -> Result<Vec<Rating>, RecipesServiceError> {
        let mut query =
            user_ratings::Entity::find().filter(user_ratings::Column::UserId.eq(user_id.0));
        if filter == RatingFilter::FavoritesOnly {
            query = query.filter(user_ratings::Column::IsFavorite.eq(true));
        }
        let models = query
            .order_by_asc(user_ratings::Column::CreatedAt)
            .order_by_asc(user_ratings::Column::RecipeId)
            .all(&self.db)
            .await
            .context("list ratings by user")?;
        Ok(models.into_iter().map(rating_from_model).collect())
    }

    async fn list_by_recipe(
        &self,
        recipe_id: RecipeId,
    ) -> Result<Vec<Rating>, RecipesServiceError> {
        let models = user_ratings::Entity::find()
            .filter(user_ratings::Column::RecipeId.eq(recipe_id.0))
            .all(&self.db)
            .await
            .context("list ratings by recipe")?;
        Ok(models.into_iter().map(rating_from_model).collect())
    }

    async fn upsert(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
        patch: RatingPatch,
    ) -> Result<Rating, RecipesServiceError> {
        let now = Utc::now();
        let (rating, is_favorite) = patch.apply(None, false);

        // Only the supplied fields take part in the conflict update.
        let mut update_columns = vec![user_ratings::Column::UpdatedAt];
        if patch.rating.is_some() {
            update_columns.push(user_ratings::Column::Rating);
        }
        if patch.is_favorite.is_some() {
            update_columns.push(user_ratings::Column::IsFavorite);
        }

        let model = self
            .db
            .transaction::<_, user_ratings::Model, DbErr>(|txn| {
                Box::pin(async move {
                    let row = user_ratings::ActiveModel {
                        user_id: Set(user_id.0),
                        recipe_id: Set(recipe_id.0),
                        rating: Set(rating),
                        is_favorite: Set(is_favorite),
                        created_at: Set(now),
                        updated_at: Set(now),
                    };
                    user_ratings::Entity::insert(row)
                        .on_conflict(
                            OnConflict::columns([
                                user_ratings::Column::UserId,
                                user_ratings::Column::RecipeId,
                            ])
                            .update_columns(update_columns)
                            .to_owned(),
                        )
                        .exec_without_returning(txn)
                        .await?;
                    user_ratings::Entity::find_by_id((user_id.0, recipe_id.0))
                        .one(txn)
                        .await?
                        .ok_or_else(|| DbErr::RecordNotFound("user_ratings".to_owned()))
                })
            })
            .await
            .context("upsert rating")?;
        Ok(rating_from_model(model))
    }

    async fn clear_favorite(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> Result<(), RecipesServiceError> {
        let now = Utc::now();
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    user_ratings::Entity::update_many()
                        .col_expr(user_ratings::Column::IsFavorite, Expr::value(false))
                        .col_expr(user_ratings::Column::UpdatedAt, Expr::value(now))
                        .filter(user_ratings::Column::UserId.eq(user_id.0))
                        .filter(user_ratings::Column::RecipeId.eq(recipe_id.0))
                        .exec(txn)
                        .await?;
                    // A row with neither a rating nor a favorite carries nothing.
                    user_ratings::Entity::delete_many()
                        .filter(user_ratings::Column::UserId.eq(user_id.0))
                        .filter(user_ratings::Column::RecipeId.eq(recipe_id.0))
                        .filter(user_ratings::Column::Rating.is_null())
                        .filter(user_ratings::Column::IsFavorite.eq(false))
                        .exec(txn)
                        .await?;
                    Ok(())
                })
            })
            .await
            .context("clear favorite")?;
        Ok(())
    }
}

fn rating_from_model(model: user_ratings::Model) -> Rating {
    Rating {
        user_id: UserId(model.user_id),
        recipe_id: RecipeId(model.recipe_id),
        rating: model.rating,
        is_favorite: model.is_favorite,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Tag repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTagRepository {
    pub db: DatabaseConnection,
}

impl TagRepository for DbTagRepository {
    async fn get_or_create(
        &self,
        group_id: GroupId,
        name: &str,
        slug: &str,
    ) -> Result<Tag, RecipesServiceError> {
        let model = tags::ActiveModel {
            id: Set(Uuid::now_v7()),
            group_id: Set(group_id.0),
            name: Set(name.to_owned()),
            slug: Set(slug.to_owned()),
        };
        let inserted = tags::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([tags::Column::GroupId, tags::Column::Slug])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("insert tag")?;
        if inserted > 0 {
            tracing::debug!(group_id = %group_id, slug, "tag created");
        }

        let tag = self
            .find_by_slug(group_id, slug)
            .await?
            .context("tag missing after insert")?;
        Ok(tag)
    }

    async fn find_by_slug(
        &self,
        group_id: GroupId,
        slug: &str,
    ) -> Result<Option<Tag>, RecipesServiceError> {
        let model = tags::Entity::find()
            .filter(tags::Column::GroupId.eq(group_id.0))
            .filter(tags::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .context("find tag by slug")?;
        Ok(model.map(tag_from_model))
    }

    async fn list(&self, group_id: GroupId) -> Result<Vec<Tag>, RecipesServiceError> {
        let models = tags::Entity::find()
            .filter(tags::Column::GroupId.eq(group_id.0))
            .order_by_asc(tags::Column::Name)
            .all(&self.db)
            .await
            .context("list tags")?;
        Ok(models.into_iter().map(tag_from_model).collect())
    }

    async fn list_by_recipe(&self, recipe_id: RecipeId) -> Result<Vec<Tag>, RecipesServiceError> {
        let models = tags::Entity::find()
            .join(JoinType::InnerJoin, tags::Relation::RecipesTags.def())
            .filter(recipes_tags::Column::RecipeId.eq(recipe_id.0))
            .order_by_asc(tags::Column::Name)
            .all(&self.db)
            .await
            .context("list tags by recipe")?;
        Ok(models.into_iter().map(tag_from_model).collect())
    }

    async fn list_recipes(&self, tag_id: Uuid) -> Result<Vec<Recipe>, RecipesServiceError> {
        let models = recipes::Entity::find()
            .join(JoinType::InnerJoin, recipes::Relation::RecipesTags.def())
            .filter(recipes_tags::Column::TagId.eq(tag_id))
            .order_by_asc(recipes::Column::Name)
            .all(&self.db)
            .await
            .context("list recipes by tag")?;
        Ok(models.into_iter().map(recipe_from_model).collect())
    }

    async fn replace_for_recipe(
        &self,
        recipe_id: RecipeId,
        tag_ids: &[Uuid],
    ) -> Result<(), RecipesServiceError> {
        let links: Vec<recipes_tags::ActiveModel> = tag_ids
            .iter()
            .map(|&tag_id| recipes_tags::ActiveModel {
                recipe_id: Set(recipe_id.0),
                tag_id: Set(tag_id),
            })
            .collect();
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    recipes_tags::Entity::delete_many()
                        .filter(recipes_tags::Column::RecipeId.eq(recipe_id.0))
                        .exec(txn)
                        .await?;
                    if !links.is_empty() {
                        recipes_tags::Entity::insert_many(links)
                            .exec_without_returning(txn)
                            .await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("replace recipe tags")?;
        Ok(())
    }
}

fn tag_from_model(model: tags::Model) -> Tag {
    Tag {
        id: model.id,
        group_id: GroupId(model.group_id),
        name: model.name,
        slug: model.slug,
    }
}

// ── User directory ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserDirectory {
    pub db: DatabaseConnection,
}

impl UserDirectory for DbUserDirectory {
    async fn exists_by_email(&self, email: &str) -> Result<bool, RecipesServiceError> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(&self.db)
            .await
            .context("count users by email")?;
        Ok(count > 0)
    }
}
