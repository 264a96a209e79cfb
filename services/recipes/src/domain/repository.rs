#![allow(async_fn_in_trait)]

use uuid::Uuid;

use larder_domain::id::{GroupId, RecipeId, UserId};
use larder_domain::rating::{RatingFilter, RatingPatch};

use crate::domain::types::{Rating, Recipe, Tag};
use crate::error::RecipesServiceError;

/// Repository for recipes, scoped by group.
pub trait RecipeRepository: Send + Sync {
    async fn find_by_slug(
        &self,
        group_id: GroupId,
        slug: &str,
    ) -> Result<Option<Recipe>, RecipesServiceError>;

    /// Insert a recipe. Returns `false` if the slug is already taken in its group.
    async fn create(&self, recipe: &Recipe) -> Result<bool, RecipesServiceError>;

    /// Persist `name`, `description` and `updated_at`.
    async fn update(&self, recipe: &Recipe) -> Result<(), RecipesServiceError>;

    /// Delete a recipe together with its ratings and tag links.
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: RecipeId) -> Result<bool, RecipesServiceError>;
}

/// The rating ledger: one row per (user, recipe).
pub trait RatingRepository: Send + Sync {
    async fn get(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> Result<Option<Rating>, RecipesServiceError>;

    /// Rows for one user, oldest first.
    async fn list_by_user(
        &self,
        user_id: UserId,
        filter: RatingFilter,
    ) -> Result<Vec<Rating>, RecipesServiceError>;

    async fn list_by_recipe(&self, recipe_id: RecipeId)
    -> Result<Vec<Rating>, RecipesServiceError>;

    /// Atomically merge `patch` into the row, creating it if absent, and return the stored row.
    /// Fields the patch leaves as `None` are never written.
    async fn upsert(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
        patch: RatingPatch,
    ) -> Result<Rating, RecipesServiceError>;

    /// Unset the favorite flag. A row left without a rating is removed.
    async fn clear_favorite(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> Result<(), RecipesServiceError>;
}

/// Repository for tags and their recipe links.
pub trait TagRepository: Send + Sync {
    /// Return the group's tag with `slug`, inserting it with `name` if absent.
    async fn get_or_create(
        &self,
        group_id: GroupId,
        name: &str,
        slug: &str,
    ) -> Result<Tag, RecipesServiceError>;

    async fn find_by_slug(
        &self,
        group_id: GroupId,
        slug: &str,
    ) -> Result<Option<Tag>, RecipesServiceError>;

    async fn list(&self, group_id: GroupId) -> Result<Vec<Tag>, RecipesServiceError>;

    async fn list_by_recipe(&self, recipe_id: RecipeId) -> Result<Vec<Tag>, RecipesServiceError>;

    async fn list_recipes(&self, tag_id: Uuid) -> Result<Vec<Recipe>, RecipesServiceError>;

    /// Replace the recipe's tag links with `tag_ids`.
    async fn replace_for_recipe(
        &self,
        recipe_id: RecipeId,
        tag_ids: &[Uuid],
    ) -> Result<(), RecipesServiceError>;
}

/// Read-only view of provisioned users.
pub trait UserDirectory: Send + Sync {
    async fn exists_by_email(&self, email: &str) -> Result<bool, RecipesServiceError>;
}
