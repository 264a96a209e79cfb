use larder_domain::id::{GroupId, RecipeId, UserId};
use larder_domain::rating::{RatingFilter, RatingPatch, mean_rating};

use crate::domain::repository::{RatingRepository, RecipeRepository};
use crate::domain::types::{Rating, Recipe};
use crate::error::RecipesServiceError;

/// Resolve a slug within the caller's group. Recipes of other groups are invisible.
pub(crate) async fn find_recipe<R: RecipeRepository>(
    recipes: &R,
    group_id: GroupId,
    slug: &str,
) -> Result<Recipe, RecipesServiceError> {
    recipes
        .find_by_slug(group_id, slug)
        .await?
        .ok_or(RecipesServiceError::RecipeNotFound)
}

// ── GetRating ────────────────────────────────────────────────────────────────

pub struct GetRatingUseCase<L: RatingRepository> {
    pub ratings: L,
}

impl<L: RatingRepository> GetRatingUseCase<L> {
    pub async fn execute(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> Result<Rating, RecipesServiceError> {
        self.ratings
            .get(user_id, recipe_id)
            .await?
            .ok_or(RecipesServiceError::RatingNotFound)
    }
}

// ── ListRatings ──────────────────────────────────────────────────────────────

pub struct ListRatingsUseCase<L: RatingRepository> {
    pub ratings: L,
}

impl<L: RatingRepository> ListRatingsUseCase<L> {
    pub async fn execute(
        &self,
        user_id: UserId,
        filter: RatingFilter,
    ) -> Result<Vec<Rating>, RecipesServiceError> {
        self.ratings.list_by_user(user_id, filter).await
    }
}

// ── UpdateRating ─────────────────────────────────────────────────────────────

pub struct UpdateRatingUseCase<R: RecipeRepository, L: RatingRepository> {
    pub recipes: R,
    pub ratings: L,
}

impl<R: RecipeRepository, L: RatingRepository> UpdateRatingUseCase<R, L> {
    pub async fn execute(
        &self,
        user_id: UserId,
        group_id: GroupId,
        slug: &str,
        patch: RatingPatch,
    ) -> Result<Rating, RecipesServiceError> {
        let recipe = find_recipe(&self.recipes, group_id, slug).await?;
        let rating = self.ratings.upsert(user_id, recipe.id, patch).await?;
        tracing::debug!(
            user_id = %user_id,
            recipe_id = %recipe.id,
            rating = ?rating.rating,
            is_favorite = rating.is_favorite,
            "rating updated"
        );
        Ok(rating)
    }
}

// ── SetFavorite ──────────────────────────────────────────────────────────────

pub struct SetFavoriteUseCase<R: RecipeRepository, L: RatingRepository> {
    pub recipes: R,
    pub ratings: L,
}

impl<R: RecipeRepository, L: RatingRepository> SetFavoriteUseCase<R, L> {
    pub async fn execute(
        &self,
        user_id: UserId,
        group_id: GroupId,
        slug: &str,
    ) -> Result<Rating, RecipesServiceError> {
        let recipe = find_recipe(&self.recipes, group_id, slug).await?;
        self.ratings
            .upsert(user_id, recipe.id, RatingPatch::favorite(true))
            .await
    }
}

// ── ClearFavorite ────────────────────────────────────────────────────────────

pub struct ClearFavoriteUseCase<R: RecipeRepository, L: RatingRepository> {
    pub recipes: R,
    pub ratings: L,
}

impl<R: RecipeRepository, L: RatingRepository> ClearFavoriteUseCase<R, L> {
    pub async fn execute(
        &self,
        user_id: UserId,
        group_id: GroupId,
        slug: &str,
    ) -> Result<(), RecipesServiceError> {
        let recipe = find_recipe(&self.recipes, group_id, slug).await?;
        self.ratings.clear_favorite(user_id, recipe.id).await
    }
}

// ── AggregateRating ──────────────────────────────────────────────────────────

pub struct AggregateRatingUseCase<'a, L: RatingRepository> {
    pub ratings: &'a L,
}

impl<L: RatingRepository> AggregateRatingUseCase<'_, L> {
    /// Mean of every user's rating for the recipe, recomputed on each call.
    pub async fn execute(&self, recipe_id: RecipeId) -> Result<Option<f64>, RecipesServiceError> {
        let rows = self.ratings.list_by_recipe(recipe_id).await?;
        Ok(mean_rating(rows.iter().map(|r| r.rating)))
    }
}
