use chrono::Utc;
use uuid::Uuid;

use larder_domain::id::{GroupId, RecipeId, UserId};
use larder_domain::slug::{is_valid_slug, slugify};

use crate::domain::repository::{RatingRepository, RecipeRepository, TagRepository};
use crate::domain::types::{Recipe, RecipeDetail};
use crate::error::RecipesServiceError;
use crate::usecase::rating::{AggregateRatingUseCase, find_recipe};
use crate::usecase::tag::GetOrCreateTagsUseCase;

async fn load_detail<L: RatingRepository, T: TagRepository>(
    ratings: &L,
    tags: &T,
    recipe: Recipe,
) -> Result<RecipeDetail, RecipesServiceError> {
    let rating = AggregateRatingUseCase { ratings }.execute(recipe.id).await?;
    let tags = tags.list_by_recipe(recipe.id).await?;
    Ok(RecipeDetail {
        recipe,
        tags,
        rating,
    })
}

async fn link_tags<T: TagRepository>(
    tags: &T,
    group_id: GroupId,
    recipe_id: RecipeId,
    names: &[String],
) -> Result<(), RecipesServiceError> {
    let resolved = GetOrCreateTagsUseCase { tags }
        .execute(group_id, names)
        .await?;
    let tag_ids: Vec<Uuid> = resolved.iter().map(|t| t.id).collect();
    tags.replace_for_recipe(recipe_id, &tag_ids).await
}

fn normalize_name(name: &str) -> Result<String, RecipesServiceError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RecipesServiceError::InvalidRecipeName);
    }
    Ok(name.to_owned())
}

// ── CreateRecipe ─────────────────────────────────────────────────────────────

pub struct CreateRecipeInput {
    pub name: String,
    /// Derived from `name` when absent.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

pub struct CreateRecipeUseCase<R: RecipeRepository, T: TagRepository> {
    pub recipes: R,
    pub tags: T,
}

impl<R: RecipeRepository, T: TagRepository> CreateRecipeUseCase<R, T> {
    pub async fn execute(
        &self,
        user_id: UserId,
        group_id: GroupId,
        input: CreateRecipeInput,
    ) -> Result<RecipeDetail, RecipesServiceError> {
        let name = normalize_name(&input.name)?;
        let slug = match input.slug {
            Some(slug) if is_valid_slug(&slug) => slug,
            Some(_) => return Err(RecipesServiceError::InvalidSlug),
            None => slugify(&name).map_err(|_| RecipesServiceError::InvalidSlug)?,
        };
        let now = Utc::now();
        let recipe = Recipe {
            id: RecipeId(Uuid::now_v7()),
            group_id,
            user_id,
            name,
            slug,
            description: input.description,
            created_at: now,
            updated_at: now,
        };
        if !self.recipes.create(&recipe).await? {
            return Err(RecipesServiceError::RecipeAlreadyExists);
        }
        tracing::info!(recipe_id = %recipe.id, slug = %recipe.slug, "recipe created");

        link_tags(&self.tags, group_id, recipe.id, &input.tags).await?;
        let tags = self.tags.list_by_recipe(recipe.id).await?;
        Ok(RecipeDetail {
            recipe,
            tags,
            rating: None,
        })
    }
}

// ── GetRecipe ────────────────────────────────────────────────────────────────

pub struct GetRecipeUseCase<R: RecipeRepository, L: RatingRepository, T: TagRepository> {
    pub recipes: R,
    pub ratings: L,
    pub tags: T,
}

impl<R: RecipeRepository, L: RatingRepository, T: TagRepository> GetRecipeUseCase<R, L, T> {
    pub async fn execute(
        &self,
        group_id: GroupId,
        slug: &str,
    ) -> Result<RecipeDetail, RecipesServiceError> {
        let recipe = find_recipe(&self.recipes, group_id, slug).await?;
        load_detail(&self.ratings, &self.tags, recipe).await
    }
}

// ── UpdateRecipe ─────────────────────────────────────────────────────────────

/// Editable recipe fields. The aggregate rating is derived and has no counterpart here.
#[derive(Default)]
pub struct UpdateRecipeInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

pub struct UpdateRecipeUseCase<R: RecipeRepository, L: RatingRepository, T: TagRepository> {
    pub recipes: R,
    pub ratings: L,
    pub tags: T,
}

impl<R: RecipeRepository, L: RatingRepository, T: TagRepository> UpdateRecipeUseCase<R, L, T> {
    pub async fn execute(
        &self,
        group_id: GroupId,
        slug: &str,
        input: UpdateRecipeInput,
    ) -> Result<RecipeDetail, RecipesServiceError> {
        let mut recipe = find_recipe(&self.recipes, group_id, slug).await?;
        if let Some(name) = input.name {
            recipe.name = normalize_name(&name)?;
        }
        if let Some(description) = input.description {
            recipe.description = Some(description);
        }
        recipe.updated_at = Utc::now();
        self.recipes.update(&recipe).await?;

        if let Some(names) = input.tags {
            link_tags(&self.tags, group_id, recipe.id, &names).await?;
        }
        load_detail(&self.ratings, &self.tags, recipe).await
    }
}

// ── DeleteRecipe ─────────────────────────────────────────────────────────────

pub struct DeleteRecipeUseCase<R: RecipeRepository> {
    pub recipes: R,
}

impl<R: RecipeRepository> DeleteRecipeUseCase<R> {
    pub async fn execute(&self, group_id: GroupId, slug: &str) -> Result<(), RecipesServiceError> {
        let recipe = find_recipe(&self.recipes, group_id, slug).await?;
        if !self.recipes.delete(recipe.id).await? {
            return Err(RecipesServiceError::RecipeNotFound);
        }
        tracing::info!(recipe_id = %recipe.id, "recipe deleted");
        Ok(())
    }
}
