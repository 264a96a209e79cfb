use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use larder_auth_types::identity::IdentityHeaders;
use larder_domain::id::{GroupId, UserId};

use crate::domain::types::{RecipeDetail, Tag};
use crate::error::RecipesServiceError;
use crate::state::AppState;
use crate::usecase::recipe::{
    CreateRecipeInput, CreateRecipeUseCase, DeleteRecipeUseCase, GetRecipeUseCase,
    UpdateRecipeInput, UpdateRecipeUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct TagSummary {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl From<Tag> for TagSummary {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            slug: tag.slug,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<TagSummary>,
    /// Mean of all users' ratings; read-only.
    pub rating: Option<f64>,
    #[serde(serialize_with = "larder_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "larder_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<RecipeDetail> for RecipeResponse {
    fn from(detail: RecipeDetail) -> Self {
        let RecipeDetail {
            recipe,
            tags,
            rating,
        } = detail;
        Self {
            id: recipe.id.0,
            slug: recipe.slug,
            name: recipe.name,
            description: recipe.description,
            tags: tags.into_iter().map(TagSummary::from).collect(),
            rating,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

// ── POST /recipes ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateRecipeRequest {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub async fn create_recipe(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), RecipesServiceError> {
    let uc = CreateRecipeUseCase {
        recipes: state.recipe_repo(),
        tags: state.tag_repo(),
    };
    let detail = uc
        .execute(
            UserId(identity.user_id),
            GroupId(identity.group_id),
            CreateRecipeInput {
                name: body.name,
                slug: body.slug,
                description: body.description,
                tags: body.tags,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(detail.into())))
}

// ── GET /recipes/{slug} ──────────────────────────────────────────────────────

pub async fn get_recipe(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<RecipeResponse>, RecipesServiceError> {
    let uc = GetRecipeUseCase {
        recipes: state.recipe_repo(),
        ratings: state.rating_repo(),
        tags: state.tag_repo(),
    };
    let detail = uc.execute(GroupId(identity.group_id), &slug).await?;
    Ok(Json(detail.into()))
}

// ── PATCH /recipes/{slug} ────────────────────────────────────────────────────

/// A `rating` key in the body is not a field here and is dropped on deserialize.
#[derive(Deserialize)]
pub struct UpdateRecipeRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

pub async fn update_recipe(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<UpdateRecipeRequest>,
) -> Result<Json<RecipeResponse>, RecipesServiceError> {
    let uc = UpdateRecipeUseCase {
        recipes: state.recipe_repo(),
        ratings: state.rating_repo(),
        tags: state.tag_repo(),
    };
    let detail = uc
        .execute(
            GroupId(identity.group_id),
            &slug,
            UpdateRecipeInput {
                name: body.name,
                description: body.description,
                tags: body.tags,
            },
        )
        .await?;
    Ok(Json(detail.into()))
}

// ── DELETE /recipes/{slug} ───────────────────────────────────────────────────

pub async fn delete_recipe(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<StatusCode, RecipesServiceError> {
    let uc = DeleteRecipeUseCase {
        recipes: state.recipe_repo(),
    };
    uc.execute(GroupId(identity.group_id), &slug).await?;
    Ok(StatusCode::NO_CONTENT)
}
