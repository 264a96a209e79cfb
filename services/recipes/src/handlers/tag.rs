use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use uuid::Uuid;

use larder_auth_types::identity::IdentityHeaders;
use larder_domain::id::GroupId;

use crate::domain::types::{Recipe, TagDetail};
use crate::error::RecipesServiceError;
use crate::handlers::recipe::TagSummary;
use crate::state::AppState;
use crate::usecase::tag::{GetTagUseCase, ListTagsUseCase};

#[derive(Serialize)]
pub struct RecipeSummary {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
}

impl From<Recipe> for RecipeSummary {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.0,
            slug: recipe.slug,
            name: recipe.name,
        }
    }
}

#[derive(Serialize)]
pub struct TagResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub recipes: Vec<RecipeSummary>,
}

impl From<TagDetail> for TagResponse {
    fn from(detail: TagDetail) -> Self {
        Self {
            id: detail.tag.id,
            name: detail.tag.name,
            slug: detail.tag.slug,
            recipes: detail.recipes.into_iter().map(RecipeSummary::from).collect(),
        }
    }
}

// ── GET /tags ────────────────────────────────────────────────────────────────

pub async fn get_tags(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<TagSummary>>, RecipesServiceError> {
    let uc = ListTagsUseCase {
        tags: state.tag_repo(),
    };
    let tags = uc.execute(GroupId(identity.group_id)).await?;
    Ok(Json(tags.into_iter().map(TagSummary::from).collect()))
}

// ── GET /tags/{slug} ─────────────────────────────────────────────────────────

pub async fn get_tag(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<TagResponse>, RecipesServiceError> {
    let uc = GetTagUseCase {
        tags: state.tag_repo(),
    };
    let detail = uc.execute(GroupId(identity.group_id), &slug).await?;
    Ok(Json(detail.into()))
}
