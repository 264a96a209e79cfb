use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use larder_auth_types::identity::IdentityHeaders;
use larder_domain::id::{GroupId, RecipeId, UserId};
use larder_domain::rating::{RatingFilter, RatingPatch};

use crate::domain::types::Rating;
use crate::error::RecipesServiceError;
use crate::handlers::ensure_self;
use crate::state::AppState;
use crate::usecase::rating::{GetRatingUseCase, ListRatingsUseCase, UpdateRatingUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub rating: Option<f64>,
    pub is_favorite: bool,
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            user_id: rating.user_id.0,
            recipe_id: rating.recipe_id.0,
            rating: rating.rating,
            is_favorite: rating.is_favorite,
        }
    }
}

#[derive(Serialize)]
pub struct RatingsResponse {
    pub ratings: Vec<RatingResponse>,
}

impl From<Vec<Rating>> for RatingsResponse {
    fn from(ratings: Vec<Rating>) -> Self {
        Self {
            ratings: ratings.into_iter().map(RatingResponse::from).collect(),
        }
    }
}

pub(crate) async fn list_ratings(
    state: &AppState,
    user_id: Uuid,
    filter: RatingFilter,
) -> Result<Json<RatingsResponse>, RecipesServiceError> {
    let uc = ListRatingsUseCase {
        ratings: state.rating_repo(),
    };
    let ratings = uc.execute(UserId(user_id), filter).await?;
    Ok(Json(ratings.into()))
}

// ── GET /users/self/ratings ──────────────────────────────────────────────────

pub async fn get_self_ratings(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<RatingsResponse>, RecipesServiceError> {
    list_ratings(&state, identity.user_id, RatingFilter::All).await
}

// ── GET /users/{id}/ratings ──────────────────────────────────────────────────

pub async fn get_user_ratings(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<RatingsResponse>, RecipesServiceError> {
    ensure_self(&identity, user_id)?;
    list_ratings(&state, user_id, RatingFilter::All).await
}

// ── GET /users/self/ratings/{recipe_id} ──────────────────────────────────────

pub async fn get_self_rating(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(recipe_id): Path<Uuid>,
) -> Result<Json<RatingResponse>, RecipesServiceError> {
    let uc = GetRatingUseCase {
        ratings: state.rating_repo(),
    };
    let rating = uc
        .execute(UserId(identity.user_id), RecipeId(recipe_id))
        .await?;
    Ok(Json(rating.into()))
}

// ── POST /users/{id}/ratings/{slug} ──────────────────────────────────────────

/// Omitted and `null` fields both leave the stored value unchanged.
///
/// The favorite flag is accepted as `isFavorite` or `is_favorite`. When a body
/// carries both, `isFavorite` wins.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRatingRequest {
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub is_favorite: Option<bool>,
    #[serde(default, rename = "is_favorite")]
    pub is_favorite_snake: Option<bool>,
}

impl From<UpdateRatingRequest> for RatingPatch {
    fn from(body: UpdateRatingRequest) -> Self {
        RatingPatch {
            rating: body.rating,
            is_favorite: body.is_favorite.or(body.is_favorite_snake),
        }
    }
}

pub async fn update_rating(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path((user_id, slug)): Path<(Uuid, String)>,
    Json(body): Json<UpdateRatingRequest>,
) -> Result<Json<RatingResponse>, RecipesServiceError> {
    ensure_self(&identity, user_id)?;
    let uc = UpdateRatingUseCase {
        recipes: state.recipe_repo(),
        ratings: state.rating_repo(),
    };
    let rating = uc
        .execute(
            UserId(user_id),
            GroupId(identity.group_id),
            &slug,
            body.into(),
        )
        .await?;
    Ok(Json(rating.into()))
}
