use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use larder_auth_types::identity::IdentityHeaders;
use larder_domain::id::{GroupId, UserId};
use larder_domain::rating::RatingFilter;

use crate::error::RecipesServiceError;
use crate::handlers::ensure_self;
use crate::handlers::rating::{RatingResponse, RatingsResponse, list_ratings};
use crate::state::AppState;
use crate::usecase::rating::{ClearFavoriteUseCase, SetFavoriteUseCase};

// ── GET /users/self/favorites ────────────────────────────────────────────────

pub async fn get_self_favorites(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<RatingsResponse>, RecipesServiceError> {
    list_ratings(&state, identity.user_id, RatingFilter::FavoritesOnly).await
}

// ── GET /users/{id}/favorites ────────────────────────────────────────────────

pub async fn get_user_favorites(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<RatingsResponse>, RecipesServiceError> {
    ensure_self(&identity, user_id)?;
    list_ratings(&state, user_id, RatingFilter::FavoritesOnly).await
}

// ── POST /users/{id}/favorites/{slug} ────────────────────────────────────────

pub async fn set_favorite(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path((user_id, slug)): Path<(Uuid, String)>,
) -> Result<Json<RatingResponse>, RecipesServiceError> {
    ensure_self(&identity, user_id)?;
    let uc = SetFavoriteUseCase {
        recipes: state.recipe_repo(),
        ratings: state.rating_repo(),
    };
    let rating = uc
        .execute(UserId(user_id), GroupId(identity.group_id), &slug)
        .await?;
    Ok(Json(rating.into()))
}

// ── DELETE /users/{id}/favorites/{slug} ──────────────────────────────────────

pub async fn clear_favorite(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path((user_id, slug)): Path<(Uuid, String)>,
) -> Result<StatusCode, RecipesServiceError> {
    ensure_self(&identity, user_id)?;
    let uc = ClearFavoriteUseCase {
        recipes: state.recipe_repo(),
        ratings: state.rating_repo(),
    };
    uc.execute(UserId(user_id), GroupId(identity.group_id), &slug)
        .await?;
    Ok(StatusCode::OK)
}
