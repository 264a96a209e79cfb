use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Recipes service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum RecipesServiceError {
    #[error("recipe not found")]
    RecipeNotFound,
    #[error("rating not found")]
    RatingNotFound,
    #[error("tag not found")]
    TagNotFound,
    #[error("recipe already exists")]
    RecipeAlreadyExists,
    #[error("invalid recipe name")]
    InvalidRecipeName,
    #[error("invalid slug")]
    InvalidSlug,
    #[error("invalid tag name")]
    InvalidTagName,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl RecipesServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RecipeNotFound => "RECIPE_NOT_FOUND",
            Self::RatingNotFound => "RATING_NOT_FOUND",
            Self::TagNotFound => "TAG_NOT_FOUND",
            Self::RecipeAlreadyExists => "RECIPE_ALREADY_EXISTS",
            Self::InvalidRecipeName => "INVALID_RECIPE_NAME",
            Self::InvalidSlug => "INVALID_SLUG",
            Self::InvalidTagName => "INVALID_TAG_NAME",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for RecipesServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::RecipeNotFound | Self::RatingNotFound | Self::TagNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::RecipeAlreadyExists => StatusCode::CONFLICT,
            Self::InvalidRecipeName | Self::InvalidSlug | Self::InvalidTagName => {
                StatusCode::BAD_REQUEST
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client errors; TraceLayer already records their status.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
