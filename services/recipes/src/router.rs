use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use larder_core::health::healthz;
use larder_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    about::{get_about, get_oidc_info, get_startup_info, get_theme},
    favorite::{clear_favorite, get_self_favorites, get_user_favorites, set_favorite},
    health::readyz,
    rating::{get_self_rating, get_self_ratings, get_user_ratings, update_rating},
    recipe::{create_recipe, delete_recipe, get_recipe, update_recipe},
    tag::{get_tag, get_tags},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Favorites
        .route("/users/self/favorites", get(get_self_favorites))
        .route("/users/{id}/favorites", get(get_user_favorites))
        .route(
            "/users/{id}/favorites/{slug}",
            post(set_favorite).delete(clear_favorite),
        )
        // Ratings
        .route("/users/self/ratings", get(get_self_ratings))
        .route("/users/self/ratings/{recipe_id}", get(get_self_rating))
        .route("/users/{id}/ratings", get(get_user_ratings))
        .route("/users/{id}/ratings/{slug}", post(update_rating))
        // Recipes
        .route("/recipes", post(create_recipe))
        .route(
            "/recipes/{slug}",
            get(get_recipe).patch(update_recipe).delete(delete_recipe),
        )
        // Tags
        .route("/tags", get(get_tags))
        .route("/tags/{slug}", get(get_tag))
        // App metadata
        .route("/app/about", get(get_about))
        .route("/app/about/startup-info", get(get_startup_info))
        .route("/app/about/theme", get(get_theme))
        .route("/app/about/oidc", get(get_oidc_info))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
