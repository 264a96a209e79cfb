use std::future::IntoFuture;

use serde_json::{Value, json};

use crate::helpers::{TestApp, recipe_ids};

// ── empty state ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_empty_lists_before_any_interaction() {
    let app = TestApp::new().await;
    let auth = app.user().await;
    let recipe = app.create_recipe(auth, "Omelette").await;

    let ratings = app.get(auth, "/users/self/ratings").await;
    assert_eq!(ratings.status_code(), 200);
    assert_eq!(ratings.json::<Value>(), json!({ "ratings": [] }));

    let favorites = app.get(auth, "/users/self/favorites").await;
    assert_eq!(favorites.json::<Value>(), json!({ "ratings": [] }));

    assert!(
        app.own_rating(auth, recipe["id"].as_str().unwrap())
            .await
            .is_none()
    );
}

#[tokio::test]
async fn should_return_rating_not_found_kind_for_missing_row() {
    let app = TestApp::new().await;
    let auth = app.user().await;
    let recipe = app.create_recipe(auth, "Omelette").await;

    let response = app
        .get(
            auth,
            &format!("/users/self/ratings/{}", recipe["id"].as_str().unwrap()),
        )
        .await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<Value>()["kind"], "RATING_NOT_FOUND");
}

// ── update_rating ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_set_rating_and_favorite_together() {
    let app = TestApp::new().await;
    let auth = app.user().await;
    let recipe = app.create_recipe(auth, "Lasagna").await;

    let body = app
        .rate(auth, "lasagna", json!({ "rating": 4.5, "isFavorite": true }))
        .await;
    assert_eq!(body["rating"].as_f64(), Some(4.5));
    assert_eq!(body["isFavorite"], true);
    assert_eq!(body["recipeId"], recipe["id"]);

    let all = app.get(auth, "/users/self/ratings").await.json::<Value>();
    assert_eq!(recipe_ids(&all), vec![recipe["id"].as_str().unwrap()]);
}

#[tokio::test]
async fn should_preserve_favorite_on_rating_only_update() {
    let app = TestApp::new().await;
    let auth = app.user().await;
    let recipe = app.create_recipe(auth, "Risotto").await;
    let recipe_id = recipe["id"].as_str().unwrap();

    for favorite in [true, false] {
        app.rate(auth, "risotto", json!({ "isFavorite": favorite }))
            .await;
        app.rate(auth, "risotto", json!({ "rating": 3 })).await;

        let row = app.own_rating(auth, recipe_id).await.expect("rating row");
        assert_eq!(row["isFavorite"], favorite);
        assert_eq!(row["rating"].as_f64(), Some(3.0));
    }
}

#[tokio::test]
async fn should_preserve_rating_on_favorite_only_update() {
    let app = TestApp::new().await;
    let auth = app.user().await;
    let recipe = app.create_recipe(auth, "Goulash").await;

    app.rate(auth, "goulash", json!({ "rating": 2 })).await;
    app.rate(auth, "goulash", json!({ "is_favorite": true }))
        .await;
    app.rate(auth, "goulash", json!({ "rating": null, "isFavorite": false }))
        .await;

    let row = app
        .own_rating(auth, recipe["id"].as_str().unwrap())
        .await
        .expect("rating row");
    assert_eq!(row["rating"].as_f64(), Some(2.0));
    assert_eq!(row["isFavorite"], false);
}

#[tokio::test]
async fn should_store_zero_rating() {
    let app = TestApp::new().await;
    let auth = app.user().await;
    let recipe = app.create_recipe(auth, "Gruel").await;

    let body = app.rate(auth, "gruel", json!({ "rating": 0 })).await;
    assert_eq!(body["rating"].as_f64(), Some(0.0));

    let row = app
        .own_rating(auth, recipe["id"].as_str().unwrap())
        .await
        .expect("rating row");
    assert!(!row["rating"].is_null());
    assert_eq!(row["rating"].as_f64(), Some(0.0));
    assert_eq!(row["isFavorite"], false);
}

#[tokio::test]
async fn should_return_404_when_rating_unknown_recipe() {
    let app = TestApp::new().await;
    let auth = app.user().await;

    for body in [
        json!({ "rating": 4 }),
        json!({ "isFavorite": true }),
        json!({ "rating": 1, "isFavorite": false }),
    ] {
        let response = app
            .post(auth, &format!("/users/{}/ratings/missing", auth.user_id))
            .json(&body)
            .await;
        assert_eq!(response.status_code(), 404);
    }
}

#[tokio::test]
async fn should_hide_recipes_of_other_groups() {
    let app = TestApp::new().await;
    let owner = app.user().await;
    let outsider = app.user().await;
    app.create_recipe(owner, "Secret Sauce").await;

    let response = app
        .post(
            outsider,
            &format!("/users/{}/ratings/secret-sauce", outsider.user_id),
        )
        .json(&json!({ "rating": 5 }))
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn should_forbid_rating_for_another_user() {
    let app = TestApp::new().await;
    let auth = app.user().await;
    let other = app.member_of(auth).await;
    app.create_recipe(auth, "Pie").await;

    let response = app
        .post(auth, &format!("/users/{}/ratings/pie", other.user_id))
        .json(&json!({ "rating": 5 }))
        .await;
    assert_eq!(response.status_code(), 403);
    assert_eq!(response.json::<Value>()["kind"], "FORBIDDEN");
}

#[tokio::test]
async fn should_keep_ledgers_of_group_members_separate() {
    let app = TestApp::new().await;
    let alice = app.user().await;
    let bob = app.member_of(alice).await;
    let recipe = app.create_recipe(alice, "Chili").await;
    let recipe_id = recipe["id"].as_str().unwrap();

    app.rate(alice, "chili", json!({ "rating": 5, "isFavorite": true }))
        .await;
    app.rate(bob, "chili", json!({ "rating": 1 })).await;

    let alice_row = app.own_rating(alice, recipe_id).await.expect("alice row");
    let bob_row = app.own_rating(bob, recipe_id).await.expect("bob row");
    assert_eq!(alice_row["rating"].as_f64(), Some(5.0));
    assert_eq!(alice_row["isFavorite"], true);
    assert_eq!(bob_row["rating"].as_f64(), Some(1.0));
    assert_eq!(bob_row["isFavorite"], false);

    let bob_favorites = app
        .get(bob, &format!("/users/{}/favorites", bob.user_id))
        .await
        .json::<Value>();
    assert_eq!(bob_favorites["ratings"], json!([]));
}

#[tokio::test]
async fn should_filter_favorites_from_all_ratings() {
    let app = TestApp::new().await;
    let auth = app.user().await;
    app.create_recipe(auth, "Bagels").await;
    app.create_recipe(auth, "Muffins").await;

    app.rate(auth, "bagels", json!({ "rating": 4 })).await;
    app.favorite(auth, "muffins").await;

    let all = app
        .get(auth, &format!("/users/{}/ratings", auth.user_id))
        .await
        .json::<Value>();
    assert_eq!(recipe_ids(&all).len(), 2);

    let favorites = app.get(auth, "/users/self/favorites").await.json::<Value>();
    let favorites = favorites["ratings"].as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["isFavorite"], true);
}

#[tokio::test]
async fn should_accept_writes_from_users_missing_in_directory() {
    let app = TestApp::new().await;
    let seeded = app.user().await;
    app.create_recipe(seeded, "Pie").await;

    // Identity comes from the gateway; the account directory may not know the user.
    let newcomer = seeded.group_member();
    let body = app.rate(newcomer, "pie", json!({ "rating": 4 })).await;
    assert_eq!(body["rating"].as_f64(), Some(4.0));
    app.favorite(newcomer, "pie").await;

    let cake = app.create_recipe(newcomer, "Cake").await;
    assert_eq!(cake["slug"], "cake");

    let recipe = app.get(newcomer, "/recipes/pie").await.json::<Value>();
    let row = app
        .own_rating(newcomer, recipe["id"].as_str().unwrap())
        .await
        .expect("rating row");
    assert_eq!(row["rating"].as_f64(), Some(4.0));
    assert_eq!(row["isFavorite"], true);
}

#[tokio::test]
async fn should_keep_both_fields_under_concurrent_partial_updates() {
    let app = TestApp::new().await;
    let auth = app.user().await;

    for i in 0..6 {
        let recipe = app.create_recipe(auth, &format!("Race {i}")).await;
        let slug = recipe["slug"].as_str().unwrap();
        let path = format!("/users/{}/ratings/{slug}", auth.user_id);

        let rating = app
            .post(auth, &path)
            .json(&json!({ "rating": 4 }))
            .into_future();
        let favorite = app
            .post(auth, &path)
            .json(&json!({ "isFavorite": true }))
            .into_future();
        // Alternate which writer is polled first so either one may create the row.
        let (rating, favorite) = if i % 2 == 0 {
            tokio::join!(rating, favorite)
        } else {
            let (favorite, rating) = tokio::join!(favorite, rating);
            (rating, favorite)
        };
        assert_eq!(rating.status_code(), 200);
        assert_eq!(favorite.status_code(), 200);

        let row = app
            .own_rating(auth, recipe["id"].as_str().unwrap())
            .await
            .expect("rating row");
        assert_eq!(row["rating"].as_f64(), Some(4.0), "iteration {i}");
        assert_eq!(row["isFavorite"], true, "iteration {i}");
    }
}
