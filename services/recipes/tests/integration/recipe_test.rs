use serde_json::{Value, json};

use crate::helpers::TestApp;

// ── create / read ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_recipe_with_derived_slug_and_tags() {
    let app = TestApp::new().await;
    let auth = app.user().await;

    let response = app
        .post(auth, "/recipes")
        .json(&json!({
            "name": "Banana Bread",
            "description": "Use overripe bananas.",
            "tags": ["Baking", "breakfast", " baking "],
        }))
        .await;
    assert_eq!(response.status_code(), 201);
    let body = response.json::<Value>();
    assert_eq!(body["slug"], "banana-bread");
    assert_eq!(body["description"], "Use overripe bananas.");
    assert!(body["rating"].is_null());
    let slugs: Vec<&str> = body["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["baking", "breakfast"]);

    let fetched = app.get(auth, "/recipes/banana-bread").await;
    assert_eq!(fetched.status_code(), 200);
    assert_eq!(fetched.json::<Value>()["id"], body["id"]);
}

#[tokio::test]
async fn should_reject_duplicate_slug_in_same_group() {
    let app = TestApp::new().await;
    let auth = app.user().await;
    app.create_recipe(auth, "Chili").await;

    let response = app
        .post(auth, "/recipes")
        .json(&json!({ "name": "Chili" }))
        .await;
    assert_eq!(response.status_code(), 409);
    assert_eq!(response.json::<Value>()["kind"], "RECIPE_ALREADY_EXISTS");

    // Slugs are scoped per group.
    let other = app.user().await;
    app.create_recipe(other, "Chili").await;
}

#[tokio::test]
async fn should_reject_invalid_slug() {
    let app = TestApp::new().await;
    let auth = app.user().await;

    let response = app
        .post(auth, "/recipes")
        .json(&json!({ "name": "!!!" }))
        .await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_SLUG");
}

#[tokio::test]
async fn should_return_404_for_recipe_of_another_group() {
    let app = TestApp::new().await;
    let owner = app.user().await;
    let outsider = app.user().await;
    app.create_recipe(owner, "Paella").await;

    let response = app.get(outsider, "/recipes/paella").await;
    assert_eq!(response.status_code(), 404);
}

// ── aggregate rating ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_average_ratings_of_all_users() {
    let app = TestApp::new().await;
    let alice = app.user().await;
    let bob = app.member_of(alice).await;
    let carol = app.member_of(alice).await;
    app.create_recipe(alice, "Brownies").await;

    app.rate(alice, "brownies", json!({ "rating": 5 })).await;
    app.rate(bob, "brownies", json!({ "rating": 2 })).await;
    // A favorite without a rating does not count.
    app.favorite(carol, "brownies").await;

    let body = app.get(alice, "/recipes/brownies").await.json::<Value>();
    assert_eq!(body["rating"].as_f64(), Some(3.5));
}

#[tokio::test]
async fn should_ignore_rating_in_recipe_update() {
    let app = TestApp::new().await;
    let alice = app.user().await;
    let bob = app.member_of(alice).await;
    app.create_recipe(alice, "Brownies").await;
    app.rate(alice, "brownies", json!({ "rating": 5 })).await;
    app.rate(bob, "brownies", json!({ "rating": 2 })).await;

    let response = app
        .patch(alice, "/recipes/brownies")
        .json(&json!({ "rating": 1, "description": "Fudgy." }))
        .await;
    assert_eq!(response.status_code(), 200);
    let body = response.json::<Value>();
    assert_eq!(body["description"], "Fudgy.");
    assert_eq!(body["rating"].as_f64(), Some(3.5));

    let fetched = app.get(alice, "/recipes/brownies").await.json::<Value>();
    assert_eq!(fetched["rating"].as_f64(), Some(3.5));
}

#[tokio::test]
async fn should_replace_tags_on_update() {
    let app = TestApp::new().await;
    let auth = app.user().await;
    app.post(auth, "/recipes")
        .json(&json!({ "name": "Stew", "tags": ["winter"] }))
        .await;

    let body = app
        .patch(auth, "/recipes/stew")
        .json(&json!({ "tags": ["Dinner"] }))
        .await
        .json::<Value>();
    assert_eq!(body["tags"][0]["slug"], "dinner");
    assert_eq!(body["tags"].as_array().unwrap().len(), 1);
}

// ── delete ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_remove_ratings_when_recipe_deleted() {
    let app = TestApp::new().await;
    let auth = app.user().await;
    let recipe = app.create_recipe(auth, "Meatloaf").await;
    let recipe_id = recipe["id"].as_str().unwrap();
    app.rate(auth, "meatloaf", json!({ "rating": 3, "isFavorite": true }))
        .await;
    assert!(app.own_rating(auth, recipe_id).await.is_some());

    let response = app.delete(auth, "/recipes/meatloaf").await;
    assert_eq!(response.status_code(), 204);

    assert!(app.own_rating(auth, recipe_id).await.is_none());
    let favorites = app.get(auth, "/users/self/favorites").await.json::<Value>();
    assert_eq!(favorites["ratings"], json!([]));
    assert_eq!(app.get(auth, "/recipes/meatloaf").await.status_code(), 404);
}

// ── tags ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_tags_and_their_recipes() {
    let app = TestApp::new().await;
    let auth = app.user().await;
    app.post(auth, "/recipes")
        .json(&json!({ "name": "Waffles", "tags": ["Breakfast"] }))
        .await;
    app.post(auth, "/recipes")
        .json(&json!({ "name": "Crepes", "tags": ["Breakfast", "French"] }))
        .await;

    let tags = app.get(auth, "/tags").await.json::<Value>();
    let names: Vec<&str> = tags
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Breakfast", "French"]);

    let breakfast = app.get(auth, "/tags/breakfast").await.json::<Value>();
    let recipes: Vec<&str> = breakfast["recipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["slug"].as_str().unwrap())
        .collect();
    assert_eq!(recipes, vec!["crepes", "waffles"]);

    let missing = app.get(auth, "/tags/lunch").await;
    assert_eq!(missing.status_code(), 404);
    assert_eq!(missing.json::<Value>()["kind"], "TAG_NOT_FOUND");
}
