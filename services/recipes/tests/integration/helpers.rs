use std::sync::Arc;

use axum_test::{TestRequest, TestServer};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use serde_json::{Value, json};

use larder_core::config::Config as _;
use larder_recipes::config::RecipesConfig;
use larder_recipes::router::build_router;
use larder_recipes::state::AppState;
use larder_recipes_migration::Migrator;
use larder_recipes_schema::users;
use larder_testing::auth::MockAuth;

pub const DEFAULT_EMAIL: &str = "changeme@example.com";

// ── TestApp ──────────────────────────────────────────────────────────────────

/// The real router over a migrated in-memory SQLite database.
pub struct TestApp {
    pub server: TestServer,
    pub db: DatabaseConnection,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_env(&[]).await
    }

    /// Start with extra config env vars, e.g. `("OIDC_CLIENT_ID", "larder")`.
    pub async fn with_env(vars: &[(&str, &str)]) -> Self {
        let mut env = vec![("DATABASE_URL".to_owned(), "sqlite::memory:".to_owned())];
        env.extend(vars.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        let config = RecipesConfig::from_vars(env).unwrap();

        let mut options = ConnectOptions::new(config.database_url.clone());
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let state = AppState {
            db: db.clone(),
            settings: Arc::new(config.app_settings()),
        };
        let server = TestServer::new(build_router(state)).unwrap();
        Self { server, db }
    }

    /// Provision an account directory row, as the identity layer would.
    pub async fn seed_user(&self, auth: MockAuth, email: &str) {
        users::ActiveModel {
            id: Set(auth.user_id),
            group_id: Set(auth.group_id),
            email: Set(email.to_owned()),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .unwrap();
    }

    /// A seeded user in a fresh group.
    pub async fn user(&self) -> MockAuth {
        let auth = MockAuth::random();
        self.seed_user(auth, &format!("{}@example.com", auth.user_id))
            .await;
        auth
    }

    /// A seeded user sharing `auth`'s group.
    pub async fn member_of(&self, auth: MockAuth) -> MockAuth {
        let member = auth.group_member();
        self.seed_user(member, &format!("{}@example.com", member.user_id))
            .await;
        member
    }

    pub fn get(&self, auth: MockAuth, path: &str) -> TestRequest {
        with_identity(self.server.get(path), auth)
    }

    pub fn post(&self, auth: MockAuth, path: &str) -> TestRequest {
        with_identity(self.server.post(path), auth)
    }

    pub fn patch(&self, auth: MockAuth, path: &str) -> TestRequest {
        with_identity(self.server.patch(path), auth)
    }

    pub fn delete(&self, auth: MockAuth, path: &str) -> TestRequest {
        with_identity(self.server.delete(path), auth)
    }

    /// Create a recipe in `auth`'s group and return its JSON view.
    pub async fn create_recipe(&self, auth: MockAuth, name: &str) -> Value {
        let response = self
            .post(auth, "/recipes")
            .json(&json!({ "name": name }))
            .await;
        assert_eq!(response.status_code(), 201, "create recipe {name}");
        response.json::<Value>()
    }

    pub async fn favorite(&self, auth: MockAuth, slug: &str) {
        let response = self
            .post(auth, &format!("/users/{}/favorites/{slug}", auth.user_id))
            .await;
        assert_eq!(response.status_code(), 200, "favorite {slug}");
    }

    pub async fn rate(&self, auth: MockAuth, slug: &str, body: Value) -> Value {
        let response = self
            .post(auth, &format!("/users/{}/ratings/{slug}", auth.user_id))
            .json(&body)
            .await;
        assert_eq!(response.status_code(), 200, "rate {slug}");
        response.json::<Value>()
    }

    /// The caller's row for `recipe_id`, or `None` on 404.
    pub async fn own_rating(&self, auth: MockAuth, recipe_id: &str) -> Option<Value> {
        let response = self
            .get(auth, &format!("/users/self/ratings/{recipe_id}"))
            .await;
        match response.status_code().as_u16() {
            200 => Some(response.json::<Value>()),
            404 => None,
            other => panic!("unexpected status {other}"),
        }
    }
}

fn with_identity(mut request: TestRequest, auth: MockAuth) -> TestRequest {
    for (name, value) in auth.headers().iter() {
        request = request.add_header(name.clone(), value.clone());
    }
    request
}

/// Recipe ids listed in a `{"ratings": [...]}` body.
pub fn recipe_ids(body: &Value) -> Vec<String> {
    body["ratings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["recipeId"].as_str().unwrap().to_owned())
        .collect()
}
