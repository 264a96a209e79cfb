use chrono::{DateTime, Utc};
use uuid::Uuid;

use larder_domain::id::{GroupId, RecipeId, UserId};

/// A user's rating row for one recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub user_id: UserId,
    pub recipe_id: RecipeId,
    /// `None` until the user gives a numeric rating.
    pub rating: Option<f64>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Recipe owned by a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub group_id: GroupId,
    pub user_id: UserId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Recipe together with its tags and the aggregate of all users' ratings.
#[derive(Debug, Clone)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    pub tags: Vec<Tag>,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: Uuid,
    pub group_id: GroupId,
    pub name: String,
    pub slug: String,
}

/// Tag with the recipes it is attached to.
#[derive(Debug, Clone)]
pub struct TagDetail {
    pub tag: Tag,
    pub recipes: Vec<Recipe>,
}

/// Instance-wide settings reported by the `/app/about` endpoints.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub version: String,
    pub production: bool,
    pub is_demo: bool,
    pub allow_signup: bool,
    pub default_email: String,
    pub oidc: OidcSettings,
    pub theme: AppTheme,
}

impl AppSettings {
    /// OIDC login is offered only when it is switched on and fully configured.
    pub fn oidc_ready(&self) -> bool {
        self.oidc.enabled && self.oidc.configuration_url.is_some() && self.oidc.client_id.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct OidcSettings {
    pub enabled: bool,
    pub configuration_url: Option<String>,
    pub client_id: Option<String>,
}

/// Frontend colour palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppTheme {
    pub light_primary: String,
    pub light_accent: String,
    pub light_secondary: String,
    pub light_success: String,
    pub light_info: String,
    pub light_warning: String,
    pub light_error: String,
    pub dark_primary: String,
    pub dark_accent: String,
    pub dark_secondary: String,
    pub dark_success: String,
    pub dark_info: String,
    pub dark_warning: String,
    pub dark_error: String,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            light_primary: "#E58325".to_owned(),
            light_accent: "#007A99".to_owned(),
            light_secondary: "#973542".to_owned(),
            light_success: "#43A047".to_owned(),
            light_info: "#1976D2".to_owned(),
            light_warning: "#FF6D00".to_owned(),
            light_error: "#EF5350".to_owned(),
            dark_primary: "#E58325".to_owned(),
            dark_accent: "#007A99".to_owned(),
            dark_secondary: "#973542".to_owned(),
            dark_success: "#43A047".to_owned(),
            dark_info: "#1976D2".to_owned(),
            dark_warning: "#FF6D00".to_owned(),
            dark_error: "#EF5350".to_owned(),
        }
    }
}
