use serde::Deserialize;

use larder_core::config::Config;

use crate::domain::types::{AppSettings, AppTheme, OidcSettings};

/// Recipes service configuration loaded from environment variables.
///
/// Every field reads the upper-cased env var of the same name.
#[derive(Debug, Deserialize)]
pub struct RecipesConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 9000). Env var: `RECIPES_PORT`.
    #[serde(default = "default_recipes_port")]
    pub recipes_port: u16,
    #[serde(default)]
    pub production: bool,
    #[serde(default)]
    pub is_demo: bool,
    #[serde(default)]
    pub allow_signup: bool,
    /// Seed admin email; while it exists the instance reports a first login.
    #[serde(default = "default_email")]
    pub default_email: String,
    #[serde(default)]
    pub oidc_auth_enabled: bool,
    pub oidc_configuration_url: Option<String>,
    pub oidc_client_id: Option<String>,
    pub theme_light_primary: Option<String>,
    pub theme_light_accent: Option<String>,
    pub theme_light_secondary: Option<String>,
    pub theme_light_success: Option<String>,
    pub theme_light_info: Option<String>,
    pub theme_light_warning: Option<String>,
    pub theme_light_error: Option<String>,
    pub theme_dark_primary: Option<String>,
    pub theme_dark_accent: Option<String>,
    pub theme_dark_secondary: Option<String>,
    pub theme_dark_success: Option<String>,
    pub theme_dark_info: Option<String>,
    pub theme_dark_warning: Option<String>,
    pub theme_dark_error: Option<String>,
}

impl Config for RecipesConfig {}

fn default_recipes_port() -> u16 {
    9000
}

fn default_email() -> String {
    "changeme@example.com".to_owned()
}

impl RecipesConfig {
    /// Settings exposed through the `/app/about` endpoints.
    pub fn app_settings(&self) -> AppSettings {
        let base = AppTheme::default();
        let pick = |value: &Option<String>, fallback: String| value.clone().unwrap_or(fallback);
        let theme = AppTheme {
            light_primary: pick(&self.theme_light_primary, base.light_primary),
            light_accent: pick(&self.theme_light_accent, base.light_accent),
            light_secondary: pick(&self.theme_light_secondary, base.light_secondary),
            light_success: pick(&self.theme_light_success, base.light_success),
            light_info: pick(&self.theme_light_info, base.light_info),
            light_warning: pick(&self.theme_light_warning, base.light_warning),
            light_error: pick(&self.theme_light_error, base.light_error),
            dark_primary: pick(&self.theme_dark_primary, base.dark_primary),
            dark_accent: pick(&self.theme_dark_accent, base.dark_accent),
            dark_secondary: pick(&self.theme_dark_secondary, base.dark_secondary),
            dark_success: pick(&self.theme_dark_success, base.dark_success),
            dark_info: pick(&self.theme_dark_info, base.dark_info),
            dark_warning: pick(&self.theme_dark_warning, base.dark_warning),
            dark_error: pick(&self.theme_dark_error, base.dark_error),
        };
        AppSettings {
            version: env!("CARGO_PKG_VERSION").to_owned(),
            production: self.production,
            is_demo: self.is_demo,
            allow_signup: self.allow_signup,
            default_email: self.default_email.clone(),
            oidc: OidcSettings {
                enabled: self.oidc_auth_enabled,
                configuration_url: self.oidc_configuration_url.clone(),
                client_id: self.oidc_client_id.clone(),
            },
            theme,
        }
    }
}
