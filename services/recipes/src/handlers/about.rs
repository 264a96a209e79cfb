use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::types::AppTheme;
use crate::error::RecipesServiceError;
use crate::state::AppState;
use crate::usecase::about::StartupInfoUseCase;

/// Theme and OIDC settings only change on redeploy.
const STATIC_CACHE_CONTROL: &str = "public, max-age=604800";

// ── GET /app/about ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutResponse {
    pub version: String,
    pub production: bool,
    pub demo_status: bool,
    pub allow_signup: bool,
    pub enable_oidc: bool,
}

pub async fn get_about(State(state): State<AppState>) -> Json<AboutResponse> {
    let settings = &state.settings;
    Json(AboutResponse {
        version: settings.version.clone(),
        production: settings.production,
        demo_status: settings.is_demo,
        allow_signup: settings.allow_signup,
        enable_oidc: settings.oidc_ready(),
    })
}

// ── GET /app/about/startup-info ──────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupInfoResponse {
    pub is_first_login: bool,
}

pub async fn get_startup_info(
    State(state): State<AppState>,
) -> Result<Json<StartupInfoResponse>, RecipesServiceError> {
    let uc = StartupInfoUseCase {
        users: state.user_directory(),
        default_email: state.settings.default_email.clone(),
    };
    let is_first_login = uc.execute().await?;
    Ok(Json(StartupInfoResponse { is_first_login }))
}

// ── GET /app/about/theme ─────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
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

impl From<AppTheme> for ThemeResponse {
    fn from(theme: AppTheme) -> Self {
        Self {
            light_primary: theme.light_primary,
            light_accent: theme.light_accent,
            light_secondary: theme.light_secondary,
            light_success: theme.light_success,
            light_info: theme.light_info,
            light_warning: theme.light_warning,
            light_error: theme.light_error,
            dark_primary: theme.dark_primary,
            dark_accent: theme.dark_accent,
            dark_secondary: theme.dark_secondary,
            dark_success: theme.dark_success,
            dark_info: theme.dark_info,
            dark_warning: theme.dark_warning,
            dark_error: theme.dark_error,
        }
    }
}

pub async fn get_theme(State(state): State<AppState>) -> Response {
    let theme = ThemeResponse::from(state.settings.theme.clone());
    (
        [(header::CACHE_CONTROL, STATIC_CACHE_CONTROL)],
        Json(theme),
    )
        .into_response()
}

// ── GET /app/about/oidc ──────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OidcInfoResponse {
    pub configuration_url: Option<String>,
    pub client_id: Option<String>,
}

pub async fn get_oidc_info(State(state): State<AppState>) -> Response {
    let oidc = &state.settings.oidc;
    let body = OidcInfoResponse {
        configuration_url: oidc.configuration_url.clone(),
        client_id: oidc.client_id.clone(),
    };
    (
        [(header::CACHE_CONTROL, STATIC_CACHE_CONTROL)],
        Json(body),
    )
        .into_response()
}
