use axum::http::StatusCode;

/// Handler for `GET /healthz`: liveness check.
///
/// Readiness depends on each service's backing stores, so `/readyz` lives in the service.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
