//! Gateway-injected identity headers extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "x-larder-user-id";
pub const GROUP_ID_HEADER: &str = "x-larder-group-id";

/// User identity injected by the gateway via `x-larder-user-id` and `x-larder-group-id` headers.
///
/// Returns 401 if either header is absent or cannot be parsed as UUID.
/// Ownership checks (403) are done by handlers after extraction.
#[derive(Debug, Clone)]
pub struct IdentityHeaders {
    pub user_id: Uuid,
    pub group_id: Uuid,
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 declares this as `fn -> impl Future + Send`; read the headers
    // synchronously so the returned future does not borrow `parts`.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = uuid_header(parts, USER_ID_HEADER);
        let group_id = uuid_header(parts, GROUP_ID_HEADER);

        async move {
            let user_id = user_id.ok_or(StatusCode::UNAUTHORIZED)?;
            let group_id = group_id.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self { user_id, group_id })
        }
    }
}

fn uuid_header(parts: &Parts, name: &str) -> Option<Uuid> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<Uuid>().ok())
}
