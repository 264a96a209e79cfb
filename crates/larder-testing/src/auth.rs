//! Mock identity helpers for integration tests.
//!
//! Services behind the gateway receive `x-larder-user-id` + `x-larder-group-id` headers
//! injected by the gateway. In tests, `MockAuth` produces these headers directly
//! so no real gateway is needed.

use http::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use larder_auth_types::identity::{GROUP_ID_HEADER, USER_ID_HEADER};

/// Configurable identity injected into test requests.
#[derive(Debug, Clone, Copy)]
pub struct MockAuth {
    pub user_id: Uuid,
    pub group_id: Uuid,
}

impl MockAuth {
    pub fn new(user_id: Uuid, group_id: Uuid) -> Self {
        Self { user_id, group_id }
    }

    /// A fresh user in a fresh group.
    pub fn random() -> Self {
        Self::new(Uuid::new_v4(), Uuid::new_v4())
    }

    /// Another fresh user sharing this identity's group.
    pub fn group_member(&self) -> Self {
        Self::new(Uuid::new_v4(), self.group_id)
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static(USER_ID_HEADER),
            HeaderValue::from_str(&self.user_id.to_string()).unwrap(),
        );
        map.insert(
            HeaderName::from_static(GROUP_ID_HEADER),
            HeaderValue::from_str(&self.group_id.to_string()).unwrap(),
        );
        map
    }
}
