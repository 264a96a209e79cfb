use uuid::Uuid;

use larder_auth_types::identity::IdentityHeaders;

use crate::error::RecipesServiceError;

pub mod about;
pub mod favorite;
pub mod health;
pub mod rating;
pub mod recipe;
pub mod tag;

/// `/users/{id}/...` routes act only on the caller's own ledger.
fn ensure_self(identity: &IdentityHeaders, user_id: Uuid) -> Result<(), RecipesServiceError> {
    if identity.user_id != user_id {
        return Err(RecipesServiceError::Forbidden);
    }
    Ok(())
}
