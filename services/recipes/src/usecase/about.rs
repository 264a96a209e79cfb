use crate::domain::repository::UserDirectory;
use crate::error::RecipesServiceError;

// ── StartupInfo ──────────────────────────────────────────────────────────────

pub struct StartupInfoUseCase<U: UserDirectory> {
    pub users: U,
    pub default_email: String,
}

impl<U: UserDirectory> StartupInfoUseCase<U> {
    /// The instance is on its first login while the seeded default account still exists.
    pub async fn execute(&self) -> Result<bool, RecipesServiceError> {
        self.users.exists_by_email(&self.default_email).await
    }
}
