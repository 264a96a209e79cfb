use larder_domain::id::GroupId;
use larder_domain::slug::slugify;

use crate::domain::repository::TagRepository;
use crate::domain::types::{Tag, TagDetail};
use crate::error::RecipesServiceError;

// ── GetOrCreateTags ──────────────────────────────────────────────────────────

pub struct GetOrCreateTagsUseCase<'a, T: TagRepository> {
    pub tags: &'a T,
}

impl<T: TagRepository> GetOrCreateTagsUseCase<'_, T> {
    /// Resolve tag names to the group's tags, creating missing ones.
    /// Names that map to the same slug collapse into one tag.
    pub async fn execute(
        &self,
        group_id: GroupId,
        names: &[String],
    ) -> Result<Vec<Tag>, RecipesServiceError> {
        let mut resolved: Vec<Tag> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.trim();
            let slug = slugify(name).map_err(|_| RecipesServiceError::InvalidTagName)?;
            if resolved.iter().any(|t| t.slug == slug) {
                continue;
            }
            resolved.push(self.tags.get_or_create(group_id, name, &slug).await?);
        }
        Ok(resolved)
    }
}

// ── ListTags ─────────────────────────────────────────────────────────────────

pub struct ListTagsUseCase<T: TagRepository> {
    pub tags: T,
}

impl<T: TagRepository> ListTagsUseCase<T> {
    pub async fn execute(&self, group_id: GroupId) -> Result<Vec<Tag>, RecipesServiceError> {
        self.tags.list(group_id).await
    }
}

// ── GetTag ───────────────────────────────────────────────────────────────────

pub struct GetTagUseCase<T: TagRepository> {
    pub tags: T,
}

impl<T: TagRepository> GetTagUseCase<T> {
    pub async fn execute(
        &self,
        group_id: GroupId,
        slug: &str,
    ) -> Result<TagDetail, RecipesServiceError> {
        let tag = self
            .tags
            .find_by_slug(group_id, slug)
            .await?
            .ok_or(RecipesServiceError::TagNotFound)?;
        let recipes = self.tags.list_recipes(tag.id).await?;
        Ok(TagDetail { tag, recipes })
    }
}
