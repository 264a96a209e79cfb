//! URL slugs for recipes and tags.

/// Returned when a name contains nothing a slug can be built from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot derive a slug from {0:?}")]
pub struct EmptySlug(pub String);

/// Lowercase ASCII alphanumerics joined by single hyphens.
pub fn slugify(name: &str) -> Result<String, EmptySlug> {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        return Err(EmptySlug(name.to_owned()));
    }
    Ok(slug)
}

/// Check that a client-supplied slug is already in canonical form.
pub fn is_valid_slug(slug: &str) -> bool {
    slugify(slug).is_ok_and(|s| s == slug)
}
