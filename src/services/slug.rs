use slug::slugify;

pub const MAX_SLUG_LEN: usize = 200;

/// Derive a URL-safe slug from a title. Lowercasing, transliteration, and
/// separator collapsing are delegated to the `slug` crate.
pub fn generate_slug(title: &str) -> String {
    slugify(title)
}

pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > MAX_SLUG_LEN {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
