//! File-system-safe slugs for detail page filenames.

/// Derive a slug from a company name.
///
/// Lowercases, collapses whitespace runs to `_`, and keeps only ASCII
/// alphanumerics, `_` and `-`. Two names differing only in case or
/// punctuation collide; the builder's policy for collisions is last write
/// wins at the shared filename.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_sep = true;

    for c in name.trim().to_lowercase().chars() {
        if c.is_whitespace() {
            if !last_was_sep {
                slug.push('_');
                last_was_sep = true;
            }
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
            last_was_sep = false;
        }
    }

    while slug.ends_with('_') {
        slug.pop();
    }

    slug
}
