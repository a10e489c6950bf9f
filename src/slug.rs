//! Slug derivation for post identifiers.
//!
//! The slug is the join key between the storage bucket and the posts table.
//! `normalize` is used everywhere a bucket object name or user input has to
//! be compared against a slug; `slug_from_path` is used only at publish time
//! when the front matter carries no explicit `slug` override.

use std::path::Path;

/// Strips directories and the final extension, leaving the bare identifier.
///
/// `"a/b/my-post.md"`, `"my-post.md"` and `"my-post"` all normalize to
/// `"my-post"`. Degenerate inputs with no base name (`""`, `"/"`, `".."`)
/// normalize to the empty string.
pub fn normalize(input: &str) -> String {
    Path::new(input)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Publish-time slug for a file path: the normalized base name, lowercased
/// with non-alphanumeric runs collapsed into hyphens.
pub fn slug_from_path(path: &str) -> String {
    slug::slugify(normalize(path))
}
