//! Slug to title conversion.

/// Characters that separate the words of a slug.
const SEPARATORS: [char; 2] = ['-', '_'];

/// Convert a slug to a display title.
///
/// Splits on `-` and `_`, joins with spaces, then capitalizes the whole
/// string. Only the very first character is uppercased.
/// "getting-started" -> "Getting started"
/// "API_reference" -> "Api reference"
/// "a__b" -> "A  b"
pub fn titleize_slug(slug: &str) -> String {
    capitalize(&split_slug(slug).collect::<Vec<_>>().join(" "))
}

/// Split a slug into its segments.
///
/// Empty segments are kept, so `"a--b"` yields `"a"`, `""`, `"b"`.
pub fn split_slug(slug: &str) -> impl Iterator<Item = &str> {
    slug.split(SEPARATORS)
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}
