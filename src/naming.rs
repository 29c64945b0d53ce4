//! Deterministic names for generated directories and documents.
//!
//! Every generated entry follows the `NN-slug` convention: a two-digit,
//! 1-based rank followed by the slug of the node title.
//! - `"Getting Started"` at rank 1 → `01-getting-started`
//! - `"Data & Models"` at rank 3 → `03-data-and-models.mdx`

/// Converts a human title into its identifier form.
///
/// The title is lower-cased, spaces become hyphens and `&` becomes `and`.
/// No other characters are touched.
pub fn slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "-").replace('&', "and")
}

/// Builds `"{rank:02}-{slug(title)}{extension}"`.
pub fn numbered_name(rank: usize, title: &str, extension: &str) -> String {
    format!("{:02}-{}{}", rank, slug(title), extension)
}
