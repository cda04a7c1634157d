//! # Name Inflection
//!
//! Rails-style name derivation for the Rust side of the engine. The Rails
//! engine resolves entities by conventional class names (`posts` tracks the
//! `Post` model through `PostsController`), so the registry here has to
//! derive the same names from the same inputs.
//!
//! Only the last underscored segment is singularized, matching
//! `ActiveSupport`'s `classify`: `posts_controller` keeps its plural prefix
//! and becomes `PostsController`, while `posts` alone becomes `Post`.

use heck::ToUpperCamelCase;

/// Derive a conventional entity class name from an underscored name.
///
/// ```
/// use impressionist_core::utils::inflect::classify;
///
/// assert_eq!(classify("posts"), "Post");
/// assert_eq!(classify("categories"), "Category");
/// assert_eq!(classify("posts_controller"), "PostsController");
/// ```
pub fn classify(name: &str) -> String {
    singularize_last_segment(name).to_upper_camel_case()
}

fn singularize_last_segment(name: &str) -> String {
    match name.rsplit_once('_') {
        Some((prefix, last)) => format!("{prefix}_{}", singularize(last)),
        None => singularize(name),
    }
}

/// Singularize one English word with the handful of rules the conventional
/// Rails model names need. Not a full inflector: irregular nouns are out of
/// scope, names that hit them should pass an explicit `class_name` instead.
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    for suffix in ["ses", "xes", "zes", "ches", "shes"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{stem}{}", &suffix[..suffix.len() - 2]);
        }
    }
    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}
