//! Profile field types and the form-boundary list mapping.
//!
//! Skills and interests are persisted strictly as string lists. Web
//! forms, however, submit them as a single comma-separated line, so the
//! API boundary accepts either shape and normalizes to a list before
//! anything else sees the value. The mapping is two-way: `split_list`
//! on the way in, `join_list` on the way out.

use serde::Deserialize;
use utoipa::ToSchema;

/// Split a comma-separated form value into a trimmed, non-empty list.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render a list back into the comma-separated form representation.
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// List-valued form field accepted either as a JSON array or as a
/// comma-separated string.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ListInput {
    Items(Vec<String>),
    Raw(String),
}

impl ListInput {
    /// Normalize into the persisted list representation.
    pub fn into_items(self) -> Vec<String> {
        match self {
            ListInput::Items(items) => items
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            ListInput::Raw(raw) => split_list(&raw),
        }
    }
}

/// Profile fields a user may edit on their own account.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub availability: Option<String>,
    pub profile_picture_url: Option<String>,
}
