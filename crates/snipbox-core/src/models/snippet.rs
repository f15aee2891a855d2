use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::category::Category;

/// A titled, categorized block of code text.
///
/// Immutable once created: the store only ever creates and loads snippets.
/// Serialized in camelCase (`createdAt`) to match the persisted layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Snippet {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub code: String,
    pub created_at: jiff::Timestamp,
}

/// Input for creating a snippet. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub code: String,
}

impl NewSnippet {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        code: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            code: code.into(),
        }
    }

    /// Stamp the input with an identity and creation time.
    pub fn into_snippet(self, id: Uuid, created_at: jiff::Timestamp) -> Snippet {
        Snippet {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            code: self.code,
            created_at,
        }
    }
}
