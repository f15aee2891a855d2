use serde::Serialize;
use snipbox_core::models::category::CategoryFilter;

/// Placeholder shown when the active filter selects nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: String,
    pub description: String,
    /// Whether to offer a shortcut to the creation form.
    pub offer_add: bool,
}

impl EmptyState {
    pub fn for_filter(filter: CategoryFilter) -> Self {
        match filter.category() {
            None => Self {
                title: "No snippets found".to_string(),
                description: "Start by adding your first code snippet!".to_string(),
                offer_add: true,
            },
            Some(category) => Self {
                title: format!("No {category} snippets"),
                description: format!("You don't have any snippets in the {category} category yet."),
                offer_add: true,
            },
        }
    }
}
