use serde::{Deserialize, Serialize};
use snipbox_core::models::category::Category;
use snipbox_core::models::snippet::NewSnippet;

use crate::error::FormError;

/// Field values of the creation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetForm {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub code: String,
}

impl Default for SnippetForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: Category::Php,
            code: String::new(),
        }
    }
}

impl SnippetForm {
    /// Title and code must contain something other than whitespace. Values
    /// are passed on as typed, not trimmed.
    pub fn validate(&self) -> Result<NewSnippet, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::MissingTitle);
        }
        if self.code.trim().is_empty() {
            return Err(FormError::MissingCode);
        }
        Ok(NewSnippet {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            code: self.code.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
