use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The language a snippet is tagged with. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum Category {
    Php,
    Html,
    Css,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 3] = [Category::Php, Category::Html, Category::Css];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Php => "PHP",
            Category::Html => "HTML",
            Category::Css => "CSS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidCategory(s.to_string()))
    }
}

/// View-side category selection. `All` is the unfiltered case.
///
/// Never persisted; it only decides which part of the collection is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum CategoryFilter {
    #[default]
    All,
    Php,
    Html,
    Css,
}

impl CategoryFilter {
    /// `All` followed by one filter per category, in display order.
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Php,
        CategoryFilter::Html,
        CategoryFilter::Css,
    ];

    /// The single category this filter selects, or `None` for `All`.
    pub fn category(self) -> Option<Category> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Php => Some(Category::Php),
            CategoryFilter::Html => Some(Category::Html),
            CategoryFilter::Css => Some(Category::Css),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        self.category().is_none_or(|wanted| wanted == category)
    }

    pub fn as_str(self) -> &'static str {
        match self.category() {
            Some(category) => category.as_str(),
            None => "ALL",
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::Php => CategoryFilter::Php,
            Category::Html => CategoryFilter::Html,
            Category::Css => CategoryFilter::Css,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("ALL") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::from)
    }
}
