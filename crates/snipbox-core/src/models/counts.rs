use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::{Category, CategoryFilter};
use super::snippet::Snippet;

/// Number of snippets per filter, shown next to each filter button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryCounts {
    pub all: usize,
    pub php: usize,
    pub html: usize,
    pub css: usize,
}

impl CategoryCounts {
    pub fn from_snippets<'a>(snippets: impl IntoIterator<Item = &'a Snippet>) -> Self {
        let mut counts = CategoryCounts::default();
        for snippet in snippets {
            counts.all += 1;
            match snippet.category {
                Category::Php => counts.php += 1,
                Category::Html => counts.html += 1,
                Category::Css => counts.css += 1,
            }
        }
        counts
    }

    pub fn get(&self, filter: CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.all,
            CategoryFilter::Php => self.php,
            CategoryFilter::Html => self.html,
            CategoryFilter::Css => self.css,
        }
    }
}
