use poem_openapi::Object;

use business::domain::catalog::categories::CategorySummary;
use business::domain::catalog::query::{FilterTag, SortKey};

/// Sidebar entry. The first entry is always the `all` pseudo-category.
#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    /// URL-friendly slug
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Number of active products in the category
    pub count: u64,
    /// Value to pass as the `category` query parameter
    pub category: String,
}

impl From<CategorySummary> for CategoryResponse {
    fn from(summary: CategorySummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            icon: summary.icon,
            count: summary.count as u64,
            category: summary.category,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct FilterOptionResponse {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl From<FilterTag> for FilterOptionResponse {
    fn from(tag: FilterTag) -> Self {
        Self {
            id: tag.to_string(),
            name: tag.label().to_string(),
            icon: tag.icon().to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SortOptionResponse {
    pub id: String,
    pub name: String,
}

impl From<SortKey> for SortOptionResponse {
    fn from(key: SortKey) -> Self {
        Self {
            id: key.to_string(),
            name: key.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct FiltersResponse {
    pub filters: Vec<FilterOptionResponse>,
    pub sort_options: Vec<SortOptionResponse>,
}
