use std::collections::BTreeSet;

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Wire sentinel that selects every category.
pub const ALL_CATEGORIES: &str = "all";

/// Which category the catalog is narrowed to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelector {
    #[default]
    All,
    /// Case-sensitive match against the stored category code.
    Exact(String),
}

impl From<&str> for CategorySelector {
    /// Blank input and the `all` sentinel select everything. Any other value
    /// is kept verbatim, surrounding whitespace included.
    fn from(value: &str) -> Self {
        if value.trim().is_empty() || value == ALL_CATEGORIES {
            CategorySelector::All
        } else {
            CategorySelector::Exact(value.to_string())
        }
    }
}

impl std::fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategorySelector::All => write!(f, "{ALL_CATEGORIES}"),
            CategorySelector::Exact(category) => write!(f, "{category}"),
        }
    }
}

/// Toggle filters shown in the catalog sidebar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum FilterTag {
    /// Created within the last 30 days.
    New,
    /// Has at least some reviews; also forces ordering by reviews.
    Bestseller,
    /// Has a promotional price below the base price.
    Discount,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Recent,
    PriceLow,
    PriceHigh,
    Rating,
}

impl FilterTag {
    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            FilterTag::New => "Nuevos",
            FilterTag::Bestseller => "Más Vendidos",
            FilterTag::Discount => "En Descuento",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FilterTag::New => "sparkles",
            FilterTag::Bestseller => "trending-up",
            FilterTag::Discount => "badge-percent",
        }
    }
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Recent => "Más Recientes",
            SortKey::PriceLow => "Precio: Bajo a Alto",
            SortKey::PriceHigh => "Precio: Alto a Bajo",
            SortKey::Rating => "Mejor Valorados",
        }
    }

    /// Parses a wire value, falling back to [`SortKey::Recent`] for anything unknown.
    pub fn parse_or_default(value: &str) -> Self {
        value.trim().parse().unwrap_or_default()
    }
}

/// Immutable description of what the catalog should show and in which order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySpecification {
    pub search_term: String,
    pub category: CategorySelector,
    pub filter_tags: BTreeSet<FilterTag>,
    pub sort_key: SortKey,
}

/// Raw query parameters as they arrive from a client.
#[derive(Debug, Clone, Default)]
pub struct RawQuery<'a> {
    pub search: Option<&'a str>,
    pub category: Option<&'a str>,
    /// Comma-separated filter tags.
    pub filters: Option<&'a str>,
    pub sort: Option<&'a str>,
}

impl QuerySpecification {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn in_category(mut self, category: impl Into<CategorySelector>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_tag(mut self, tag: FilterTag) -> Self {
        self.filter_tags.insert(tag);
        self
    }

    pub fn sorted_by(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn has_tag(&self, tag: FilterTag) -> bool {
        self.filter_tags.contains(&tag)
    }

    /// Builds a specification from client parameters.
    ///
    /// Unknown filter tags are skipped and returned alongside the
    /// specification so the caller can report them.
    pub fn from_raw(raw: RawQuery<'_>) -> (Self, Vec<String>) {
        let mut specification = QuerySpecification {
            search_term: raw.search.unwrap_or_default().to_string(),
            category: raw.category.map(CategorySelector::from).unwrap_or_default(),
            sort_key: raw.sort.map(SortKey::parse_or_default).unwrap_or_default(),
            ..Default::default()
        };

        let mut unknown = Vec::new();
        for tag in raw
            .filters
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            match tag.parse::<FilterTag>() {
                Ok(tag) => {
                    specification.filter_tags.insert(tag);
                }
                Err(_) => unknown.push(tag.to_string()),
            }
        }

        (specification, unknown)
    }
}

impl From<String> for CategorySelector {
    fn from(value: String) -> Self {
        CategorySelector::from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn should_treat_all_sentinel_and_blank_as_every_category() {
        assert_eq!(CategorySelector::from("all"), CategorySelector::All);
        assert_eq!(CategorySelector::from("  "), CategorySelector::All);
        assert_eq!(
            CategorySelector::from("Digital"),
            CategorySelector::Exact("Digital".to_string())
        );
    }

    #[test]
    fn should_keep_surrounding_whitespace_when_category_not_blank() {
        assert_eq!(
            CategorySelector::from(" Digital"),
            CategorySelector::Exact(" Digital".to_string())
        );
    }

    #[test]
    fn should_parse_sort_keys_in_kebab_case() {
        assert_eq!(SortKey::parse_or_default("price-low"), SortKey::PriceLow);
        assert_eq!(SortKey::parse_or_default("price-high"), SortKey::PriceHigh);
        assert_eq!(SortKey::parse_or_default("rating"), SortKey::Rating);
        assert_eq!(SortKey::PriceHigh.to_string(), "price-high");
    }

    #[test]
    fn should_fall_back_to_recent_when_sort_key_unknown() {
        assert_eq!(SortKey::parse_or_default("cheapest"), SortKey::Recent);
        assert_eq!(SortKey::parse_or_default(""), SortKey::Recent);
    }

    #[test]
    fn should_list_every_filter_tag() {
        let tags: Vec<String> = FilterTag::iter().map(|t| t.to_string()).collect();

        assert_eq!(tags, vec!["new", "bestseller", "discount"]);
        assert_eq!(FilterTag::Bestseller.label(), "Más Vendidos");
    }

    #[test]
    fn should_build_specification_from_raw_query_when_tags_known() {
        let (specification, unknown) = QuerySpecification::from_raw(RawQuery {
            search: Some("paisaje"),
            category: Some("Digital"),
            filters: Some("new, discount"),
            sort: Some("rating"),
        });

        assert!(unknown.is_empty());
        assert_eq!(specification.search_term, "paisaje");
        assert_eq!(specification.category, CategorySelector::Exact("Digital".to_string()));
        assert!(specification.has_tag(FilterTag::New));
        assert!(specification.has_tag(FilterTag::Discount));
        assert!(!specification.has_tag(FilterTag::Bestseller));
        assert_eq!(specification.sort_key, SortKey::Rating);
    }

    #[test]
    fn should_report_unknown_tags_when_building_specification() {
        let (specification, unknown) = QuerySpecification::from_raw(RawQuery {
            filters: Some("bestseller,featured,,"),
            ..Default::default()
        });

        assert_eq!(unknown, vec!["featured".to_string()]);
        assert_eq!(specification.filter_tags.len(), 1);
        assert_eq!(specification.category, CategorySelector::All);
        assert_eq!(specification.sort_key, SortKey::Recent);
    }
}
