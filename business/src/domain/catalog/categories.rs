use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::CatalogError;
use super::query::ALL_CATEGORIES;
use crate::domain::product::model::Product;

const ALL_DISPLAY_NAME: &str = "Todos los Productos";
const ALL_ICON: &str = "home";
const FALLBACK_ICON: &str = "sparkles";

static ACCENTED_VOWEL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new("[áéíóú]").ok());

/// How a category code is presented to shoppers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub display_name: String,
    pub icon: String,
}

/// One entry of the catalog sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    /// URL-friendly identifier derived from the category code.
    pub id: String,
    pub name: String,
    pub icon: String,
    pub count: usize,
    /// Category code as stored on products, or the `all` sentinel.
    pub category: String,
}

/// Lookup table from category code to display name and icon.
///
/// Categories are data, so codes missing from the table still show up,
/// displayed under their raw code.
#[derive(Debug, Clone)]
pub struct CategoryDirectory {
    entries: HashMap<String, CategoryInfo>,
}

impl Default for CategoryDirectory {
    fn default() -> Self {
        let entries = [
            ("Digital", "Arte Digital", "image"),
            ("Ilustración", "Ilustraciones", "palette"),
            ("Abstracto", "Arte Abstracto", "sparkles"),
            ("Retrato", "Retratos", "image"),
            ("Paisaje", "Paisajes", "image"),
            ("Otro", "Otros", "sparkles"),
        ]
        .into_iter()
        .map(|(code, name, icon)| {
            (
                code.to_string(),
                CategoryInfo {
                    display_name: name.to_string(),
                    icon: icon.to_string(),
                },
            )
        })
        .collect();

        Self { entries }
    }
}

impl CategoryDirectory {
    /// Parses a JSON object of the form `{"Digital": {"display_name": "...", "icon": "..."}}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: HashMap<String, CategoryInfo> =
            serde_json::from_str(json).map_err(|_| CatalogError::InvalidCategoryDirectory)?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, code: &str) -> CategoryInfo {
        self.entries.get(code).cloned().unwrap_or_else(|| CategoryInfo {
            display_name: code.to_string(),
            icon: FALLBACK_ICON.to_string(),
        })
    }

    /// Builds the sidebar: the `all` entry first, then one entry per distinct
    /// category sorted by display name.
    pub fn summarize(&self, products: &[Product]) -> Vec<CategorySummary> {
        let codes: BTreeSet<&str> = products.iter().map(|p| p.category.as_str()).collect();

        let mut summaries: Vec<CategorySummary> = codes
            .into_iter()
            .map(|code| {
                let info = self.lookup(code);
                CategorySummary {
                    id: slugify(code),
                    name: info.display_name,
                    icon: info.icon,
                    count: products.iter().filter(|p| p.category == code).count(),
                    category: code.to_string(),
                }
            })
            .collect();

        summaries.sort_by(|a, b| {
            fold_accents(&a.name.to_lowercase())
                .cmp(&fold_accents(&b.name.to_lowercase()))
                .then_with(|| a.name.cmp(&b.name))
        });

        let mut sidebar = Vec::with_capacity(summaries.len() + 1);
        sidebar.push(CategorySummary {
            id: ALL_CATEGORIES.to_string(),
            name: ALL_DISPLAY_NAME.to_string(),
            icon: ALL_ICON.to_string(),
            count: products.len(),
            category: ALL_CATEGORIES.to_string(),
        });
        sidebar.extend(summaries);
        sidebar
    }
}

/// Lowercases a category code and strips acute accents from vowels.
pub fn slugify(code: &str) -> String {
    fold_accents(&code.to_lowercase())
}

fn fold_accents(value: &str) -> String {
    ACCENTED_VOWEL
        .as_ref()
        .map(|re| {
            re.replace_all(value, |caps: &regex::Captures<'_>| match &caps[0] {
                "á" => "a",
                "é" => "e",
                "í" => "i",
                "ó" => "o",
                _ => "u",
            })
            .into_owned()
        })
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::product;

    fn in_category(name: &str, category: &str) -> Product {
        let mut p = product(name, 10.0);
        p.category = category.to_string();
        p
    }

    #[test]
    fn should_slugify_accented_codes() {
        assert_eq!(slugify("Ilustración"), "ilustracion");
        assert_eq!(slugify("Digital"), "digital");
    }

    #[test]
    fn should_fall_back_to_raw_code_when_category_unknown() {
        let directory = CategoryDirectory::default();

        let info = directory.lookup("Escultura");

        assert_eq!(info.display_name, "Escultura");
        assert_eq!(info.icon, "sparkles");
    }

    #[test]
    fn should_put_all_first_and_sort_by_display_name() {
        let directory = CategoryDirectory::default();
        let products = vec![
            in_category("Retrato Expresivo", "Retrato"),
            in_category("Paisaje Abstracto Digital", "Digital"),
            in_category("Ilustración Botánica", "Ilustración"),
            in_category("Arte Conceptual Moderno", "Digital"),
            in_category("Composición Geométrica", "Abstracto"),
        ];

        let sidebar = directory.summarize(&products);

        let names: Vec<&str> = sidebar.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Todos los Productos",
                "Arte Abstracto",
                "Arte Digital",
                "Ilustraciones",
                "Retratos"
            ]
        );
        assert_eq!(sidebar[0].count, 5);
        assert_eq!(sidebar[2].count, 2);
        assert_eq!(sidebar[3].id, "ilustracion");
        assert_eq!(sidebar[3].category, "Ilustración");
    }

    #[test]
    fn should_return_only_all_entry_when_no_products() {
        let sidebar = CategoryDirectory::default().summarize(&[]);

        assert_eq!(sidebar.len(), 1);
        assert_eq!(sidebar[0].category, "all");
        assert_eq!(sidebar[0].count, 0);
    }

    #[test]
    fn should_load_directory_from_json() {
        let directory = CategoryDirectory::from_json(
            r#"{"Escultura": {"display_name": "Esculturas", "icon": "box"}}"#,
        )
        .unwrap();

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.lookup("Escultura").display_name, "Esculturas");
    }

    #[test]
    fn should_reject_directory_when_json_malformed() {
        let result = CategoryDirectory::from_json("[\"Digital\"]");

        assert!(matches!(
            result.unwrap_err(),
            CatalogError::InvalidCategoryDirectory
        ));
    }
}
