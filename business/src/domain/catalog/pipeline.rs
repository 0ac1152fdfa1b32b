//! Catalog query pipeline.
//!
//! Turns a product list and a [`QuerySpecification`] into the ordered subset
//! shown to shoppers. Stages run in a fixed order: search, category, tag
//! filters, then exactly one ordering. The input slice is never reordered;
//! the result borrows from it.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};

use super::query::{CategorySelector, FilterTag, QuerySpecification, SortKey};
use crate::domain::product::model::Product;

/// How far back a product's creation date may lie for it to count as new.
pub const NEW_PRODUCT_WINDOW_DAYS: i64 = 30;

/// Runs the pipeline, evaluating date-based filters at the current instant.
pub fn query<'a>(products: &'a [Product], specification: &QuerySpecification) -> Vec<&'a Product> {
    query_at(products, specification, Utc::now())
}

/// Runs the pipeline with an explicit evaluation instant.
pub fn query_at<'a>(
    products: &'a [Product],
    specification: &QuerySpecification,
    now: DateTime<Utc>,
) -> Vec<&'a Product> {
    let term = specification.search_term.trim().to_lowercase();
    let new_since = now - Duration::days(NEW_PRODUCT_WINDOW_DAYS);

    let mut selected: Vec<&Product> = products
        .iter()
        .filter(|p| term.is_empty() || matches_search(p, &term))
        .filter(|p| matches_category(p, &specification.category))
        .filter(|p| {
            specification.filter_tags
                .iter()
                .all(|tag| matches_tag(p, *tag, new_since))
        })
        .collect();

    // `sort_by` is stable: ties keep their input order.
    if specification.has_tag(FilterTag::Bestseller) {
        selected.sort_by(|a, b| compare_numbers(b.reviews, a.reviews));
    } else {
        match specification.sort_key {
            SortKey::PriceLow => selected.sort_by(|a, b| compare_numbers(a.price, b.price)),
            SortKey::PriceHigh => selected.sort_by(|a, b| compare_numbers(b.price, a.price)),
            SortKey::Rating => selected.sort_by(|a, b| compare_numbers(b.rating, a.rating)),
            SortKey::Recent => selected.sort_by_key(|p| std::cmp::Reverse(created_or_epoch(p))),
        }
    }

    selected
}

/// `term` must already be trimmed and lowercased.
fn matches_search(product: &Product, term: &str) -> bool {
    product.name.to_lowercase().contains(term) || product.category.to_lowercase().contains(term)
}

fn matches_category(product: &Product, selector: &CategorySelector) -> bool {
    match selector {
        CategorySelector::All => true,
        CategorySelector::Exact(category) => product.category == *category,
    }
}

fn matches_tag(product: &Product, tag: FilterTag, new_since: DateTime<Utc>) -> bool {
    match tag {
        FilterTag::New => product.created_at.is_some_and(|at| at >= new_since),
        FilterTag::Bestseller => product.reviews > 0.0,
        FilterTag::Discount => product
            .discount_price
            .is_some_and(|discount| discount < product.price),
    }
}

fn created_or_epoch(product: &Product) -> DateTime<Utc> {
    product.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Malformed (non-finite) values order as zero.
fn ordering_value(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

fn compare_numbers(a: f64, b: f64) -> Ordering {
    ordering_value(a)
        .partial_cmp(&ordering_value(b))
        .unwrap_or(Ordering::Equal)
}
