//! Product filtering and description highlighting.
//!
//! [`apply_filter`] narrows a catalog snapshot by price bound and size label;
//! [`apply_highlights`] wraps matched substrings in the surviving products'
//! descriptions. Both leave the shared catalog untouched: the unfiltered
//! paths hand back the same allocation, and highlighting works on copies.

use std::sync::Arc;

use crate::aggregate::WORD_SEPARATORS;
use crate::models::{Product, ProductQuery};

/// Applies the query's price and size constraints to the catalog.
///
/// A missing price bound, or a bound ≤ 0, is no constraint. A blank size is
/// no constraint; a present size must match one of the product's labels
/// exactly. With no effective constraint the input list is returned as-is,
/// without copying.
pub fn apply_filter(catalog: &Arc<Vec<Product>>, query: &ProductQuery) -> Arc<Vec<Product>> {
    let size = query
        .size
        .as_deref()
        .filter(|label| !label.trim().is_empty());

    let filtered: Vec<Product> = match (query.max_price, size) {
        (None, None) => return Arc::clone(catalog),
        (Some(max), None) if max <= 0 => return Arc::clone(catalog),
        (Some(max), None) => catalog
            .iter()
            .filter(|p| i64::from(p.price) <= max)
            .cloned()
            .collect(),
        (None, Some(label)) => catalog
            .iter()
            .filter(|p| p.sizes.iter().any(|s| s == label))
            .cloned()
            .collect(),
        (Some(max), Some(label)) if max <= 0 => catalog
            .iter()
            .filter(|p| p.sizes.iter().any(|s| s == label))
            .cloned()
            .collect(),
        (Some(max), Some(label)) => catalog
            .iter()
            .filter(|p| i64::from(p.price) <= max && p.sizes.iter().any(|s| s == label))
            .cloned()
            .collect(),
    };

    Arc::new(filtered)
}

/// Wraps every occurrence of each highlight term in `<em>` markup.
///
/// Terms are split on the same separators as keyword tokenization and applied
/// one after another to the progressively rewritten description, so a later
/// term can match text produced by an earlier wrap. Matching is a plain
/// case-sensitive substring replace. Title, price, and sizes are carried over
/// unchanged; a blank term string returns the input list as-is.
pub fn apply_highlights(products: &Arc<Vec<Product>>, terms: Option<&str>) -> Arc<Vec<Product>> {
    let raw = terms.unwrap_or_default();
    if raw.trim().is_empty() {
        return Arc::clone(products);
    }

    let terms: Vec<&str> = raw
        .split(WORD_SEPARATORS)
        .filter(|t| !t.is_empty())
        .collect();
    if terms.is_empty() {
        return Arc::clone(products);
    }

    let highlighted = products
        .iter()
        .map(|product| {
            let mut description = product.description.clone();
            for term in &terms {
                description = description.replace(term, &format!("<em>{term}</em>"));
            }
            Product {
                description,
                ..product.clone()
            }
        })
        .collect();

    Arc::new(highlighted)
}
