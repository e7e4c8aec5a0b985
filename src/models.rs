//! Core data models for the product gateway.
//!
//! These types represent the products, queries, and facet summaries that flow
//! through the fetch, aggregation, and filtering pipeline. Wire shapes are
//! camelCase to match both the upstream feed and the public API.

use serde::{Deserialize, Serialize};

/// A single catalog product as served by the upstream feed.
///
/// Products are immutable once fetched; highlighting produces a modified copy
/// and never touches the cached original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: u32,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// Wire envelope returned by the upstream catalog feed.
///
/// The `products` field may be absent or null, which reads as an empty
/// catalog. The `apiKeys` block is decoded for wire fidelity but nothing in
/// the pipeline consumes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEnvelope {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
    #[serde(default)]
    pub api_keys: Option<ApiKeys>,
}

/// Upstream feed credentials carried alongside the product list.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeys {
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

/// Query parameters accepted by `GET /filter`.
///
/// A missing `max_price` means no upper bound, and any bound ≤ 0 is treated
/// as no constraint at all. `highlight` is a comma/space/semicolon/period
/// separated list of terms to wrap in the filtered descriptions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub max_price: Option<i64>,
    pub min_price: Option<i64>,
    pub size: Option<String>,
    pub highlight: Option<String>,
}

/// The active price range echoed back with a response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

/// Facet summary describing the whole catalog, not the filtered subset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterFacets {
    pub min_price: i64,
    pub max_price: i64,
    pub sizes: Vec<String>,
    pub keywords: Vec<String>,
}

/// Response body for `GET /filter`: the filtered (and possibly highlighted)
/// products plus the catalog-wide facets.
#[derive(Debug, Clone, Serialize)]
pub struct FilterResponse {
    pub products: Vec<Product>,
    pub filter: FilterFacets,
}
