//! Request orchestration.
//!
//! [`ProductService`] glues the pieces together for one filter request: load
//! the catalog through the cache, resolve the facets, filter, highlight, and
//! assemble the response. Dependencies arrive through the constructor — the
//! service owns its cache and borrows nothing global.

use std::sync::Arc;
use tracing::info;

use crate::aggregate;
use crate::cache::CatalogCache;
use crate::filter;
use crate::models::{FilterFacets, FilterResponse, PriceRange, ProductQuery};
use crate::source::{CatalogSource, SourceError};

/// Orchestrates cache lookup, facet aggregation, and filtering for one query.
pub struct ProductService {
    source: Arc<dyn CatalogSource>,
    cache: CatalogCache,
}

impl ProductService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            cache: CatalogCache::new(),
        }
    }

    /// Handles one filter request end to end.
    ///
    /// The returned facets always describe the entire catalog; only the
    /// product list reflects the query's constraints. Upstream failures
    /// propagate untouched so the HTTP layer can map them.
    pub async fn filter(&self, query: &ProductQuery) -> Result<FilterResponse, SourceError> {
        info!(?query, "handling product filter request");

        let catalog = self.cache.catalog(self.source.as_ref()).await?;

        let min_price = query.min_price.unwrap_or(0);
        let max_price = query.max_price.unwrap_or(0);
        let price_range = match aggregate::requested_price_range(min_price, max_price) {
            Some(range) => *self.cache.price_range.get_or_insert_with(|| range).await,
            None => PriceRange::default(),
        };

        let sizes = self
            .cache
            .sizes
            .get_or_insert_with(|| aggregate::size_set(&catalog))
            .await;
        let keywords = self
            .cache
            .keywords
            .get_or_insert_with(|| aggregate::keyword_list(&catalog))
            .await;

        let filtered = filter::apply_filter(&catalog, query);
        let highlighted = filter::apply_highlights(&filtered, query.highlight.as_deref());

        Ok(FilterResponse {
            products: (*highlighted).clone(),
            filter: FilterFacets {
                min_price: price_range.min,
                max_price: price_range.max,
                sizes: (*sizes).clone(),
                keywords: (*keywords).clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::models::Product;

    struct StaticSource {
        calls: AtomicUsize,
        products: Vec<Product>,
    }

    impl StaticSource {
        fn new(products: Vec<Product>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                products,
            }
        }
    }

    #[async_trait]
    impl CatalogSource for StaticSource {
        async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.products.clone())
        }
    }

    /// Fails on the first call, succeeds afterwards.
    struct FlakySource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CatalogSource for FlakySource {
        async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(SourceError::Unavailable { status: 503 })
            } else {
                Ok(trousers())
            }
        }
    }

    fn trousers() -> Vec<Product> {
        vec![
            Product {
                title: "A Red Trouser".to_string(),
                price: 10,
                sizes: vec!["small".into(), "medium".into(), "large".into()],
                description: "This trouser perfectly pairs with a green shirt.".to_string(),
            },
            Product {
                title: "A Green Trouser".to_string(),
                price: 11,
                sizes: vec!["small".into()],
                description: "This trouser perfectly pairs with a blue shirt.".to_string(),
            },
        ]
    }

    fn service() -> (Arc<StaticSource>, ProductService) {
        let source = Arc::new(StaticSource::new(trousers()));
        let service = ProductService::new(source.clone());
        (source, service)
    }

    #[tokio::test]
    async fn test_no_filter_returns_all_products_with_facets() {
        let (_, service) = service();

        let response = service.filter(&ProductQuery::default()).await.unwrap();

        assert_eq!(response.products, trousers());
        assert_eq!(response.filter.min_price, 0);
        assert_eq!(response.filter.max_price, 0);
        assert_eq!(response.filter.sizes, vec!["small", "medium", "large"]);
        assert_eq!(
            response.filter.keywords,
            vec!["blue", "green", "trouser", "with"]
        );
    }

    #[tokio::test]
    async fn test_catalog_fetched_once_across_requests() {
        let (source, service) = service();

        service.filter(&ProductQuery::default()).await.unwrap();
        service.filter(&ProductQuery::default()).await.unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_price_range_echoes_request_bounds() {
        let (_, service) = service();

        let query = ProductQuery {
            min_price: Some(10),
            max_price: Some(25),
            ..ProductQuery::default()
        };
        let response = service.filter(&query).await.unwrap();

        assert_eq!(response.filter.min_price, 10);
        assert_eq!(response.filter.max_price, 25);
    }

    #[tokio::test]
    async fn test_first_established_price_range_wins() {
        let (_, service) = service();

        let first = ProductQuery {
            min_price: Some(10),
            max_price: Some(25),
            ..ProductQuery::default()
        };
        service.filter(&first).await.unwrap();

        let second = ProductQuery {
            min_price: Some(5),
            max_price: Some(7),
            ..ProductQuery::default()
        };
        let response = service.filter(&second).await.unwrap();

        assert_eq!(response.filter.min_price, 10);
        assert_eq!(response.filter.max_price, 25);
    }

    #[tokio::test]
    async fn test_missing_or_zero_bounds_yield_empty_range() {
        let (_, service) = service();

        let query = ProductQuery {
            min_price: Some(0),
            max_price: Some(0),
            ..ProductQuery::default()
        };
        let response = service.filter(&query).await.unwrap();

        assert_eq!(response.filter.min_price, 0);
        assert_eq!(response.filter.max_price, 0);
    }

    #[tokio::test]
    async fn test_filter_and_highlight_combined() {
        let (_, service) = service();

        let query = ProductQuery {
            max_price: Some(10),
            size: Some("small".to_string()),
            highlight: Some("red,green".to_string()),
            ..ProductQuery::default()
        };
        let response = service.filter(&query).await.unwrap();

        assert_eq!(response.products.len(), 1);
        assert_eq!(response.products[0].title, "A Red Trouser");
        assert!(response.products[0].description.contains("<em>green</em>"));
        // Facets still describe the whole catalog.
        assert_eq!(response.filter.sizes, vec!["small", "medium", "large"]);
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates_then_retries() {
        let source = Arc::new(FlakySource {
            calls: AtomicUsize::new(0),
        });
        let service = ProductService::new(source.clone());

        let err = service.filter(&ProductQuery::default()).await.unwrap_err();
        assert!(matches!(err, SourceError::Unavailable { status: 503 }));

        // The failed fetch stored nothing; the next request retries.
        let response = service.filter(&ProductQuery::default()).await.unwrap();
        assert_eq!(response.products.len(), 2);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_catalog_is_data_not_error() {
        let source = Arc::new(StaticSource::new(vec![]));
        let service = ProductService::new(source);

        let response = service.filter(&ProductQuery::default()).await.unwrap();
        assert!(response.products.is_empty());
        assert!(response.filter.sizes.is_empty());
        assert!(response.filter.keywords.is_empty());
    }
}
