//! # Product Gateway
//!
//! A small HTTP backend that fetches a product catalog from a remote JSON
//! feed, caches it in process memory, and serves filtered, annotated views
//! of it: price range, size set, ranked keywords, and substring
//! highlighting.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌───────────────┐   ┌─────────────┐
//! │  Upstream    │──▶│ CatalogCache  │──▶│  Aggregate   │
//! │  JSON feed   │   │ populate once │   │  + Filter    │
//! └──────────────┘   └───────┬───────┘   └──────┬──────┘
//!                            │                  │
//!                            ▼                  ▼
//!                     ┌────────────┐     ┌────────────┐
//!                     │    CLI     │     │    HTTP    │
//!                     │   (pgw)    │     │  /filter   │
//!                     └────────────┘     └────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! pgw source                    # check the upstream feed
//! pgw facets                    # print catalog-wide facets
//! pgw serve                     # start the HTTP server
//! curl 'localhost:7332/filter?maxPrice=10&size=small&highlight=green'
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`source`] | Upstream catalog fetch |
//! | [`cache`] | Typed populate-once cache |
//! | [`aggregate`] | Facet computations |
//! | [`filter`] | Filtering and highlighting |
//! | [`service`] | Request orchestration |
//! | [`server`] | HTTP server |
//! | [`report`] | Console reports |

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod filter;
pub mod models;
pub mod report;
pub mod server;
pub mod service;
pub mod source;
