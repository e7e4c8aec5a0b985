//! Console reports for the `source` and `facets` commands.
//!
//! Both commands fetch straight from the upstream rather than through the
//! cache: they exist to answer "what would a fresh process see right now".

use anyhow::Result;

use crate::aggregate;
use crate::config::Config;
use crate::source::{CatalogSource, HttpCatalogSource};

/// Run the source command: check upstream availability and print a summary.
pub async fn run_source(config: &Config) -> Result<()> {
    let source = HttpCatalogSource::new(&config.upstream)?;

    println!("{:<56} {:<14} PRODUCTS", "UPSTREAM", "STATUS");
    match source.fetch().await {
        Ok(products) => {
            println!("{:<56} {:<14} {}", config.upstream.url, "OK", products.len());
            Ok(())
        }
        Err(err) => {
            println!("{:<56} {:<14} -", config.upstream.url, "UNAVAILABLE");
            Err(err.into())
        }
    }
}

/// Run the facets command: fetch the catalog and print the derived facets.
pub async fn run_facets(config: &Config) -> Result<()> {
    let source = HttpCatalogSource::new(&config.upstream)?;
    let products = source.fetch().await?;

    let sizes = aggregate::size_set(&products);
    let keywords = aggregate::keyword_list(&products);

    println!("Product Gateway — Catalog Facets");
    println!("================================");
    println!();
    println!("  Upstream:  {}", config.upstream.url);
    println!("  Products:  {}", products.len());
    println!("  Sizes:     {}", join_or_dash(&sizes));
    println!("  Keywords:  {}", join_or_dash(&keywords));
    println!();

    Ok(())
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
