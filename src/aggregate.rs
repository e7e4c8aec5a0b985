//! Catalog facet computations.
//!
//! Pure functions over a catalog snapshot: the active price range, the
//! distinct size set, and the ranked keyword list. The service layer caches
//! their results; nothing here performs I/O.

use std::collections::{HashMap, HashSet};

use crate::models::{PriceRange, Product};

/// Separators used to tokenize descriptions and to split highlight terms.
pub const WORD_SEPARATORS: &[char] = &[' ', '.', ';', ','];

/// The active price range for a response.
///
/// When both requested bounds are positive the caller's bounds are echoed
/// back verbatim; otherwise there is no active range. The range is never
/// derived from the catalog itself — callers cache the first established
/// value and reuse it for every later request.
pub fn requested_price_range(min: i64, max: i64) -> Option<PriceRange> {
    (min > 0 && max > 0).then_some(PriceRange { min, max })
}

/// Distinct size labels across the catalog, in first-seen order.
pub fn size_set(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut sizes = Vec::new();
    for product in products {
        for size in &product.sizes {
            if seen.insert(size.as_str()) {
                sizes.push(size.clone());
            }
        }
    }
    sizes
}

/// The ten most used description words after skipping the top five,
/// re-sorted alphabetically.
///
/// Tokens are counted case-sensitively. Groups are ranked by descending
/// count with ascending token as the tie-break, the first five groups are
/// skipped, the next ten survive, and the surviving keys are returned in
/// ascending alphabetical order.
pub fn keyword_list(products: &[Product]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for product in products {
        for word in product
            .description
            .split(WORD_SEPARATORS)
            .filter(|w| !w.is_empty())
        {
            *counts.entry(word).or_default() += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let mut keywords: Vec<String> = ranked
        .into_iter()
        .skip(5)
        .take(10)
        .map(|(word, _)| word.to_string())
        .collect();
    keywords.sort();
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: u32, sizes: &[&str], description: &str) -> Product {
        Product {
            title: String::new(),
            price,
            sizes: sizes.iter().map(|s| s.to_string()).collect(),
            description: description.to_string(),
        }
    }

    fn trousers() -> Vec<Product> {
        vec![
            product(
                10,
                &["small", "medium", "large"],
                "This trouser perfectly pairs with a green shirt.",
            ),
            product(
                11,
                &["small"],
                "This trouser perfectly pairs with a blue shirt.",
            ),
        ]
    }

    #[test]
    fn test_price_range_echoes_positive_bounds() {
        assert_eq!(
            requested_price_range(10, 25),
            Some(PriceRange { min: 10, max: 25 })
        );
    }

    #[test]
    fn test_price_range_absent_without_both_bounds() {
        assert_eq!(requested_price_range(0, 0), None);
        assert_eq!(requested_price_range(0, 25), None);
        assert_eq!(requested_price_range(10, 0), None);
        assert_eq!(requested_price_range(-1, 25), None);
    }

    #[test]
    fn test_size_set_dedupes_in_first_seen_order() {
        assert_eq!(size_set(&trousers()), vec!["small", "medium", "large"]);
    }

    #[test]
    fn test_size_set_empty_catalog() {
        assert!(size_set(&[]).is_empty());
    }

    #[test]
    fn test_keyword_list_skips_top_five_then_sorts() {
        // Token counts across both descriptions:
        //   This=2 trouser=2 perfectly=2 pairs=2 with=2 a=2 shirt=2
        //   blue=1 green=1
        // Ranked by (count desc, token asc): This, a, pairs, perfectly,
        // shirt, trouser, with, blue, green. Skipping the first five leaves
        // trouser, with, blue, green; alphabetical order is the result.
        assert_eq!(
            keyword_list(&trousers()),
            vec!["blue", "green", "trouser", "with"]
        );
    }

    #[test]
    fn test_keyword_list_at_most_ten() {
        // 20 distinct single-occurrence words: ranking is purely alphabetical,
        // so words 6..=15 survive and stay sorted.
        let words: Vec<String> = (b'a'..=b't').map(|c| (c as char).to_string()).collect();
        let catalog = vec![product(1, &[], &words.join(" "))];

        let keywords = keyword_list(&catalog);
        assert_eq!(keywords.len(), 10);
        assert_eq!(keywords, words[5..15].to_vec());
    }

    #[test]
    fn test_keyword_list_counts_case_sensitively() {
        let catalog = vec![product(1, &[], "Shirt shirt shirt")];
        // "shirt" (2) ranks above "Shirt" (1); with only two groups both fall
        // inside the skipped top five, leaving nothing.
        assert!(keyword_list(&catalog).is_empty());
    }

    #[test]
    fn test_keyword_list_discards_empty_tokens() {
        let catalog = vec![product(1, &[], "a,, ;; b.. c")];
        assert!(keyword_list(&catalog).len() <= 10);
        // Three distinct tokens, all within the skipped top five.
        assert!(keyword_list(&catalog).is_empty());
    }
}
