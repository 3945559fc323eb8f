//! Product listing derived from the ledger's block list.

use std::collections::HashSet;

use serde::Serialize;

use crate::{ChainResponse, ChainTransaction};

/// A tracked product with the catalog fields of the first transaction that
/// mentions it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub product_id: String,
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
}

impl ProductSummary {
    fn from_transaction(product_id: &str, tx: &ChainTransaction) -> Self {
        Self {
            product_id: product_id.to_string(),
            name: tx.product_name.clone(),
            sku: tx.product_sku.clone(),
            category: tx.product_category.clone(),
        }
    }
}

fn product_transactions(chain: &ChainResponse) -> impl Iterator<Item = (&str, &ChainTransaction)> {
    chain
        .chain
        .iter()
        .flat_map(|block| block.transactions.iter())
        .filter_map(|tx| match tx.product_id.as_deref() {
            Some(id) if !id.is_empty() => Some((id, tx)),
            _ => None,
        })
}

/// Unique product ids in the order they first appear on the chain.
pub fn unique_product_ids(chain: &ChainResponse) -> Vec<String> {
    product_summaries(chain)
        .into_iter()
        .map(|summary| summary.product_id)
        .collect()
}

/// Like [`unique_product_ids`], carrying name, SKU and category.
pub fn product_summaries(chain: &ChainResponse) -> Vec<ProductSummary> {
    let mut seen = HashSet::new();
    let mut summaries = Vec::new();

    for (id, tx) in product_transactions(chain) {
        if seen.insert(id) {
            summaries.push(ProductSummary::from_transaction(id, tx));
        }
    }

    tracing::debug!(
        "Derived {} products from {} blocks",
        summaries.len(),
        chain.chain.len()
    );
    summaries
}

/// Case-insensitive substring filter on the product id.
pub fn filter_products<'a, I>(ids: I, query: &str) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.to_lowercase();
    ids.into_iter()
        .filter(|id| id.to_lowercase().contains(&needle))
        .collect()
}

/// First eight characters of the id followed by an ellipsis.
pub fn short_label(product_id: &str) -> String {
    let prefix: String = product_id.chars().take(8).collect();
    format!("{}...", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Block;

    fn tx(product_id: Option<&str>, name: Option<&str>) -> ChainTransaction {
        ChainTransaction {
            product_id: product_id.map(str::to_string),
            product_name: name.map(str::to_string),
            ..Default::default()
        }
    }

    fn chain(blocks: Vec<Vec<ChainTransaction>>) -> ChainResponse {
        ChainResponse {
            chain: blocks
                .into_iter()
                .map(|transactions| Block { transactions, ..Default::default() })
                .collect(),
            length: None,
        }
    }

    #[test]
    fn test_unique_product_ids_first_seen_order() {
        let chain = chain(vec![
            vec![],
            vec![tx(Some("b"), None), tx(Some("a"), None), tx(Some("b"), None)],
            vec![tx(Some("c"), None), tx(Some("a"), None)],
        ]);

        assert_eq!(unique_product_ids(&chain), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_unique_product_ids_skips_missing_ids() {
        let chain = chain(vec![vec![tx(None, None), tx(Some(""), None), tx(Some("x"), None)]]);
        assert_eq!(unique_product_ids(&chain), vec!["x"]);
    }

    #[test]
    fn test_empty_chain_has_no_products() {
        assert!(unique_product_ids(&ChainResponse::default()).is_empty());
    }

    #[test]
    fn test_product_summaries_use_first_transaction() {
        let chain = chain(vec![vec![
            tx(Some("p1"), Some("Laptop")),
            tx(Some("p1"), Some("Renamed")),
            tx(Some("p2"), None),
        ]]);

        let summaries = product_summaries(&chain);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name.as_deref(), Some("Laptop"));
        assert_eq!(summaries[1].name, None);
    }

    #[test]
    fn test_filter_products_is_case_insensitive() {
        let ids = ["3F2A-aa", "b7c9-BB", "3f00-cc"];
        assert_eq!(filter_products(ids, "3f"), vec!["3F2A-aa", "3f00-cc"]);
        assert_eq!(filter_products(ids, "bb"), vec!["b7c9-BB"]);
        assert_eq!(filter_products(ids, "").len(), 3);
        assert!(filter_products(ids, "zzz").is_empty());
    }

    #[test]
    fn test_short_label() {
        assert_eq!(short_label("3f2a9c1e-77b0-4d1e-9a55-2b6f0e4d8c21"), "3f2a9c1e...");
        assert_eq!(short_label("abc"), "abc...");
    }

    struct CaptureLog(std::sync::Mutex<Vec<String>>);

    impl log::Log for CaptureLog {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            self.0.lock().unwrap().push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    static CAPTURE: CaptureLog = CaptureLog(std::sync::Mutex::new(Vec::new()));

    #[test]
    fn test_derivation_events_reach_log_facade() {
        // the dashboard only installs a `log` sink
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(log::LevelFilter::Trace);

        product_summaries(&chain(vec![vec![tx(Some("p9"), None)], vec![], vec![]]));

        let lines = CAPTURE.0.lock().unwrap();
        assert!(lines.iter().any(|l| l.contains("Derived 1 products from 3 blocks")));
    }
}
