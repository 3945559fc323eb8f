use anyhow::Result;
use common::filter_products;
use tracing::{debug, info};

use crate::client::ChainClient;
use crate::report::render_products;

/// Lists products on the ledger, optionally filtered by id.
pub async fn products(client: &ChainClient, search: Option<&str>) -> Result<String> {
    let all = client.products().await?;

    let visible = match search {
        Some(query) => {
            let ids = filter_products(all.iter().map(|p| p.product_id.as_str()), query);
            debug!("Search '{}' matched {} of {} products", query, ids.len(), all.len());
            all.iter()
                .filter(|p| ids.contains(&p.product_id.as_str()))
                .cloned()
                .collect()
        }
        None => all,
    };

    if visible.is_empty() {
        info!("No products to show");
    }
    Ok(render_products(&visible))
}
