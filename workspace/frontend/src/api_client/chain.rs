use common::{ChainResponse, ProductSummary, product_summaries};

use crate::api_client;

pub async fn get_chain() -> Result<ChainResponse, String> {
    log::trace!("Fetching ledger chain");
    api_client::get::<ChainResponse>("/chain").await
}

/// Products tracked on the ledger, in first-seen order.
pub async fn get_products() -> Result<Vec<ProductSummary>, String> {
    let chain = get_chain().await?;
    let products = product_summaries(&chain);
    log::info!(
        "Loaded {} products from {} blocks",
        products.len(),
        chain.chain.len()
    );
    Ok(products)
}
