use common::ProductHistory;

use crate::api_client;

pub async fn get_product_history(product_id: &str) -> Result<ProductHistory, String> {
    log::trace!("Fetching history for product: {}", product_id);

    let encoded = String::from(js_sys::encode_uri_component(product_id));
    let result = api_client::get::<ProductHistory>(&format!("/product/{}", encoded)).await;

    match &result {
        Ok(product) => log::info!(
            "Fetched {} events for product {}",
            product.history.len(),
            product_id
        ),
        Err(e) => log::error!("Failed to fetch product {}: {}", product_id, e),
    }

    result
}
