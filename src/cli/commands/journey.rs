use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::client::ChainClient;
use crate::report::JourneyReport;

/// Builds the journey report for one product as text or JSON.
pub async fn journey(client: &ChainClient, product_id: &str, as_json: bool) -> Result<String> {
    let history = client
        .product_history(product_id)
        .await
        .with_context(|| format!("Failed to fetch history for product {}", product_id))?;

    let report = JourneyReport::build(product_id, &history);
    if report.kpis.is_none() {
        warn!("Product {} has no recorded history", product_id);
    } else {
        info!(
            "Product {}: {} timeline entries, {} readings",
            product_id,
            report.timeline.len(),
            report.metrics.len()
        );
    }

    if as_json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.to_string())
    }
}
