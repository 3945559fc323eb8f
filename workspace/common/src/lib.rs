//! Common transport-layer types and display derivations shared between the
//! browser dashboard and the terminal client.
//! The structs mirror the ledger API's `/chain` and `/product/{id}` payloads
//! so both surfaces deserialize responses without duplicating shapes.

pub mod format;
pub mod kpi;
pub mod metrics;
pub mod products;
pub mod timeline;

pub use format::{
    DisplayValue, TEMPERATURE_MAX, TEMPERATURE_MIN, event_datetime, format_duration,
    format_transit_time, humanize_status, is_temperature_violation, split_unit,
};
pub use kpi::{Kpis, KpiCard, KpiIcon, TOTAL_STAGES, calculate_kpis};
pub use metrics::{MetricPoint, MetricSeries, environmental_series};
pub use products::{ProductSummary, filter_products, product_summaries, short_label, unique_product_ids};
pub use timeline::{IssueNote, Reading, StatusKind, TimelineEntry, prepare_timeline};

use serde::{Deserialize, Serialize};

// ===================== Chain =====================

/// Response of `GET /chain`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChainResponse {
    #[serde(default)]
    pub chain: Vec<Block>,
    #[serde(default)]
    pub length: Option<usize>,
}

/// One block of the ledger as exposed by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Block {
    #[serde(default)]
    pub index: Option<u64>,
    #[serde(default)]
    pub timestamp: Option<f64>,
    #[serde(default)]
    pub transactions: Vec<ChainTransaction>,
    #[serde(default)]
    pub previous_hash: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
}

/// A ledger transaction. Only `product_id` is needed to list products; the
/// catalog fields are used for labels when present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChainTransaction {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_sku: Option<String>,
    #[serde(default)]
    pub product_category: Option<String>,
    #[serde(default)]
    pub timestamp: Option<f64>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub additional_data: Option<AdditionalData>,
}

// ===================== Product history =====================

/// Response of `GET /product/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductHistory {
    #[serde(default)]
    pub history: Vec<HistoryEvent>,
}

/// A single status change in a product journey.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HistoryEvent {
    #[serde(default)]
    pub block_index: Option<u64>,
    /// Unix seconds, possibly fractional.
    #[serde(default)]
    pub timestamp: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub additional_data: Option<AdditionalData>,
}

impl HistoryEvent {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    pub fn temperature(&self) -> Option<f64> {
        self.additional_data.as_ref().and_then(|d| d.temperature)
    }

    pub fn humidity(&self) -> Option<f64> {
        self.additional_data.as_ref().and_then(|d| d.humidity)
    }

    pub fn issue(&self) -> Option<&Issue> {
        self.additional_data.as_ref().and_then(|d| d.issue.as_ref())
    }
}

/// Sensor readings and annotations attached to an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AdditionalData {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub issue: Option<Issue>,
    #[serde(default)]
    pub inspection_id: Option<String>,
    #[serde(default)]
    pub batch_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    #[serde(rename = "type")]
    pub issue_type: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_response_tolerates_missing_fields() {
        let json = r#"{
            "chain": [
                {"index": 0, "timestamp": 1700000000.5, "transactions": [], "previous_hash": "0", "hash": "abc"},
                {"transactions": [{"product_id": "p-1", "status": "manufactured", "extra": true}]}
            ],
            "length": 2
        }"#;

        let chain: ChainResponse = serde_json::from_str(json).unwrap();
        assert_eq!(chain.chain.len(), 2);
        assert_eq!(chain.length, Some(2));
        assert_eq!(chain.chain[1].transactions[0].product_id.as_deref(), Some("p-1"));
        assert_eq!(chain.chain[1].index, None);
    }

    #[test]
    fn test_history_event_accessors() {
        let json = r#"{
            "history": [{
                "block_index": 3,
                "timestamp": 1700000000,
                "from": "Factory A",
                "to": "Distribution Center 1",
                "status": "shipped_to_distribution",
                "location": {"lat": 31.2, "lng": 121.4},
                "additional_data": {
                    "temperature": 23.5,
                    "humidity": 50.1,
                    "issue": {"type": "temperature_excursion", "description": "Cooling failure"},
                    "inspection_id": null,
                    "batch_id": "BATCH-1234"
                }
            }]
        }"#;

        let product: ProductHistory = serde_json::from_str(json).unwrap();
        let event = &product.history[0];
        assert_eq!(event.status(), "shipped_to_distribution");
        assert_eq!(event.temperature(), Some(23.5));
        assert_eq!(event.humidity(), Some(50.1));
        assert_eq!(event.issue().map(|i| i.issue_type.as_str()), Some("temperature_excursion"));
        assert_eq!(event.location, Some(GeoPoint { lat: 31.2, lng: 121.4 }));
    }

    #[test]
    fn test_null_readings_deserialize_as_none() {
        let json = r#"{"timestamp": 1.0, "status": "manufactured",
            "additional_data": {"temperature": null, "humidity": null}}"#;
        let event: HistoryEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.temperature(), None);
        assert_eq!(event.issue(), None);
    }
}
