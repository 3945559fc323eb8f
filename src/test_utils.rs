#[cfg(test)]
pub mod test_utils {
    use axum::{
        Json, Router,
        extract::Path,
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::get,
    };
    use common::ProductHistory;
    use serde_json::{Value, json};
    use tokio::net::TcpListener;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Product id served by the fake ledger with a full journey.
    pub const KNOWN_PRODUCT: &str = "3f2a9c1e-77b0-4d1e-9a55-2b6f0e4d8c21";
    /// Product id for which the fake ledger answers with HTTP 500.
    pub const FAILING_PRODUCT: &str = "boom";

    const START: f64 = 1_700_000_000.0;
    const HOUR: f64 = 3600.0;

    /// A complete seven-stage journey with one out-of-band reading and one issue.
    pub fn sample_history_json() -> Value {
        json!({
            "history": [
                {"block_index": 1, "timestamp": START, "from": "Factory A", "to": "Factory A",
                 "status": "manufactured", "location": {"lat": 31.2304, "lng": 121.4737},
                 "additional_data": {"temperature": null, "humidity": null, "batch_id": "BATCH-1001"}},
                {"block_index": 1, "timestamp": START + 4.0 * HOUR, "from": "Factory A", "to": "Factory A",
                 "status": "quality_check_passed",
                 "additional_data": {"inspection_id": "insp-1", "batch_id": "BATCH-1001"}},
                {"block_index": 2, "timestamp": START + 10.0 * HOUR, "from": "Factory A", "to": "Distribution Center 1",
                 "status": "shipped_to_distribution",
                 "additional_data": {"temperature": 20.5, "humidity": 50.1}},
                {"block_index": 3, "timestamp": START + 30.0 * HOUR, "from": "Factory A", "to": "Distribution Center 1",
                 "status": "arrived_at_distribution", "additional_data": {}},
                {"block_index": 4, "timestamp": START + 40.0 * HOUR, "from": "Distribution Center 1", "to": "Retail Store X",
                 "status": "shipped_to_retail",
                 "additional_data": {"temperature": 23.0, "humidity": 47.5,
                     "issue": {"type": "temperature_excursion", "description": "Reefer unit failed"}}},
                {"block_index": 5, "timestamp": START + 50.0 * HOUR, "from": "Distribution Center 1", "to": "Retail Store X",
                 "status": "arrived_at_retail"},
                {"block_index": 6, "timestamp": START + 60.0 * HOUR, "from": "Retail Store X", "to": "End Customer",
                 "status": "sold_to_customer"}
            ]
        })
    }

    pub fn sample_history() -> ProductHistory {
        serde_json::from_value(sample_history_json()).expect("sample history fixture is valid")
    }

    pub fn sample_chain_json() -> Value {
        json!({
            "chain": [
                {"index": 0, "timestamp": START, "transactions": [], "previous_hash": "0", "hash": "00ab"},
                {"index": 1, "timestamp": START, "previous_hash": "00ab", "hash": "00cd", "transactions": [
                    {"product_id": KNOWN_PRODUCT, "product_name": "Laptop", "product_sku": "TECH-LP",
                     "product_category": "Electronics", "status": "manufactured", "from": "Factory A", "to": "Factory A"},
                    {"product_id": "b7c94d20-1111-4e3a-8f00-5d1c2b3a4e5f", "product_name": "Tablet", "product_sku": "TECH-TB",
                     "status": "manufactured", "from": "Factory B", "to": "Factory B"}
                ]},
                {"index": 2, "timestamp": START, "previous_hash": "00cd", "hash": "00ef", "transactions": [
                    {"product_id": KNOWN_PRODUCT, "status": "shipped_to_distribution"},
                    {"status": "orphan_transaction"}
                ]}
            ],
            "length": 3
        })
    }

    async fn fake_chain() -> Json<Value> {
        Json(sample_chain_json())
    }

    async fn fake_product(Path(product_id): Path<String>) -> Response {
        match product_id.as_str() {
            KNOWN_PRODUCT => Json(sample_history_json()).into_response(),
            FAILING_PRODUCT => (StatusCode::INTERNAL_SERVER_ERROR, "ledger offline").into_response(),
            _ => Json(json!({"history": []})).into_response(),
        }
    }

    /// Router imitating the ledger API.
    pub fn fake_ledger_router() -> Router {
        Router::new()
            .route("/chain", get(fake_chain))
            .route("/product/:product_id", get(fake_product))
    }

    /// Serve the fake ledger on an ephemeral local port and return its base URL.
    pub async fn spawn_fake_ledger() -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake ledger");
        let addr = listener.local_addr().expect("Fake ledger has no address");

        tokio::spawn(async move {
            axum::serve(listener, fake_ledger_router())
                .await
                .expect("Fake ledger crashed");
        });

        format!("http://{}", addr)
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from RUST_LOG, defaulting to WARN.
    pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}
