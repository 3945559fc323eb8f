//! Terminal rendering of product listings and journeys.

use std::fmt;

use common::{
    Kpis, MetricPoint, ProductHistory, ProductSummary, TimelineEntry, calculate_kpis,
    environmental_series, event_datetime, format_duration, prepare_timeline,
};
use serde::Serialize;

fn utc_datetime(timestamp: f64) -> String {
    event_datetime(timestamp)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn optional_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// One line per product: id, then name and SKU when the ledger has them.
pub fn render_products(products: &[ProductSummary]) -> String {
    let mut out = String::new();
    for product in products {
        out.push_str(&product.product_id);
        match (&product.name, &product.sku) {
            (Some(name), Some(sku)) => out.push_str(&format!("  {} ({})", name, sku)),
            (Some(name), None) => out.push_str(&format!("  {}", name)),
            (None, Some(sku)) => out.push_str(&format!("  ({})", sku)),
            (None, None) => {}
        }
        out.push('\n');
    }
    out
}

/// Everything the dashboard shows for one product.
#[derive(Debug, Clone, Serialize)]
pub struct JourneyReport {
    pub product_id: String,
    pub kpis: Option<Kpis>,
    pub timeline: Vec<TimelineEntry>,
    pub metrics: Vec<MetricPoint>,
}

impl JourneyReport {
    pub fn build(product_id: &str, product: &ProductHistory) -> Self {
        Self {
            product_id: product_id.to_string(),
            kpis: calculate_kpis(&product.history),
            timeline: prepare_timeline(&product.history),
            metrics: environmental_series(&product.history),
        }
    }

    fn fmt_kpis(&self, f: &mut fmt::Formatter<'_>, kpis: &Kpis) -> fmt::Result {
        writeln!(f, "KPIs")?;
        for card in kpis.cards() {
            let marker = if card.alert { "  (!)" } else { "" };
            writeln!(f, "  {:<22}{}{}", card.title, card.value, marker)?;
        }
        writeln!(f, "  {:<22}{}", "Stops", kpis.total_stops)?;
        if let Some(average) = kpis.average_shipping_seconds {
            writeln!(f, "  {:<22}{}", "Avg Shipping Leg", format_duration(average))?;
        }
        Ok(())
    }

    fn fmt_timeline(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Journey")?;
        for entry in &self.timeline {
            let delta = entry
                .delta_seconds
                .map(|d| format!("+{}", format_duration(d)))
                .unwrap_or_default();
            writeln!(
                f,
                "  {} {:<28}{:>8}  {}",
                entry.kind.glyph(),
                entry.status_label,
                delta,
                utc_datetime(entry.timestamp)
            )?;
            writeln!(f, "      From: {} → To: {}", entry.from, entry.to)?;
            if let Some(reading) = &entry.reading {
                let marker = if reading.violation { "  (!)" } else { "" };
                writeln!(
                    f,
                    "      {}°C | {}%{}",
                    reading.temperature,
                    optional_number(reading.humidity),
                    marker
                )?;
            }
            if let Some(issue) = &entry.issue {
                writeln!(f, "      ! {}: {}", issue.label, issue.description)?;
            }
        }
        Ok(())
    }

    fn fmt_metrics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Environment")?;
        writeln!(f, "  {:<26}{:>10}{:>14}", "TIME", "TEMP (°C)", "HUMIDITY (%)")?;
        for point in &self.metrics {
            let marker = if point.alert { "  (!)" } else { "" };
            writeln!(
                f,
                "  {:<26}{:>10}{:>14}{}",
                utc_datetime(point.timestamp),
                point.temperature,
                optional_number(point.humidity),
                marker
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for JourneyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Product {}", self.product_id)?;

        let Some(kpis) = &self.kpis else {
            return writeln!(f, "No history recorded for this product.");
        };

        writeln!(f)?;
        self.fmt_kpis(f, kpis)?;

        if !self.timeline.is_empty() {
            writeln!(f)?;
            self.fmt_timeline(f)?;
        }

        if !self.metrics.is_empty() {
            writeln!(f)?;
            self.fmt_metrics(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::sample_history;

    #[test]
    fn test_render_products() {
        let products = vec![
            ProductSummary {
                product_id: "p-1".to_string(),
                name: Some("Laptop".to_string()),
                sku: Some("TECH-LP".to_string()),
                category: None,
            },
            ProductSummary {
                product_id: "p-2".to_string(),
                name: None,
                sku: None,
                category: None,
            },
        ];

        assert_eq!(render_products(&products), "p-1  Laptop (TECH-LP)\np-2\n");
    }

    #[test]
    fn test_report_text_sections() {
        let report = JourneyReport::build("p-1", &sample_history());
        let text = report.to_string();

        assert!(text.starts_with("Product p-1\n"));
        assert!(text.contains("Total Time            2.5d"));
        assert!(text.contains("Temperature Alerts    1  (!)"));
        assert!(text.contains("Completion            100.0%"));
        assert!(text.contains("Avg Shipping Leg      15.0h"));
        assert!(text.contains("MANUFACTURED"));
        assert!(text.contains("+20.0h"));
        assert!(text.contains("From: Factory A → To: Distribution Center 1"));
        assert!(text.contains("! TEMPERATURE EXCURSION: Reefer unit failed"));
        assert!(text.contains("Environment"));
    }

    #[test]
    fn test_report_for_empty_history() {
        let report = JourneyReport::build("ghost", &ProductHistory::default());
        assert!(report.kpis.is_none());
        assert_eq!(
            report.to_string(),
            "Product ghost\nNo history recorded for this product.\n"
        );
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = JourneyReport::build("p-1", &sample_history());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["product_id"], "p-1");
        assert_eq!(json["kpis"]["temperature_violations"], 1);
        assert_eq!(json["timeline"].as_array().unwrap().len(), 7);
        assert_eq!(json["metrics"].as_array().unwrap().len(), 2);
        assert_eq!(json["timeline"][0]["kind"], "Manufactured");
    }
}
