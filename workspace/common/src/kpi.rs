//! Journey KPIs shown above the timeline.

use std::collections::HashSet;

use serde::Serialize;

use crate::HistoryEvent;
use crate::format::{format_transit_time, is_temperature_violation, to_fixed};

/// Number of distinct stages a product passes from manufacture to sale.
pub const TOTAL_STAGES: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub total_transit_seconds: f64,
    pub transit_display: String,
    pub temperature_violations: usize,
    pub total_stops: usize,
    pub completion_rate: f64,
    pub total_issues: usize,
    pub shipping_times: Vec<f64>,
    pub average_shipping_seconds: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KpiIcon {
    Timer,
    Thermometer,
    ShieldAlert,
    Activity,
}

impl KpiIcon {
    pub fn class(&self) -> &'static str {
        match self {
            KpiIcon::Timer => "fas fa-stopwatch",
            KpiIcon::Thermometer => "fas fa-temperature-high",
            KpiIcon::ShieldAlert => "fas fa-shield-alt",
            KpiIcon::Activity => "fas fa-chart-line",
        }
    }
}

/// One card of the KPI row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
    pub icon: KpiIcon,
    pub alert: bool,
}

impl Kpis {
    /// Completion rate with one decimal, e.g. `"42.9"`.
    pub fn completion_display(&self) -> String {
        to_fixed(self.completion_rate, 1)
    }

    pub fn cards(&self) -> Vec<KpiCard> {
        vec![
            KpiCard {
                title: "Total Time",
                value: self.transit_display.clone(),
                icon: KpiIcon::Timer,
                alert: false,
            },
            KpiCard {
                title: "Temperature Alerts",
                value: self.temperature_violations.to_string(),
                icon: KpiIcon::Thermometer,
                alert: self.temperature_violations > 0,
            },
            KpiCard {
                title: "Supply Chain Issues",
                value: self.total_issues.to_string(),
                icon: KpiIcon::ShieldAlert,
                alert: self.total_issues > 0,
            },
            KpiCard {
                title: "Completion",
                value: format!("{}%", self.completion_display()),
                icon: KpiIcon::Activity,
                alert: false,
            },
        ]
    }
}

/// Aggregates a product history into display KPIs.
///
/// Returns `None` for an empty history. Transit time is measured between the
/// first and last events as delivered, not after sorting.
pub fn calculate_kpis(history: &[HistoryEvent]) -> Option<Kpis> {
    let first = history.first()?;
    let last = history.last()?;

    let start = first.timestamp.unwrap_or(0.0);
    let end = last.timestamp.unwrap_or(0.0);
    let total_transit_seconds = end - start;

    let temperature_violations = history
        .iter()
        .filter_map(HistoryEvent::temperature)
        .filter(|t| is_temperature_violation(*t))
        .count();

    let total_issues = history.iter().filter(|e| e.issue().is_some()).count();

    let total_stops = history
        .iter()
        .filter(|e| e.status().contains("arrived"))
        .count();

    let shipping_times: Vec<f64> = history
        .windows(2)
        .filter(|pair| pair[0].status().contains("shipped") && pair[1].status().contains("arrived"))
        .filter_map(|pair| Some(pair[1].timestamp? - pair[0].timestamp?))
        .collect();

    let average_shipping_seconds = if shipping_times.is_empty() {
        None
    } else {
        Some(shipping_times.iter().sum::<f64>() / shipping_times.len() as f64)
    };

    let completed_stages = history
        .iter()
        .map(HistoryEvent::status)
        .collect::<HashSet<_>>()
        .len();
    let completion_rate = completed_stages as f64 / TOTAL_STAGES as f64 * 100.0;

    tracing::trace!(
        "KPIs: transit={}s violations={} issues={} stages={}",
        total_transit_seconds,
        temperature_violations,
        total_issues,
        completed_stages
    );

    Some(Kpis {
        total_transit_seconds,
        transit_display: format_transit_time(total_transit_seconds),
        temperature_violations,
        total_stops,
        completion_rate,
        total_issues,
        shipping_times,
        average_shipping_seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdditionalData, Issue};

    fn event(ts: f64, status: &str) -> HistoryEvent {
        HistoryEvent {
            timestamp: Some(ts),
            status: Some(status.to_string()),
            from: Some("A".to_string()),
            to: Some("B".to_string()),
            ..Default::default()
        }
    }

    fn with_temperature(mut e: HistoryEvent, temperature: f64) -> HistoryEvent {
        e.additional_data = Some(AdditionalData {
            temperature: Some(temperature),
            humidity: Some(50.0),
            ..Default::default()
        });
        e
    }

    fn full_journey() -> Vec<HistoryEvent> {
        let hour = 3600.0;
        vec![
            event(0.0, "manufactured"),
            event(4.0 * hour, "quality_check_passed"),
            with_temperature(event(10.0 * hour, "shipped_to_distribution"), 20.5),
            event(30.0 * hour, "arrived_at_distribution"),
            with_temperature(event(40.0 * hour, "shipped_to_retail"), 23.0),
            event(50.0 * hour, "arrived_at_retail"),
            event(60.0 * hour, "sold_to_customer"),
        ]
    }

    #[test]
    fn test_empty_history_has_no_kpis() {
        assert!(calculate_kpis(&[]).is_none());
    }

    #[test]
    fn test_full_journey() {
        let kpis = calculate_kpis(&full_journey()).unwrap();

        assert_eq!(kpis.total_transit_seconds, 60.0 * 3600.0);
        assert_eq!(kpis.transit_display, "2.5d");
        assert_eq!(kpis.temperature_violations, 1);
        assert_eq!(kpis.total_stops, 2);
        assert_eq!(kpis.total_issues, 0);
        assert_eq!(kpis.completion_display(), "100.0");
        assert_eq!(kpis.shipping_times, vec![20.0 * 3600.0, 10.0 * 3600.0]);
        assert_eq!(kpis.average_shipping_seconds, Some(15.0 * 3600.0));
    }

    #[test]
    fn test_completion_rate_counts_unique_statuses() {
        let history = vec![
            event(0.0, "manufactured"),
            event(10.0, "manufactured"),
            event(20.0, "quality_check_passed"),
            event(30.0, "shipped_to_distribution"),
        ];

        let kpis = calculate_kpis(&history).unwrap();
        assert_eq!(kpis.completion_display(), "42.9");
        assert_eq!(kpis.transit_display, "30.0s");
    }

    #[test]
    fn test_completion_rate_can_exceed_full() {
        let mut history = full_journey();
        history.push(event(70.0 * 3600.0, "returned_by_customer"));

        let kpis = calculate_kpis(&history).unwrap();
        assert!(kpis.completion_rate > 100.0);
        assert_eq!(kpis.completion_display(), "114.3");
    }

    #[test]
    fn test_transit_time_uses_delivery_order() {
        let history = vec![
            event(500.0, "arrived_at_retail"),
            event(0.0, "manufactured"),
            event(400.0, "shipped_to_retail"),
        ];

        let kpis = calculate_kpis(&history).unwrap();
        assert_eq!(kpis.total_transit_seconds, -100.0);
        assert_eq!(kpis.transit_display, "-100.0s");
    }

    #[test]
    fn test_zero_temperature_is_a_violation() {
        let history = vec![
            with_temperature(event(0.0, "shipped_to_distribution"), 0.0),
            event(100.0, "arrived_at_distribution"),
        ];

        let kpis = calculate_kpis(&history).unwrap();
        assert_eq!(kpis.temperature_violations, 1);
        assert!(kpis.cards()[1].alert);
    }

    #[test]
    fn test_shipping_pair_requires_adjacent_arrival() {
        let history = vec![
            event(0.0, "shipped_to_distribution"),
            event(100.0, "quality_check_passed"),
            event(200.0, "arrived_at_distribution"),
            event(300.0, "shipped_to_retail"),
        ];

        let kpis = calculate_kpis(&history).unwrap();
        assert!(kpis.shipping_times.is_empty());
        assert_eq!(kpis.average_shipping_seconds, None);
        assert_eq!(kpis.total_stops, 1);
    }

    #[test]
    fn test_issues_are_counted() {
        let mut flagged = event(100.0, "arrived_at_retail");
        flagged.additional_data = Some(AdditionalData {
            issue: Some(Issue {
                issue_type: "damaged_packaging".to_string(),
                description: "Crushed corner".to_string(),
            }),
            ..Default::default()
        });

        let kpis = calculate_kpis(&[event(0.0, "shipped_to_retail"), flagged]).unwrap();
        assert_eq!(kpis.total_issues, 1);

        let cards = kpis.cards();
        assert_eq!(cards[2].title, "Supply Chain Issues");
        assert!(cards[2].alert);
        assert!(!cards[1].alert);
    }

    #[test]
    fn test_cards_order_and_values() {
        let kpis = calculate_kpis(&full_journey()).unwrap();
        let cards = kpis.cards();

        let titles: Vec<_> = cards.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec!["Total Time", "Temperature Alerts", "Supply Chain Issues", "Completion"]
        );
        assert_eq!(cards[0].value, "2.5d");
        assert_eq!(cards[1].value, "1");
        assert!(cards[1].alert);
        assert_eq!(cards[3].value, "100.0%");
    }
}
