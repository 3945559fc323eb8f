//! Environmental readings for the metrics chart.

use serde::Serialize;

use crate::HistoryEvent;
use crate::format::is_temperature_violation;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricPoint {
    pub timestamp: f64,
    pub temperature: f64,
    pub humidity: Option<f64>,
    pub has_issue: bool,
    pub alert: bool,
}

/// Events carrying a temperature reading, in delivery order.
pub fn environmental_series(history: &[HistoryEvent]) -> Vec<MetricPoint> {
    history
        .iter()
        .filter_map(|event| {
            let temperature = event.temperature()?;
            Some(MetricPoint {
                timestamp: event.timestamp.unwrap_or(0.0),
                temperature,
                humidity: event.humidity(),
                has_issue: event.issue().is_some(),
                alert: is_temperature_violation(temperature),
            })
        })
        .collect()
}

/// Column-oriented view of a metric series for a two-axis line chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MetricSeries {
    pub labels: Vec<String>,
    pub temperatures: Vec<f64>,
    pub humidities: Vec<Option<f64>>,
    /// Indexes of points outside the safe temperature band.
    pub alerts: Vec<usize>,
}

impl MetricSeries {
    /// Builds the columns, labelling each point with `label(timestamp)`.
    pub fn from_points<F>(points: &[MetricPoint], label: F) -> Self
    where
        F: Fn(f64) -> String,
    {
        let mut series = MetricSeries::default();
        for (index, point) in points.iter().enumerate() {
            series.labels.push(label(point.timestamp));
            series.temperatures.push(point.temperature);
            series.humidities.push(point.humidity);
            if point.alert {
                series.alerts.push(index);
            }
        }
        series
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn alert_labels(&self) -> Vec<String> {
        self.alerts.iter().map(|i| self.labels[*i].clone()).collect()
    }

    pub fn alert_temperatures(&self) -> Vec<f64> {
        self.alerts.iter().map(|i| self.temperatures[*i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AdditionalData, Issue};

    fn reading(ts: f64, temperature: Option<f64>, issue: bool) -> HistoryEvent {
        HistoryEvent {
            timestamp: Some(ts),
            status: Some("shipped_to_retail".to_string()),
            additional_data: Some(AdditionalData {
                temperature,
                humidity: temperature.map(|_| 50.0),
                issue: issue.then(|| Issue {
                    issue_type: "delay".to_string(),
                    description: "Port congestion".to_string(),
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_series_keeps_only_readings() {
        let history = vec![
            reading(1.0, Some(19.5), false),
            reading(2.0, None, true),
            HistoryEvent::default(),
            reading(3.0, Some(25.0), true),
        ];

        let points = environmental_series(&history);
        assert_eq!(points.len(), 2);
        assert!(!points[0].alert);
        assert!(points[1].alert);
        assert!(points[1].has_issue);
        assert_eq!(points[1].humidity, Some(50.0));
    }

    #[test]
    fn test_series_columns() {
        let points = environmental_series(&[
            reading(10.0, Some(17.0), false),
            reading(20.0, Some(20.0), false),
            reading(30.0, Some(22.5), false),
        ]);

        let series = MetricSeries::from_points(&points, |ts| format!("t{}", ts));
        assert_eq!(series.labels, vec!["t10", "t20", "t30"]);
        assert_eq!(series.alerts, vec![0, 2]);
        assert_eq!(series.alert_labels(), vec!["t10", "t30"]);
        assert_eq!(series.alert_temperatures(), vec![17.0, 22.5]);
    }

    #[test]
    fn test_empty_series() {
        let series = MetricSeries::from_points(&[], |ts| ts.to_string());
        assert!(series.is_empty());
    }

    #[test]
    fn test_history_without_readings_has_empty_series() {
        let history = vec![
            reading(1.0, None, false),
            reading(2.0, None, true),
            HistoryEvent::default(),
        ];

        let points = environmental_series(&history);
        let series = MetricSeries::from_points(&points, |ts| ts.to_string());
        assert!(points.is_empty());
        assert!(series.is_empty());
    }
}
