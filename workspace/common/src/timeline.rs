//! Chronological journey view.

use serde::Serialize;

use crate::format::{humanize_status, is_temperature_violation};
use crate::{GeoPoint, HistoryEvent};

/// Visual category of a journey event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusKind {
    Issue,
    Manufactured,
    QualityCheck,
    Shipped,
    Arrived,
    Sold,
    Pending,
}

impl StatusKind {
    /// An attached issue takes precedence over the status itself.
    pub fn classify(status: &str, has_issue: bool) -> Self {
        if has_issue {
            return StatusKind::Issue;
        }
        match status {
            "manufactured" => StatusKind::Manufactured,
            "quality_check_passed" => StatusKind::QualityCheck,
            "shipped_to_distribution" | "shipped_to_retail" => StatusKind::Shipped,
            "arrived_at_distribution" | "arrived_at_retail" => StatusKind::Arrived,
            "sold_to_customer" => StatusKind::Sold,
            _ => StatusKind::Pending,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StatusKind::Issue => "fas fa-exclamation-triangle",
            StatusKind::Manufactured => "fas fa-box",
            StatusKind::QualityCheck | StatusKind::Sold => "fas fa-check-circle",
            StatusKind::Shipped => "fas fa-truck",
            StatusKind::Arrived => "fas fa-map-marker-alt",
            StatusKind::Pending => "fas fa-clock",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            StatusKind::Issue => "text-red-500",
            StatusKind::Manufactured | StatusKind::Arrived => "text-blue-500",
            StatusKind::QualityCheck | StatusKind::Sold => "text-green-500",
            StatusKind::Shipped => "text-purple-500",
            StatusKind::Pending => "text-gray-500",
        }
    }

    /// Single-character marker for terminal output.
    pub fn glyph(&self) -> char {
        match self {
            StatusKind::Issue => '!',
            StatusKind::Manufactured => '#',
            StatusKind::QualityCheck | StatusKind::Sold => '+',
            StatusKind::Shipped => '>',
            StatusKind::Arrived => '@',
            StatusKind::Pending => '.',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueNote {
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    pub temperature: f64,
    pub humidity: Option<f64>,
    pub violation: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub timestamp: f64,
    /// Seconds since the previous entry; `None` for the first one.
    pub delta_seconds: Option<f64>,
    pub status: String,
    pub status_label: String,
    pub kind: StatusKind,
    pub from: String,
    pub to: String,
    pub issue: Option<IssueNote>,
    pub reading: Option<Reading>,
    pub location: Option<GeoPoint>,
    pub batch_id: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Drops incomplete events, orders the rest by time and annotates each
/// entry with the gap to its predecessor.
pub fn prepare_timeline(history: &[HistoryEvent]) -> Vec<TimelineEntry> {
    let mut valid: Vec<(f64, &HistoryEvent)> = history
        .iter()
        .filter_map(|event| {
            let timestamp = event.timestamp.filter(|t| t.is_finite())?;
            non_empty(&event.status)?;
            non_empty(&event.from)?;
            non_empty(&event.to)?;
            Some((timestamp, event))
        })
        .collect();

    if valid.len() < history.len() {
        tracing::debug!(
            "Dropped {} incomplete events from timeline",
            history.len() - valid.len()
        );
    }

    // sort_by is stable, equal timestamps keep delivery order
    valid.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut previous: Option<f64> = None;
    valid
        .into_iter()
        .map(|(timestamp, event)| {
            let delta_seconds = previous.map(|p| timestamp - p);
            previous = Some(timestamp);

            let issue = event.issue().map(|issue| IssueNote {
                label: humanize_status(&issue.issue_type),
                description: issue.description.clone(),
            });
            let reading = event.temperature().map(|temperature| Reading {
                temperature,
                humidity: event.humidity(),
                violation: is_temperature_violation(temperature),
            });
            let status = event.status().to_string();

            TimelineEntry {
                timestamp,
                delta_seconds,
                status_label: humanize_status(&status),
                kind: StatusKind::classify(&status, issue.is_some()),
                status,
                from: event.from.clone().unwrap_or_default(),
                to: event.to.clone().unwrap_or_default(),
                issue,
                reading,
                location: event.location,
                batch_id: event
                    .additional_data
                    .as_ref()
                    .and_then(|d| d.batch_id.clone()),
            }
        })
        .collect()
}
