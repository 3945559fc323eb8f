mod chart;
mod product_grid;
mod stats;
mod tabs;
mod timeline;
mod view;

pub use view::Dashboard;

use chrono::Local;

/// Local date and time of an event, e.g. `2024-03-05 14:02:11`.
fn local_datetime(timestamp: f64) -> String {
    common::event_datetime(timestamp)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Local time of day, used for chart axis labels.
fn local_time(timestamp: f64) -> String {
    common::event_datetime(timestamp)
        .map(|dt| dt.with_timezone(&Local).format("%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
