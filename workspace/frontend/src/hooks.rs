/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// The tab shown below the KPI row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Timeline,
    Metrics,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Timeline, Tab::Metrics];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Timeline => "Timeline",
            Tab::Metrics => "Metrics",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Timeline => "fas fa-clock",
            Tab::Metrics => "fas fa-chart-line",
        }
    }
}
