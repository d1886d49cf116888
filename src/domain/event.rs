use serde::Serialize;

/// One entry on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoricalEvent {
    pub id: u32,
    /// Day and month, e.g. "9 мая".
    pub date: &'static str,
    pub year: i32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub era: &'static str,
}

impl HistoricalEvent {
    /// "9 мая 1945", the label shown next to the timeline marker.
    pub fn date_label(&self) -> String {
        format!("{} {}", self.date, self.year)
    }
}

impl std::fmt::Display for HistoricalEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {}", self.date_label(), self.title)
    }
}
