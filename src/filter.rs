use crate::domain::HistoricalEvent;

/// The pair of search fields submitted together.
///
/// An empty field places no constraint. `year` is kept as raw text: it
/// matches when it equals the decimal rendering of the event's year, so
/// anything non-numeric simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub year: String,
}

impl Query {
    pub fn new(text: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            year: year.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.year.is_empty()
    }

    /// Date or title contains the text (case-insensitive), and the year is equal.
    /// Description, category and era are not searched.
    pub fn matches(&self, event: &HistoricalEvent) -> bool {
        self.matches_text(event) && self.matches_year(event)
    }

    pub fn apply(&self, events: &[HistoricalEvent]) -> Vec<HistoricalEvent> {
        let needle = self.text.to_lowercase();
        let mut results: Vec<HistoricalEvent> = events
            .iter()
            .filter(|event| contains_lowercase(event, &needle) && self.matches_year(event))
            .copied()
            .collect();
        // stable: equal years keep store order
        results.sort_by_key(|event| event.year);
        results
    }

    fn matches_text(&self, event: &HistoricalEvent) -> bool {
        contains_lowercase(event, &self.text.to_lowercase())
    }

    fn matches_year(&self, event: &HistoricalEvent) -> bool {
        self.year.is_empty() || event.year.to_string() == self.year
    }
}

fn contains_lowercase(event: &HistoricalEvent, needle: &str) -> bool {
    needle.is_empty()
        || event.date.to_lowercase().contains(needle)
        || event.title.to_lowercase().contains(needle)
}

/// Filter `events` by text and year and sort the matches by year.
pub fn filter(events: &[HistoricalEvent], text_query: &str, year_query: &str) -> Vec<HistoricalEvent> {
    Query::new(text_query, year_query).apply(events)
}
