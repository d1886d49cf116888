use serde::Serialize;

use crate::category::{badge_for, Badge};
use crate::domain::HistoricalEvent;

#[derive(Serialize)]
struct ReportEntry<'a> {
    #[serde(flatten)]
    event: &'a HistoricalEvent,
    badge: Badge,
}

/// One block per event, or the empty-state message.
pub fn render_plain(events: &[HistoricalEvent]) -> String {
    if events.is_empty() {
        return "События не найдены\nПопробуйте изменить параметры поиска\n".to_string();
    }

    let mut out = String::new();
    for event in events {
        out.push_str(&format!(
            "★ {}  {}  [{}] ({})\n    {}\n",
            event.date_label(),
            event.title,
            event.category,
            event.era,
            event.description,
        ));
    }
    out
}

pub fn render_json(events: &[HistoricalEvent]) -> serde_json::Result<String> {
    let entries: Vec<ReportEntry> = events
        .iter()
        .map(|event| ReportEntry {
            event,
            badge: badge_for(event.category),
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}
