use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, InputMode, ResultView};
use crate::theme;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints: &[(&str, &str)] = match app.input_mode {
        InputMode::Editing(_) => &[
            ("Enter", "найти"),
            ("Tab", "поле"),
            ("Ctrl+U", "очистить"),
            ("Esc", "отмена"),
        ],
        _ => &[
            ("/", "дата/событие"),
            ("y", "год"),
            ("s", "найти"),
            ("j/k", "выбор"),
            ("?", "справка"),
            ("q", "выход"),
        ],
    };

    let mut left_spans: Vec<Span> = vec![Span::styled(
        " letopis ",
        Style::default()
            .fg(theme::PRIMARY)
            .add_modifier(Modifier::BOLD),
    )];
    for (key, label) in hints {
        left_spans.push(Span::styled(
            format!(" {}", key),
            Style::default().fg(theme::YELLOW),
        ));
        left_spans.push(Span::styled(
            format!(" {} ", label),
            Style::default().fg(theme::TEXT_MUTED),
        ));
    }

    let mut right_spans: Vec<Span> = Vec::new();
    if let ResultView::Searched(ref query) = app.result_view {
        if !query.text.is_empty() {
            right_spans.push(Span::styled("/", Style::default().fg(theme::GREEN)));
            right_spans.push(Span::styled(query.text.clone(), Style::default().fg(theme::TEXT)));
            right_spans.push(Span::raw("  "));
        }
        if !query.year.is_empty() {
            right_spans.push(Span::styled("#", Style::default().fg(theme::GREEN)));
            right_spans.push(Span::styled(query.year.clone(), Style::default().fg(theme::TEXT)));
            right_spans.push(Span::raw("  "));
        }
    }
    right_spans.push(Span::styled(
        format!("[{}/{}]", app.displayed.len(), app.store.len()),
        Style::default().fg(theme::TEXT_DIM),
    ));
    right_spans.push(Span::raw(" "));

    // Fill the gap so the counters sit on the right edge
    let left_width: usize = left_spans.iter().map(|s| s.width()).sum();
    let right_width: usize = right_spans.iter().map(|s| s.width()).sum();
    let gap = (area.width as usize).saturating_sub(left_width + right_width);

    let mut spans = left_spans;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(right_spans);

    let widget = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::BG_BAR));
    frame.render_widget(widget, area);
}
