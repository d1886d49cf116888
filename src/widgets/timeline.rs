use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::app::{App, ResultView};
use crate::category::badge_for;
use crate::domain::HistoricalEvent;
use crate::theme;
use crate::widgets::empty_state;

pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    let title = match &app.result_view {
        ResultView::Initial => " ◴ Временная линия ".to_string(),
        ResultView::Searched(_) => format!(" ◴ Временная линия · {} ", app.displayed.len()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::TEXT_MUTED))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));

    if app.is_empty_result() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        empty_state::render(frame, inner);
        return;
    }

    let rows: Vec<Row> = app.displayed.iter().map(event_row).collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Length(17),
        Constraint::Fill(1),
        Constraint::Length(20),
    ];

    let table = Table::new(rows, widths)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(theme::BG_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(table, area, &mut app.timeline_state);
}

fn event_row(event: &HistoricalEvent) -> Row<'static> {
    let badge = badge_for(event.category);
    Row::new(vec![
        Cell::from(Span::styled("★", Style::default().fg(theme::PRIMARY))),
        Cell::from(event.date_label()).style(Style::default().fg(theme::TEXT_DIM)),
        Cell::from(event.title).style(Style::default().fg(theme::TEXT)),
        Cell::from(Line::from(Span::styled(
            format!(" {} ", event.category),
            badge.style(),
        ))),
    ])
}
