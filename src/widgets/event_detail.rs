use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::category::badge_for;
use crate::theme;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::TEXT_MUTED));

    let event = match app.selected_event() {
        Some(event) => event,
        None => {
            frame.render_widget(block, area);
            return;
        }
    };

    let date = event.date_label();
    let lines = vec![
        Line::from(Span::styled(
            event.title,
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line("Дата", &date),
        Line::from(vec![
            Span::styled(
                format!(" {:<10} ", "Категория"),
                Style::default().fg(theme::TEXT_DIM),
            ),
            Span::styled(format!(" {} ", event.category), badge_for(event.category).style()),
        ]),
        field_line("Эпоха", event.era),
        Line::from(""),
        Line::from(Span::styled(
            event.description,
            Style::default().fg(theme::TEXT_DIM),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn field_line<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!(" {:<10} ", label), Style::default().fg(theme::TEXT_DIM)),
        Span::styled(value.to_string(), Style::default().fg(theme::TEXT)),
    ])
}
