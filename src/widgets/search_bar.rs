use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, Field};
use crate::theme;

const TEXT_PLACEHOLDER: &str = "Введите дату (например: 9 мая) или событие";
const YEAR_PLACEHOLDER: &str = "Год";

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(16),
        Constraint::Length(12),
    ])
    .spacing(1)
    .split(area);

    render_field(app, Field::Text, " ◷ ", TEXT_PLACEHOLDER, frame, layout[0]);
    render_field(app, Field::Year, " # ", YEAR_PLACEHOLDER, frame, layout[1]);
    render_button(frame, layout[2]);
}

fn render_field(
    app: &App,
    field: Field,
    icon: &'static str,
    placeholder: &'static str,
    frame: &mut Frame,
    area: Rect,
) {
    let focused = app.editing() == Some(field);
    let value = app.input(field);

    let mut spans = vec![Span::styled(icon, Style::default().fg(theme::TEXT_MUTED))];
    if value.is_empty() && !focused {
        spans.push(Span::styled(placeholder, Style::default().fg(theme::TEXT_MUTED)));
    } else {
        spans.push(Span::styled(value, Style::default().fg(theme::TEXT)));
    }
    if focused {
        spans.push(Span::styled("_", Style::default().fg(theme::PRIMARY)));
    }

    let border = if focused { theme::PRIMARY } else { theme::TEXT_MUTED };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let widget = Paragraph::new(Line::from(spans))
        .block(block)
        .style(Style::default().bg(theme::BG_SURFACE));
    frame.render_widget(widget, area);
}

fn render_button(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::PRIMARY));
    let widget = Paragraph::new(Line::from(vec![
        Span::raw("⌕ "),
        Span::raw("Найти"),
    ]))
    .alignment(Alignment::Center)
    .block(block)
    .style(
        Style::default()
            .fg(theme::TEXT_ON_BADGE)
            .bg(theme::PRIMARY)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(widget, area);
}
