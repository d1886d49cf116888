use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled("История ", Style::default().fg(theme::PRIMARY)),
        Span::styled("Рос", Style::default().fg(theme::SECONDARY)),
        Span::styled("сии", Style::default().fg(theme::ACCENT)),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let subtitle = Line::from(Span::styled(
        "Откройте для себя ключевые события истории нашей страны",
        Style::default().fg(theme::TEXT_DIM),
    ));

    let widget = Paragraph::new(vec![title, subtitle])
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme::BG_BAR));
    frame.render_widget(widget, area);
}
