use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme;

pub const TITLE: &str = "События не найдены";
pub const HINT: &str = "Попробуйте изменить параметры поиска";

pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("⌕", Style::default().fg(theme::TEXT_MUTED))),
        Line::from(""),
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(HINT, Style::default().fg(theme::TEXT_DIM))),
    ];

    let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
}
