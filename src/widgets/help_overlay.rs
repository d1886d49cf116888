use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        section("Поиск"),
        binding("/ или i", "Поле даты или события"),
        binding("y", "Поле года"),
        binding("Tab", "Переключить поле"),
        binding("Enter", "Найти и выйти из поля"),
        binding("s", "Найти по текущим полям"),
        binding("Esc", "Выйти из поля без поиска"),
        binding("Ctrl+U", "Очистить поле"),
        Line::from(""),
        section("Временная линия"),
        binding("j / k / ↑ / ↓", "Выбор события"),
        binding("gg / G", "Первое / последнее"),
        binding("Ctrl+D / Ctrl+U", "Страница вниз / вверх"),
        Line::from(""),
        section("Общее"),
        binding("?", "Эта справка"),
        binding("q / Ctrl+C", "Выход"),
    ];

    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let modal_area = centered_rect(60, height, area);
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::PRIMARY))
        .title(" Справка (? — закрыть) ");

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(theme::BG_SURFACE));
    frame.render_widget(paragraph, modal_area);
}

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default()
            .fg(theme::PRIMARY)
            .add_modifier(Modifier::BOLD),
    ))
}

fn binding<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {:<22}", key), Style::default().fg(theme::YELLOW)),
        Span::styled(desc, Style::default().fg(theme::TEXT)),
    ])
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .split(vertical[0]);
    horizontal[0]
}
