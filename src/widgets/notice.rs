use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::theme;

/// Transient one-line result summary above the footer.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some((ref msg, _)) = app.notice else {
        return;
    };

    let line = Line::from(vec![
        Span::styled(" ⌕ ", Style::default().fg(theme::TEXT_ON_BADGE).bg(theme::PRIMARY)),
        Span::styled(format!(" {} ", msg), Style::default().fg(theme::TEXT)),
    ]);
    let width = (line.width() as u16).min(area.width);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + area.height.saturating_sub(2),
        width,
        height: 1,
    };

    frame.render_widget(Clear, toast_area);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme::BG_SURFACE)),
        toast_area,
    );
}
