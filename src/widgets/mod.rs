pub mod empty_state;
pub mod event_detail;
pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod notice;
pub mod search_bar;
pub mod timeline;

use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::{App, Overlay};
use crate::theme;

pub fn draw(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(theme::BG_DARK)), area);

    let layout = Layout::vertical([
        Constraint::Length(2), // Title
        Constraint::Length(3), // Search fields
        Constraint::Fill(1),   // Timeline + detail
        Constraint::Length(1), // Footer
    ])
    .split(area);

    header::render(frame, layout[0]);
    search_bar::render(app, frame, layout[1]);

    if app.is_empty_result() {
        timeline::render(app, frame, layout[2]);
    } else {
        let content = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(layout[2]);
        timeline::render(app, frame, content[0]);
        event_detail::render(app, frame, content[1]);
    }

    footer::render(app, frame, layout[3]);

    if app.overlay == Overlay::Help {
        help_overlay::render(frame, area);
    }

    notice::render(app, frame, area);
}
