use ratatui::style::{Modifier, Style};
use serde::Serialize;

use crate::theme;

/// Style token for a category badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Primary,
    Secondary,
    Accent,
    Purple,
    Neutral,
}

static CATEGORY_BADGES: &[(&str, Badge)] = &[
    ("Военная история", Badge::Primary),
    ("Космонавтика", Badge::Secondary),
    ("Политика", Badge::Accent),
    ("Социальные реформы", Badge::Purple),
];

/// Exact-match lookup; unknown categories get [`Badge::Neutral`].
pub fn badge_for(category: &str) -> Badge {
    CATEGORY_BADGES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, badge)| *badge)
        .unwrap_or(Badge::Neutral)
}

impl Badge {
    pub fn style(self) -> Style {
        let (fg, bg) = match self {
            Self::Primary => (theme::TEXT_ON_BADGE, theme::PRIMARY),
            Self::Secondary => (theme::TEXT_ON_BADGE, theme::SECONDARY),
            Self::Accent => (theme::TEXT_ON_BADGE, theme::ACCENT),
            Self::Purple => (theme::TEXT, theme::PURPLE),
            Self::Neutral => (theme::TEXT, theme::GRAY),
        };
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
    }
}
