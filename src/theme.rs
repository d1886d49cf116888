use ratatui::style::Color;

// Backgrounds
pub const BG_DARK: Color = Color::Rgb(18, 16, 28);
pub const BG_BAR: Color = Color::Rgb(24, 21, 38);
pub const BG_SURFACE: Color = Color::Rgb(30, 27, 48);
pub const BG_HIGHLIGHT: Color = Color::Rgb(44, 38, 72);

// Brand gradient stops
pub const PRIMARY: Color = Color::Rgb(139, 92, 246);
pub const SECONDARY: Color = Color::Rgb(59, 130, 246);
pub const ACCENT: Color = Color::Rgb(249, 115, 22);
pub const PURPLE: Color = Color::Rgb(168, 85, 247);
pub const GRAY: Color = Color::Rgb(107, 114, 128);

// Text
pub const TEXT: Color = Color::Rgb(230, 228, 240);
pub const TEXT_DIM: Color = Color::Rgb(150, 145, 175);
pub const TEXT_MUTED: Color = Color::Rgb(90, 85, 115);
pub const TEXT_ON_BADGE: Color = Color::Rgb(250, 250, 255);

// Semantic
pub const GREEN: Color = Color::Rgb(52, 211, 153);
pub const YELLOW: Color = Color::Rgb(251, 191, 36);
