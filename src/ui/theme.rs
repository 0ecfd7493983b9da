use ratatui::style::Color;

/// Fixed colours for the lesson screen.
#[derive(Clone, Debug)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub text_done: Color,
    pub text_pending: Color,
    pub text_masked: Color,
    pub cursor_bg: Color,
    pub cursor_fg: Color,
    pub bar_filled: Color,
    pub bar_empty: Color,
    pub accent: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            border: Color::DarkGray,
            header_bg: Color::Blue,
            header_fg: Color::White,
            text_done: Color::Green,
            text_pending: Color::Gray,
            text_masked: Color::Yellow,
            cursor_bg: Color::White,
            cursor_fg: Color::Black,
            bar_filled: Color::Green,
            bar_empty: Color::DarkGray,
            accent: Color::Cyan,
        }
    }
}
