use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use levelup::lesson::{LessonView, MASK_CHAR};

use crate::ui::theme::Palette;

pub struct TypingArea<'a> {
    view: &'a LessonView,
    palette: &'a Palette,
    show_words: bool,
}

impl<'a> TypingArea<'a> {
    pub fn new(view: &'a LessonView, palette: &'a Palette, show_words: bool) -> Self {
        Self {
            view,
            palette,
            show_words,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CharRole {
    Cursor,
    Pending,
    Masked,
    Separator,
}

/// The first non-space character of the remaining text is where the learner
/// types next.
fn classify_remaining(remaining: &str) -> Vec<(char, CharRole)> {
    let mut cursor_placed = false;
    remaining
        .chars()
        .map(|ch| {
            let role = if ch == ' ' {
                CharRole::Separator
            } else if !cursor_placed {
                cursor_placed = true;
                CharRole::Cursor
            } else if ch == MASK_CHAR {
                CharRole::Masked
            } else {
                CharRole::Pending
            };
            (ch, role)
        })
        .collect()
}

impl Widget for TypingArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = self.palette;

        let mut spans = vec![Span::styled(
            self.view.done.clone(),
            Style::default().fg(colors.text_done),
        )];
        for (ch, role) in classify_remaining(&self.view.remaining) {
            let style = match role {
                CharRole::Cursor => Style::default().fg(colors.cursor_fg).bg(colors.cursor_bg),
                CharRole::Masked => Style::default()
                    .fg(colors.text_masked)
                    .add_modifier(Modifier::DIM),
                CharRole::Pending | CharRole::Separator => {
                    Style::default().fg(colors.text_pending)
                }
            };
            spans.push(Span::styled(ch.to_string(), style));
        }

        let mut lines = vec![Line::from(spans), Line::default()];
        if self.show_words && !self.view.words.is_empty() {
            let typed: Vec<&str> = self.view.words.iter().map(|w| w.display()).collect();
            lines.push(Line::from(Span::styled(
                typed.join(" "),
                Style::default().fg(colors.accent),
            )));
        }

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
