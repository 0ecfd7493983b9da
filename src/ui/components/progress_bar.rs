use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::ui::theme::Palette;

pub struct ProgressBar<'a> {
    pub label: String,
    pub ratio: f64,
    pub palette: &'a Palette,
}

impl<'a> ProgressBar<'a> {
    pub fn new(label: &str, ratio: f64, palette: &'a Palette) -> Self {
        Self {
            label: label.to_string(),
            ratio: ratio.clamp(0.0, 1.0),
            palette,
        }
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!(" {} ", self.label))
            .border_style(Style::default().fg(self.palette.border));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let filled_width = (self.ratio * inner.width as f64) as u16;
        for x in inner.x..inner.x + inner.width {
            let bg = if x < inner.x + filled_width {
                self.palette.bar_filled
            } else {
                self.palette.bar_empty
            };
            buf[(x, inner.y)].set_style(Style::default().bg(bg));
        }

        let label = format!("{:.0}%", self.ratio * 100.0);
        let label_x = inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
        buf.set_string(label_x, inner.y, &label, Style::default().fg(self.palette.fg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_is_clamped() {
        let palette = Palette::default();
        assert_eq!(ProgressBar::new("x", 1.7, &palette).ratio, 1.0);
        assert_eq!(ProgressBar::new("x", -0.2, &palette).ratio, 0.0);
    }

    #[test]
    fn test_renders_percentage_label() {
        let palette = Palette::default();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        ProgressBar::new("Lesson", 0.5, &palette).render(area, &mut buf);
        let row: String = (0..area.width).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("50%"));
    }
}
