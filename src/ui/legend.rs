use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::Palette;
use crate::tracker::Progress;

const SWATCH: &str = "\u{2588}\u{2588}";

/// Two-entry key for the map colors, with live counts.
pub struct Legend {
    progress: Progress,
    palette: Palette,
}

impl Legend {
    pub fn new(progress: Progress) -> Self {
        Self {
            progress,
            palette: Palette::default(),
        }
    }

    fn entries(&self) -> [(Color, String); 2] {
        [
            (self.palette.had, self.progress.had_label()),
            (self.palette.not_had, self.progress.not_had_label()),
        ]
    }

    /// Width and height needed to show every entry inside a border.
    pub fn size(&self) -> (u16, u16) {
        let widest = self
            .entries()
            .iter()
            .map(|(_, label)| label.chars().count())
            .max()
            .unwrap_or(0);
        // Border (2) + swatch (2) + space (1).
        ((widest + 5) as u16, 4)
    }
}

impl Widget for &Legend {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line<'_>> = self
            .entries()
            .into_iter()
            .map(|(color, label)| {
                Line::from(vec![
                    Span::styled(SWATCH, Style::default().fg(color)),
                    Span::raw(" "),
                    Span::raw(label),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
