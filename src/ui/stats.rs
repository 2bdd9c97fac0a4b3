use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tracker::Progress;

/// Rounded box with the progress summary line.
pub struct StatsBox {
    text: String,
}

impl StatsBox {
    pub fn new(progress: Progress) -> Self {
        Self {
            text: progress.summary(),
        }
    }

    pub fn size(&self) -> (u16, u16) {
        ((self.text.chars().count() + 4) as u16, 3)
    }
}

impl Widget for &StatsBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        Paragraph::new(Line::from(self.text.as_str()).bold())
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_lines;

    #[test]
    fn test_stats_box_renders_summary() {
        let stats = StatsBox::new(Progress { completed: 44, total: 50 });
        let (w, h) = stats.size();
        let area = Rect::new(0, 0, w, h);
        let mut buf = Buffer::empty(area);
        Widget::render(&stats, area, &mut buf);

        let lines = buffer_lines(&buf);
        assert!(lines[1].contains("Progress: 44/50 states (88.0%)"));
        assert!(lines[0].starts_with('\u{256d}'), "expected rounded corner");
    }
}
