pub mod text_overlay;

pub use text_overlay::TextOverlay;

use ratatui::prelude::*;

/// Calculate a centered rect of given percentage within `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Rect of `width` x `height` anchored to a corner of `area`, clamped to fit.
pub fn corner_rect(area: Rect, width: u16, height: u16, bottom: bool) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let y = if bottom {
        area.y + area.height - height
    } else {
        area.y
    };
    Rect::new(area.x, y, width, height)
}
