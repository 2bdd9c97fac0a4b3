use ratatui::prelude::*;

use crate::keys::KeyAction;

/// Key bindings shown in the menu bar, in display order.
const MENU_ACTIONS: &[KeyAction] = &[KeyAction::SwitchView, KeyAction::Help, KeyAction::Quit];

/// Shows available key bindings and the active map source at the bottom of
/// the screen.
pub struct MenuBar {
    source: String,
}

impl MenuBar {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }
}

impl Widget for &MenuBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans: Vec<Span<'_>> = Vec::new();

        for (i, action) in MENU_ACTIONS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                action.key_label(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(":"));
            spans.push(Span::styled(
                action.help_text(),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);

        let source = Line::from(Span::styled(
            self.source.as_str(),
            Style::default().fg(Color::DarkGray),
        ));
        let used = line.width() as u16 + 2;
        let width = source.width() as u16;
        if used + width <= area.width {
            buf.set_line(area.x + area.width - width, area.y, &source, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_lines;

    #[test]
    fn test_menu_bar_renders() {
        let menu = MenuBar::new("built-in tile grid");
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        Widget::render(&menu, area, &mut buf);

        let content = &buffer_lines(&buf)[0];
        assert!(content.contains("q:Quit"));
        assert!(content.contains("?:Help"));
        assert!(content.contains("Tab:Switch map"));
        assert!(content.trim_end().ends_with("built-in tile grid"));
    }

    #[test]
    fn test_menu_bar_hides_source_when_narrow() {
        let menu = MenuBar::new("boundaries from /a/very/long/path/to/states.geojson");
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        Widget::render(&menu, area, &mut buf);

        assert!(!buffer_lines(&buf)[0].contains("states.geojson"));
    }

    #[test]
    fn test_menu_bar_zero_area() {
        let menu = MenuBar::new("x");
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        // Should not panic
        Widget::render(&menu, area, &mut buf);
    }

    #[test]
    fn test_set_source() {
        let mut menu = MenuBar::new("a");
        menu.set_source("b");
        assert_eq!(menu.source, "b");
    }
}
