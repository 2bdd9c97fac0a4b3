pub mod legend;
pub mod map;
pub mod menu;
pub mod overlay;
pub mod stats;

pub use legend::Legend;
pub use map::ChoroplethMap;
pub use menu::MenuBar;
pub use stats::StatsBox;

use ratatui::style::Color;

/// Colors used for the map and its legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub had: Color,
    pub not_had: Color,
    pub border: Color,
    pub label: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            had: Color::Rgb(0x44, 0xaa, 0x44),
            not_had: Color::Rgb(0xff, 0x44, 0x44),
            border: Color::Black,
            label: Color::White,
        }
    }
}

impl Palette {
    pub fn fill_for(&self, had: bool) -> Color {
        if had { self.had } else { self.not_had }
    }
}

/// Collect a buffer's symbols into one string per row. Test helper.
#[cfg(test)]
pub(crate) fn buffer_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buf.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
                .collect()
        })
        .collect()
}
