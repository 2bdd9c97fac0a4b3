use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders};

use super::Palette;
use crate::geo::MapGeometry;
use crate::geo::raster::{SampleGrid, ring_edges};
use crate::store::TrackingRecord;

/// Braille cells hold a 2x4 grid of dots.
const DOTS_PER_CELL_X: usize = 2;
const DOTS_PER_CELL_Y: usize = 4;

/// Choropleth of the tracked states, colored by whether each one is done.
pub struct ChoroplethMap<'a> {
    geometry: &'a MapGeometry,
    record: &'a TrackingRecord,
    title: &'a str,
    palette: Palette,
}

impl<'a> ChoroplethMap<'a> {
    pub fn new(geometry: &'a MapGeometry, record: &'a TrackingRecord, title: &'a str) -> Self {
        Self {
            geometry,
            record,
            title,
            palette: Palette::default(),
        }
    }

    /// Fill points per shape color, sampled at braille-dot resolution.
    fn fills(&self, grid: &SampleGrid) -> Vec<(Color, Vec<(f64, f64)>)> {
        self.geometry
            .shapes
            .iter()
            .map(|shape| {
                let color = self.palette.fill_for(self.record.has_had(&shape.postal));
                (color, grid.fill(&shape.rings))
            })
            .collect()
    }
}

impl Widget for &ChoroplethMap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(format!(" {} ", self.title)).bold().centered());
        let inner = block.inner(area);
        if inner.width == 0 || inner.height == 0 {
            block.render(area, buf);
            return;
        }

        let cols = usize::from(inner.width) * DOTS_PER_CELL_X;
        let rows = usize::from(inner.height) * DOTS_PER_CELL_Y;
        let bounds = self.geometry.bounds.fit_aspect(cols, rows);
        let grid = SampleGrid::new(bounds, cols, rows);
        let fills = self.fills(&grid);
        let palette = self.palette;
        let shapes = &self.geometry.shapes;

        Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([bounds.x_min, bounds.x_max])
            .y_bounds([bounds.y_min, bounds.y_max])
            .paint(|ctx| {
                for (color, coords) in &fills {
                    ctx.draw(&Points {
                        coords: coords.as_slice(),
                        color: *color,
                    });
                }
                ctx.layer();
                for shape in shapes.iter().filter(|s| s.label_at.is_none()) {
                    for ring in &shape.rings {
                        for ((x1, y1), (x2, y2)) in ring_edges(ring) {
                            ctx.draw(&CanvasLine::new(x1, y1, x2, y2, palette.border));
                        }
                    }
                }
                for shape in shapes {
                    if let Some((x, y)) = shape.label_at {
                        // Shift one cell left so the two letters straddle the center.
                        let x = x - bounds.width() / cols as f64 * DOTS_PER_CELL_X as f64;
                        ctx.print(
                            x,
                            y,
                            Span::styled(
                                shape.postal.clone(),
                                Style::default().fg(palette.label).bold(),
                            ),
                        );
                    }
                }
            })
            .render(area, buf);
    }
}
