use super::{Bounds, Ring};

/// Sample grid laid over `bounds`: `cols` x `rows` cells, sampled at centers.
#[derive(Debug, Clone, Copy)]
pub struct SampleGrid {
    pub bounds: Bounds,
    pub cols: usize,
    pub rows: usize,
}

impl SampleGrid {
    pub fn new(bounds: Bounds, cols: usize, rows: usize) -> Self {
        Self { bounds, cols, rows }
    }

    fn dx(&self) -> f64 {
        self.bounds.width() / self.cols as f64
    }

    fn dy(&self) -> f64 {
        self.bounds.height() / self.rows as f64
    }

    /// Sample centers inside the rings, using the even-odd rule so holes
    /// stay empty.
    pub fn fill(&self, rings: &[Ring]) -> Vec<(f64, f64)> {
        let mut points = Vec::new();
        if self.cols == 0 || self.rows == 0 || self.bounds.is_empty() {
            return points;
        }
        let (dx, dy) = (self.dx(), self.dy());

        let mut shape_bounds = Bounds::empty();
        for &(x, y) in rings.iter().flatten() {
            shape_bounds.include(x, y);
        }
        if shape_bounds.y_max < self.bounds.y_min || shape_bounds.y_min > self.bounds.y_max {
            return points;
        }

        // Rows are numbered top-down; only visit the ones the shape spans.
        let first_row = ((self.bounds.y_max - shape_bounds.y_max) / dy - 0.5)
            .floor()
            .max(0.0) as usize;
        let last_row = (((self.bounds.y_max - shape_bounds.y_min) / dy - 0.5).ceil() as usize)
            .min(self.rows - 1);

        let mut crossings = Vec::new();
        for row in first_row..=last_row {
            let y = self.bounds.y_max - (row as f64 + 0.5) * dy;
            crossings.clear();
            for ring in rings {
                scanline_crossings(ring, y, &mut crossings);
            }
            crossings.sort_by(f64::total_cmp);

            for span in crossings.chunks_exact(2) {
                let start = ((span[0] - self.bounds.x_min) / dx - 0.5).ceil().max(0.0) as usize;
                let end = (((span[1] - self.bounds.x_min) / dx - 0.5).ceil().max(0.0) as usize)
                    .min(self.cols);
                for col in start..end {
                    points.push((self.bounds.x_min + (col as f64 + 0.5) * dx, y));
                }
            }
        }
        points
    }
}

/// X coordinates where the horizontal line at `y` crosses the ring's edges.
fn scanline_crossings(ring: &[(f64, f64)], y: f64, out: &mut Vec<f64>) {
    let n = ring.len();
    if n < 3 {
        return;
    }
    for i in 0..n {
        let (x1, y1) = ring[i];
        let (x2, y2) = ring[(i + 1) % n];
        if (y1 > y) != (y2 > y) {
            out.push(x1 + (y - y1) * (x2 - x1) / (y2 - y1));
        }
    }
}

/// Edges of a ring as line segments, including the closing edge.
pub fn ring_edges(ring: &[(f64, f64)]) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
    let n = ring.len();
    let count = if n < 2 { 0 } else { n };
    (0..count).map(move |i| (ring[i], ring[(i + 1) % n]))
}
