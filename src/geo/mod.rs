pub mod geojson;
pub mod projection;
pub mod raster;
pub mod tiles;

pub use geojson::GeoJsonSource;
pub use tiles::TileGridSource;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("failed to read boundary file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse boundary file {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("boundary file {0} has no shapes for the tracked states")]
    NoShapes(PathBuf),
}

/// A closed ring of planar points. The closing edge is implied.
pub type Ring = Vec<(f64, f64)>;

/// Geometry for one state in planar map coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct StateShape {
    pub postal: String,
    /// Outer boundaries and holes together; fill uses the even-odd rule.
    pub rings: Vec<Ring>,
    /// Where to print the postal code, if the map labels states.
    pub label_at: Option<(f64, f64)>,
}

/// A set of shapes plus the region of the plane to show.
#[derive(Debug, Clone)]
pub struct MapGeometry {
    pub shapes: Vec<StateShape>,
    pub bounds: Bounds,
}

/// Anything that can produce state geometry for the map.
pub trait ShapeSource {
    /// Load shapes for the given postal codes.
    fn load(&self, states: &[String]) -> Result<MapGeometry, GeoError>;
    fn describe(&self) -> String;
}

/// Axis-aligned rectangle in planar map coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Inverted bounds that any `include` call will replace.
    pub fn empty() -> Self {
        Self::new(f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY)
    }

    pub fn include(&mut self, x: f64, y: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// Grow the shorter side so the bounds match a `cols` x `rows` grid of
    /// square samples, keeping the center fixed.
    pub fn fit_aspect(&self, cols: usize, rows: usize) -> Self {
        if cols == 0 || rows == 0 || self.is_empty() {
            return *self;
        }
        let target = cols as f64 / rows as f64;
        let current = self.width() / self.height();
        let (cx, cy) = (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        );
        let (half_w, half_h) = if current < target {
            (self.height() * target / 2.0, self.height() / 2.0)
        } else {
            (self.width() / 2.0, self.width() / target / 2.0)
        };
        Self::new(cx - half_w, cx + half_w, cy - half_h, cy + half_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_include() {
        let mut b = Bounds::empty();
        assert!(b.is_empty());
        b.include(1.0, 2.0);
        b.include(-1.0, 5.0);
        assert_eq!(b, Bounds::new(-1.0, 1.0, 2.0, 5.0));
        assert!(b.contains(0.0, 3.0));
        assert!(!b.contains(2.0, 3.0));
    }

    #[test]
    fn test_fit_aspect_widens() {
        let b = Bounds::new(0.0, 10.0, 0.0, 10.0);
        let fitted = b.fit_aspect(200, 100);
        assert_eq!(fitted, Bounds::new(-5.0, 15.0, 0.0, 10.0));
    }

    #[test]
    fn test_fit_aspect_heightens() {
        let b = Bounds::new(0.0, 10.0, 0.0, 10.0);
        let fitted = b.fit_aspect(100, 200);
        assert_eq!(fitted, Bounds::new(0.0, 10.0, -5.0, 15.0));
    }

    #[test]
    fn test_fit_aspect_degenerate_input() {
        let b = Bounds::new(0.0, 10.0, 0.0, 10.0);
        assert_eq!(b.fit_aspect(0, 10), b);
        assert_eq!(Bounds::empty().fit_aspect(10, 10), Bounds::empty());
    }
}
