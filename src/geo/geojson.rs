//! State boundaries from a GeoJSON `FeatureCollection`.
//!
//! The expected input is Natural Earth's admin-1 states/provinces layer
//! exported as GeoJSON: every feature carries a `postal` property and a
//! `Polygon` or `MultiPolygon` geometry in lon/lat degrees.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::projection::{CONUS_EXTENT, LambertConformal};
use super::{GeoError, MapGeometry, Ring, ShapeSource, StateShape};

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Properties>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Default, Deserialize)]
struct Properties {
    #[serde(default, alias = "POSTAL")]
    postal: Option<String>,
    #[serde(default, alias = "ADM0_A3")]
    adm0_a3: Option<String>,
    #[serde(default, alias = "ISO_A2")]
    iso_a2: Option<String>,
}

impl Properties {
    /// Features without country tags are assumed to be US states.
    fn is_us(&self) -> bool {
        match (&self.adm0_a3, &self.iso_a2) {
            (None, None) => true,
            (a3, a2) => a3.as_deref() == Some("USA") || a2.as_deref() == Some("US"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: serde_json::Value,
}

/// Positions may carry a third (altitude) value, which is ignored.
type Position = Vec<f64>;

pub struct GeoJsonSource {
    path: PathBuf,
    projection: LambertConformal,
}

impl GeoJsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            projection: LambertConformal::default(),
        }
    }

    fn parse_err(&self, source: serde_json::Error) -> GeoError {
        GeoError::ParseFailed {
            path: self.path.clone(),
            source,
        }
    }

    fn project_ring(&self, ring: &[Position]) -> Ring {
        ring.iter()
            .filter(|pos| pos.len() >= 2)
            .map(|pos| self.projection.project(pos[0], pos[1]))
            .collect()
    }

    /// Flatten a geometry into projected rings. Unsupported types yield none.
    fn rings(&self, geometry: Geometry) -> Result<Vec<Ring>, GeoError> {
        let coords = geometry.coordinates;
        let polygons: Vec<Vec<Vec<Position>>> = match geometry.kind.as_str() {
            "Polygon" => vec![serde_json::from_value(coords).map_err(|e| self.parse_err(e))?],
            "MultiPolygon" => serde_json::from_value(coords).map_err(|e| self.parse_err(e))?,
            other => {
                debug!(kind = other, "skipping unsupported geometry");
                Vec::new()
            }
        };
        Ok(polygons
            .iter()
            .flatten()
            .map(|ring| self.project_ring(ring))
            .filter(|ring| ring.len() >= 3)
            .collect())
    }
}

impl ShapeSource for GeoJsonSource {
    fn load(&self, codes: &[String]) -> Result<MapGeometry, GeoError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| GeoError::ReadFailed {
            path: self.path.clone(),
            source,
        })?;
        let collection: FeatureCollection =
            serde_json::from_str(&contents).map_err(|e| self.parse_err(e))?;

        let wanted: HashSet<&str> = codes.iter().map(String::as_str).collect();
        let mut shapes = Vec::new();
        for feature in collection.features {
            let props = feature.properties.unwrap_or_default();
            let Some(postal) = props.postal.as_deref() else {
                continue;
            };
            if !props.is_us() || !wanted.contains(postal) {
                continue;
            }
            let Some(geometry) = feature.geometry else {
                warn!(postal, "feature has no geometry");
                continue;
            };
            let rings = self.rings(geometry)?;
            if rings.is_empty() {
                continue;
            }
            shapes.push(StateShape {
                postal: postal.to_string(),
                rings,
                label_at: None,
            });
        }

        if shapes.is_empty() {
            return Err(GeoError::NoShapes(self.path.clone()));
        }
        let bounds = self.projection.extent_bounds(CONUS_EXTENT);
        let off_map: Vec<&str> = shapes
            .iter()
            .filter(|s| !s.rings.iter().flatten().any(|&(x, y)| bounds.contains(x, y)))
            .map(|s| s.postal.as_str())
            .collect();
        debug!(
            count = shapes.len(),
            ?off_map,
            path = %self.path.display(),
            "loaded state boundaries"
        );
        Ok(MapGeometry { shapes, bounds })
    }

    fn describe(&self) -> String {
        format!("boundaries from {}", self.path.display())
    }
}
