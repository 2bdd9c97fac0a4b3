use super::Bounds;

/// Geographic extent as `[lon_min, lon_max, lat_min, lat_max]` in degrees.
pub type Extent = [f64; 4];

/// Contiguous US: the area the boundary map is cropped to.
pub const CONUS_EXTENT: Extent = [-125.0, -66.5, 20.0, 50.0];

/// Spherical Lambert Conformal Conic projection (unit sphere).
#[derive(Debug, Clone, Copy)]
pub struct LambertConformal {
    lon0: f64,
    n: f64,
    f: f64,
    rho0: f64,
}

impl Default for LambertConformal {
    /// Centered on the US: central meridian -96, origin 39N, standard
    /// parallels 33N and 45N.
    fn default() -> Self {
        Self::new(-96.0, 39.0, 33.0, 45.0)
    }
}

impl LambertConformal {
    pub fn new(central_lon: f64, origin_lat: f64, parallel1: f64, parallel2: f64) -> Self {
        let phi1 = parallel1.to_radians();
        let phi2 = parallel2.to_radians();
        let t = |phi: f64| (std::f64::consts::FRAC_PI_4 + phi / 2.0).tan();

        let n = if (parallel1 - parallel2).abs() < 1e-10 {
            phi1.sin()
        } else {
            (phi1.cos() / phi2.cos()).ln() / (t(phi2) / t(phi1)).ln()
        };
        let f = phi1.cos() * t(phi1).powf(n) / n;
        let rho0 = f / t(origin_lat.to_radians()).powf(n);

        Self {
            lon0: central_lon.to_radians(),
            n,
            f,
            rho0,
        }
    }

    /// Project a lon/lat pair in degrees to planar map coordinates.
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        // Clamp just short of the poles, where rho blows up.
        let phi = lat.clamp(-89.9, 89.9).to_radians();
        let rho = self.f / (std::f64::consts::FRAC_PI_4 + phi / 2.0).tan().powf(self.n);
        let theta = self.n * (lon.to_radians() - self.lon0);
        (rho * theta.sin(), self.rho0 - rho * theta.cos())
    }

    /// Planar bounding box of a geographic extent.
    ///
    /// Edges are sampled because parallels project to arcs, so the corners
    /// alone underestimate the box.
    pub fn extent_bounds(&self, extent: Extent) -> Bounds {
        const SAMPLES: usize = 32;
        let [lon_min, lon_max, lat_min, lat_max] = extent;
        let mut bounds = Bounds::empty();
        for i in 0..=SAMPLES {
            let t = i as f64 / SAMPLES as f64;
            let lon = lon_min + (lon_max - lon_min) * t;
            let lat = lat_min + (lat_max - lat_min) * t;
            for (x, y) in [
                self.project(lon, lat_min),
                self.project(lon, lat_max),
                self.project(lon_min, lat),
                self.project(lon_max, lat),
            ] {
                bounds.include(x, y);
            }
        }
        bounds
    }
}
