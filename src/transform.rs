use crate::constants::{EXTENT_EPSILON, MAP_MARGIN_FACTOR};
use crate::models::Station;

/// Uniform scale plus centering offsets mapping network coordinates onto a
/// drawing surface.
///
/// Building one is a single pass over the stations, so it is recomputed
/// whenever the surface size may have changed (every render frame and every
/// pointer query) instead of cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapTransform {
    min_x: f64,
    min_y: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl MapTransform {
    /// No-op transform for an empty network.
    pub const IDENTITY: Self = Self {
        min_x: 0.0,
        min_y: 0.0,
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    /// Fit all stations onto a surface, keeping a margin and centering the
    /// network. A zero-extent network (single station) lands at the surface
    /// center; the epsilon keeps the scale finite in that case.
    #[must_use]
    pub fn fit(stations: &[Station], surface_width: f64, surface_height: f64) -> Self {
        let Some(first) = stations.first() else {
            return Self::IDENTITY;
        };

        let mut min_x = first.x;
        let mut max_x = first.x;
        let mut min_y = first.y;
        let mut max_y = first.y;
        for station in stations {
            min_x = min_x.min(station.x);
            max_x = max_x.max(station.x);
            min_y = min_y.min(station.y);
            max_y = max_y.max(station.y);
        }

        let scale_x = surface_width / (max_x - min_x + EXTENT_EPSILON);
        let scale_y = surface_height / (max_y - min_y + EXTENT_EPSILON);
        let scale = scale_x.min(scale_y) * MAP_MARGIN_FACTOR;

        // Offsets are rounded so projected output stays on whole pixels.
        Self {
            min_x,
            min_y,
            scale,
            offset_x: ((surface_width - (max_x - min_x) * scale) / 2.0).round(),
            offset_y: ((surface_height - (max_y - min_y) * scale) / 2.0).round(),
        }
    }

    /// Project network coordinates to rounded surface coordinates.
    #[must_use]
    pub fn project(&self, x: f64, y: f64) -> (f64, f64) {
        (
            ((x - self.min_x) * self.scale).round() + self.offset_x,
            ((y - self.min_y) * self.scale).round() + self.offset_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(code: &str, x: f64, y: f64) -> Station {
        Station {
            name: code.to_string(),
            code: code.to_string(),
            number: "1".to_string(),
            x,
            y,
        }
    }

    #[test]
    fn test_empty_network_is_identity() {
        let transform = MapTransform::fit(&[], 800.0, 600.0);
        assert_eq!(transform, MapTransform::IDENTITY);
        assert_eq!(transform.project(5.0, 7.0), (5.0, 7.0));
    }

    #[test]
    fn test_single_station_lands_at_center() {
        let stations = vec![station("R01", 42.0, 17.0)];
        let transform = MapTransform::fit(&stations, 800.0, 600.0);

        let (x, y) = transform.project(42.0, 17.0);
        assert_eq!((x, y), (400.0, 300.0));
    }

    #[test]
    fn test_fit_is_deterministic() {
        let stations = vec![
            station("R01", 0.0, 0.0),
            station("R02", 10.0, 5.0),
            station("R03", 20.0, 3.0),
        ];
        let a = MapTransform::fit(&stations, 1200.0, 700.0);
        let b = MapTransform::fit(&stations, 1200.0, 700.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_network_is_centered_and_within_margin() {
        let stations = vec![station("R01", 0.0, 0.0), station("R02", 10.0, 10.0)];
        let transform = MapTransform::fit(&stations, 100.0, 100.0);

        let (x0, y0) = transform.project(0.0, 0.0);
        let (x1, y1) = transform.project(10.0, 10.0);

        // The margin factor keeps 85% of the surface for the network.
        assert!((x1 - x0 - 85.0).abs() < 1.0);
        assert!((y1 - y0 - 85.0).abs() < 1.0);

        // Symmetric slack on both sides, up to rounding.
        assert!((x0 - (100.0 - (x1 - x0)) / 2.0).abs() < 1.0);
        assert!((y0 - (100.0 - (y1 - y0)) / 2.0).abs() < 1.0);
    }

    #[test]
    fn test_scale_uses_limiting_axis() {
        // Wide network on a square surface: the x axis limits the scale.
        let stations = vec![station("R01", 0.0, 0.0), station("R02", 100.0, 10.0)];
        let transform = MapTransform::fit(&stations, 200.0, 200.0);

        let (x0, _) = transform.project(0.0, 0.0);
        let (x1, y1) = transform.project(100.0, 10.0);
        assert!(x1 - x0 <= 200.0 * 0.85 + 0.5);
        assert!(y1 <= 200.0);
    }

    #[test]
    fn test_projection_is_rounded() {
        let stations = vec![station("R01", 0.0, 0.0), station("R02", 3.0, 3.0)];
        let transform = MapTransform::fit(&stations, 100.0, 100.0);

        let (x, y) = transform.project(1.0, 2.0);
        assert_eq!(x, x.round());
        assert_eq!(y, y.round());
    }
}
