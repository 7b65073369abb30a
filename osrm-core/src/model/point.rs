use std::fmt;

use geo::Coord;
use serde::Deserialize;

/// A WGS84 position, longitude first.
///
/// OSRM encodes coordinates as `[longitude, latitude]` in responses and as
/// `longitude,latitude` in request paths; [`Point`] keeps that ordering in
/// both directions.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use osrm_core::Point;
///
/// let point = Point::new(13.388860, 52.517037);
/// assert_eq!(point.to_string(), "13.38886,52.517037");
/// assert_eq!(Coord::from(point), Coord { x: 13.388860, y: 52.517037 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Point {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
}

impl Point {
    /// Construct a point from longitude and latitude.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl From<[f64; 2]> for Point {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<(f64, f64)> for Point {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<Coord<f64>> for Point {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.x, coord.y)
    }
}

impl From<Point> for Coord<f64> {
    fn from(point: Point) -> Self {
        Self {
            x: point.longitude,
            y: point.latitude,
        }
    }
}

/// Renders the request-path form `longitude,latitude`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.longitude, self.latitude)
    }
}
