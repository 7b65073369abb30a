use serde::Deserialize;

use super::point::Point;

/// Route or step geometry in whichever format the request asked for.
///
/// `polyline` and `polyline6` requests yield [`Geometry::Encoded`]; `geojson`
/// requests yield [`Geometry::GeoJson`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Geometry {
    /// Encoded polyline string (precision 5 or 6).
    Encoded(String),
    /// GeoJSON `LineString` object.
    GeoJson(LineString),
}

impl Geometry {
    /// Borrow the encoded polyline, if this is one.
    #[must_use]
    pub const fn as_encoded(&self) -> Option<&str> {
        match self {
            Self::Encoded(polyline) => Some(polyline.as_str()),
            Self::GeoJson(_) => None,
        }
    }
}

/// GeoJSON `LineString` as returned with `geometries=geojson`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineString {
    /// Vertices in longitude-latitude order.
    pub coordinates: Vec<Point>,
}

impl From<LineString> for geo::LineString<f64> {
    fn from(line: LineString) -> Self {
        line.coordinates.into_iter().map(geo::Coord::from).collect()
    }
}
