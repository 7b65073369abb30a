use serde_json::Value;

use super::fields::{Fields, FromJson};
use super::point::Point;
use crate::error::ModelError;

/// An input coordinate snapped onto the street network.
///
/// The index fields are only reported by the services that produce them:
/// `trips_index` by trip, `waypoint_index` by trip and match, and
/// `matchings_index` by match. They are `None` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Name of the street the coordinate snapped to.
    pub name: String,
    /// Snapped location.
    pub location: Point,
    /// Distance in metres from the input coordinate to the snapped location.
    pub distance: f64,
    /// Opaque token that speeds up repeated queries near this location.
    pub hint: String,
    /// Index of the trip this waypoint belongs to.
    pub trips_index: Option<usize>,
    /// Position of the waypoint within its trip or matching.
    pub waypoint_index: Option<usize>,
    /// Index of the matching this tracepoint belongs to.
    pub matchings_index: Option<usize>,
}

impl FromJson for Waypoint {
    const ENTITY: &'static str = "Waypoint";

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let fields = Fields::of::<Self>(value)?;
        Ok(Self {
            name: fields.required("name")?,
            location: fields.required("location")?,
            distance: fields.required("distance")?,
            hint: fields.required("hint")?,
            trips_index: fields.optional("trips_index")?,
            waypoint_index: fields.optional("waypoint_index")?,
            matchings_index: fields.optional("matchings_index")?,
        })
    }
}
