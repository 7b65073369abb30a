//! Route result objects: routes, legs, steps and their nested parts.
//!
//! Each composite constructor pulls its nested objects (legs, steps,
//! maneuvers, intersections, lanes, annotations) out of its own JSON level
//! and builds them recursively; flat fields are decoded in place.

use serde::Deserialize;
use serde_json::Value;

use super::fields::{Fields, FromJson};
use super::geometry::Geometry;
use super::point::Point;
use crate::error::ModelError;

/// A turn lane at the location of an intersection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    /// Turn indications painted on the lane, e.g. `left` or `straight`.
    pub indications: Vec<String>,
    /// Whether the lane can be taken to follow the route.
    pub valid: bool,
}

impl FromJson for Lane {
    const ENTITY: &'static str = "Lane";

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let fields = Fields::of::<Self>(value)?;
        Ok(Self {
            indications: fields.required("indications")?,
            valid: fields.required("valid")?,
        })
    }
}

/// One item of an intersection's `entry` list.
///
/// OSRM reports booleans; some deployments report string tags instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// Whether the road at this bearing may be entered.
    Flag(bool),
    /// Tag reported instead of a boolean.
    Tag(String),
}

/// A cross-way passed along a step.
///
/// The first intersection of a step sits at the maneuver location.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    /// Location of the intersection.
    pub location: Point,
    /// Bearings of every road meeting at the intersection.
    pub bearings: Vec<f64>,
    /// Entry flags, parallel to `bearings`.
    pub entry: Vec<Entry>,
    /// Index into `bearings` of the road the route arrives on (`in`).
    /// Absent on the first intersection of a route.
    pub in_index: Option<usize>,
    /// Index into `bearings` of the road the route leaves on.
    /// Absent on the final intersection of a route.
    pub out: Option<usize>,
    /// Turn lanes; empty when the engine has no lane data.
    pub lanes: Vec<Lane>,
}

impl FromJson for Intersection {
    const ENTITY: &'static str = "Intersection";

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let fields = Fields::of::<Self>(value)?;
        Ok(Self {
            location: fields.required("location")?,
            bearings: fields.required("bearings")?,
            entry: fields.required("entry")?,
            in_index: fields.optional("in")?,
            out: fields.optional("out")?,
            lanes: fields.nested_list_or_empty("lanes")?,
        })
    }
}

/// The instruction at the start of a step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepManeuver {
    /// Location of the turn.
    pub location: Point,
    /// Bearing of travel immediately before the maneuver.
    pub bearing_before: f64,
    /// Bearing of travel immediately after the maneuver.
    pub bearing_after: f64,
    /// Maneuver type (`type` on the wire), e.g. `turn` or `depart`.
    pub kind: String,
    /// Direction change, e.g. `sharp left`.
    pub modifier: Option<String>,
    /// Exit number for roundabouts and rotaries.
    pub exit: Option<u32>,
}

impl FromJson for StepManeuver {
    const ENTITY: &'static str = "StepManeuver";

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let fields = Fields::of::<Self>(value)?;
        Ok(Self {
            location: fields.required("location")?,
            bearing_before: fields.required("bearing_before")?,
            bearing_after: fields.required("bearing_after")?,
            kind: fields.required("type")?,
            modifier: fields.optional("modifier")?,
            exit: fields.optional("exit")?,
        })
    }
}

/// Road reference as reported on the wire: usually text, occasionally numeric.
#[derive(Deserialize)]
#[serde(untagged)]
enum RoadRef {
    Text(String),
    Number(serde_json::Number),
}

impl From<RoadRef> for String {
    fn from(reference: RoadRef) -> Self {
        match reference {
            RoadRef::Text(text) => text,
            RoadRef::Number(number) => number.to_string(),
        }
    }
}

/// A maneuver followed by travel along a single way.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStep {
    /// Name of the way travelled along.
    pub name: String,
    /// Mode of transportation, e.g. `driving`.
    pub mode: String,
    /// Distance travelled in metres.
    pub distance: f64,
    /// Estimated travel time in seconds.
    pub duration: f64,
    /// Routing weight of the step, when reported.
    pub weight: Option<f64>,
    /// Geometry of the step.
    pub geometry: Geometry,
    /// Road reference (`ref` on the wire), e.g. `A 100`.
    pub reference: Option<String>,
    /// Pronunciation hint for the way name.
    pub pronunciation: Option<String>,
    /// Instruction at the start of the step.
    pub maneuver: StepManeuver,
    /// Cross-ways passed along the step, in travel order.
    pub intersections: Vec<Intersection>,
}

impl FromJson for RouteStep {
    const ENTITY: &'static str = "RouteStep";

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let fields = Fields::of::<Self>(value)?;
        Ok(Self {
            name: fields.required("name")?,
            mode: fields.required("mode")?,
            distance: fields.required("distance")?,
            duration: fields.required("duration")?,
            weight: fields.optional("weight")?,
            geometry: fields.required("geometry")?,
            reference: fields.optional::<RoadRef>("ref")?.map(String::from),
            pronunciation: fields.optional("pronunciation")?,
            maneuver: fields.nested("maneuver")?,
            intersections: fields.nested_list("intersections")?,
        })
    }
}

/// Per-segment metadata along a leg.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Distance in metres between consecutive coordinates.
    pub distance: Vec<f64>,
    /// Duration in seconds between consecutive coordinates.
    pub duration: Vec<f64>,
    /// Index of the data source used for each segment's speed.
    pub datasources: Vec<u32>,
    /// OSM node ids along the leg.
    pub nodes: Vec<u64>,
}

impl FromJson for Annotation {
    const ENTITY: &'static str = "Annotation";

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let fields = Fields::of::<Self>(value)?;
        Ok(Self {
            distance: fields.required("distance")?,
            duration: fields.required("duration")?,
            datasources: fields.required("datasources")?,
            nodes: fields.required("nodes")?,
        })
    }
}

/// The part of a route between two consecutive waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    /// Distance in metres.
    pub distance: f64,
    /// Estimated travel time in seconds.
    pub duration: f64,
    /// Routing weight of the leg, when reported.
    pub weight: Option<f64>,
    /// Names of the most prominent roads along the leg.
    pub summary: Option<String>,
    /// Turn-by-turn steps; empty unless steps were requested.
    pub steps: Vec<RouteStep>,
    /// Segment metadata, present only when annotations were requested.
    pub annotation: Option<Annotation>,
}

impl FromJson for RouteLeg {
    const ENTITY: &'static str = "RouteLeg";

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let fields = Fields::of::<Self>(value)?;
        Ok(Self {
            distance: fields.required("distance")?,
            duration: fields.required("duration")?,
            weight: fields.optional("weight")?,
            summary: fields.optional("summary")?,
            steps: fields.nested_list_or_empty("steps")?,
            annotation: fields.optional_nested("annotation")?,
        })
    }
}

/// A route through two or more waypoints.
///
/// Also used for match `matchings` and trip `trips`, which add `confidence`.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Distance in metres.
    pub distance: f64,
    /// Estimated travel time in seconds.
    pub duration: f64,
    /// Routing weight of the route, when reported.
    pub weight: Option<f64>,
    /// Name of the weighting used by the profile, when reported.
    pub weight_name: Option<String>,
    /// Overview geometry; absent when requested with `overview=false`.
    pub geometry: Option<Geometry>,
    /// Legs between consecutive waypoints.
    pub legs: Vec<RouteLeg>,
    /// Matching confidence in `[0, 1]`, reported by the match service.
    pub confidence: Option<f64>,
}

impl FromJson for Route {
    const ENTITY: &'static str = "Route";

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let fields = Fields::of::<Self>(value)?;
        Ok(Self {
            distance: fields.required("distance")?,
            duration: fields.required("duration")?,
            weight: fields.optional("weight")?,
            weight_name: fields.optional("weight_name")?,
            geometry: fields.optional("geometry")?,
            legs: fields.nested_list("legs")?,
            confidence: fields.optional("confidence")?,
        })
    }
}
