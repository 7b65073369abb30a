//! Top-level response envelopes, one per service.
//!
//! JSON envelopes parse their mandatory `code` first and then their
//! service-specific collections. The tile service answers with protobuf, so
//! [`TileResponse`] keeps the body as opaque bytes.

use serde_json::Value;

use super::fields::{Fields, FromJson};
use super::route::Route;
use super::status::ServiceStatus;
use super::waypoint::Waypoint;
use crate::error::ModelError;

/// Materialise a typed response from a successful response body.
pub trait ServiceResponse: Sized {
    /// Build the response from the raw body bytes.
    ///
    /// # Errors
    /// Returns [`ModelError`] when the body does not fit the response model.
    fn from_body(body: &[u8]) -> Result<Self, ModelError>;
}

fn decode_json<T: FromJson>(body: &[u8]) -> Result<T, ModelError> {
    let value: Value = serde_json::from_slice(body).map_err(|err| ModelError::InvalidJson {
        message: err.to_string(),
    })?;
    T::from_json(&value)
}

fn status(fields: &Fields<'_>) -> Result<ServiceStatus, ModelError> {
    fields.required::<String>("code")?.parse()
}

macro_rules! json_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ServiceResponse for $ty {
                fn from_body(body: &[u8]) -> Result<Self, ModelError> {
                    decode_json(body)
                }
            }
        )+
    };
}

json_response!(
    NearestResponse,
    RouteResponse,
    TableResponse,
    MatchResponse,
    TripResponse,
);

/// Result of the `nearest` service.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestResponse {
    /// Service status.
    pub code: ServiceStatus,
    /// Nearest street positions, closest first.
    pub waypoints: Vec<Waypoint>,
}

impl FromJson for NearestResponse {
    const ENTITY: &'static str = "NearestResponse";

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let fields = Fields::of::<Self>(value)?;
        Ok(Self {
            code: status(&fields)?,
            waypoints: fields.nested_list("waypoints")?,
        })
    }
}

/// Result of the `route` service.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResponse {
    /// Service status.
    pub code: ServiceStatus,
    /// Input coordinates snapped to the network, in input order.
    pub waypoints: Vec<Waypoint>,
    /// The best route first, followed by any alternatives.
    pub routes: Vec<Route>,
}

impl FromJson for RouteResponse {
    const ENTITY: &'static str = "RouteResponse";

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let fields = Fields::of::<Self>(value)?;
        Ok(Self {
            code: status(&fields)?,
            waypoints: fields.nested_list("waypoints")?,
            routes: fields.nested_list("routes")?,
        })
    }
}

/// Result of the `table` service.
#[derive(Debug, Clone, PartialEq)]
pub struct TableResponse {
    /// Service status.
    pub code: ServiceStatus,
    /// Travel times in seconds, one row per source; `None` marks an
    /// unreachable pair.
    pub durations: Vec<Vec<Option<f64>>>,
    /// Travel distances in metres, present when requested through
    /// the `annotations` option.
    pub distances: Option<Vec<Vec<Option<f64>>>>,
    /// Snapped source positions.
    pub sources: Vec<Waypoint>,
    /// Snapped destination positions.
    pub destinations: Vec<Waypoint>,
}

impl FromJson for TableResponse {
    const ENTITY: &'static str = "TableResponse";

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let fields = Fields::of::<Self>(value)?;
        Ok(Self {
            code: status(&fields)?,
            durations: fields.required("durations")?,
            distances: fields.optional("distances")?,
            sources: fields.nested_list("sources")?,
            destinations: fields.nested_list("destinations")?,
        })
    }
}

/// Result of the `match` service.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResponse {
    /// Service status.
    pub code: ServiceStatus,
    /// One entry per input coordinate; `None` where the point was treated
    /// as an outlier and left unmatched.
    pub tracepoints: Vec<Option<Waypoint>>,
    /// Routes the trace was matched to.
    pub matchings: Vec<Route>,
}

impl FromJson for MatchResponse {
    const ENTITY: &'static str = "MatchResponse";

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let fields = Fields::of::<Self>(value)?;
        Ok(Self {
            code: status(&fields)?,
            tracepoints: fields.nullable_list("tracepoints")?,
            matchings: fields.nested_list("matchings")?,
        })
    }
}

/// Result of the `trip` service.
#[derive(Debug, Clone, PartialEq)]
pub struct TripResponse {
    /// Service status.
    pub code: ServiceStatus,
    /// Input coordinates with their position in the computed trip.
    pub waypoints: Vec<Waypoint>,
    /// Round trips visiting the waypoints.
    pub trips: Vec<Route>,
}

impl FromJson for TripResponse {
    const ENTITY: &'static str = "TripResponse";

    fn from_json(value: &Value) -> Result<Self, ModelError> {
        let fields = Fields::of::<Self>(value)?;
        Ok(Self {
            code: status(&fields)?,
            waypoints: fields.nested_list("waypoints")?,
            trips: fields.nested_list("trips")?,
        })
    }
}

/// Result of the `tile` service: a Mapbox Vector Tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileResponse {
    /// Protobuf-encoded tile bytes, as served.
    pub data: Vec<u8>,
}

impl ServiceResponse for TileResponse {
    fn from_body(body: &[u8]) -> Result<Self, ModelError> {
        Ok(Self {
            data: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const NEAREST: &str = include_str!("../../tests/fixtures/nearest.json");
    const ROUTE: &str = include_str!("../../tests/fixtures/route.json");
    const TABLE: &str = include_str!("../../tests/fixtures/table.json");
    const MATCH: &str = include_str!("../../tests/fixtures/match.json");
    const TRIP: &str = include_str!("../../tests/fixtures/trip.json");

    #[rstest]
    fn nearest_keeps_waypoint_order() {
        let nearest = NearestResponse::from_body(NEAREST.as_bytes()).expect("nearest parses");
        assert_eq!(nearest.code, ServiceStatus::Ok);
        let names: Vec<&str> = nearest.waypoints.iter().map(|wp| wp.name.as_str()).collect();
        assert_eq!(names, vec!["thename0", "thename1"]);
        assert!(nearest.waypoints.iter().all(|wp| wp.distance == 433_333.1));
    }

    #[rstest]
    fn route_parses_nested_route_tree() {
        let response = RouteResponse::from_body(ROUTE.as_bytes()).expect("route parses");
        assert_eq!(response.waypoints.len(), 2);
        assert_eq!(response.routes.len(), 1);
        let route = &response.routes[0];
        assert_eq!(route.distance, 0.1);
        assert_eq!(route.weight_name.as_deref(), Some("routability"));
        assert_eq!(route.legs[0].steps[0].name, "thename");
        assert_eq!(route.legs[0].steps[0].maneuver.kind, "blblbl");
    }

    #[rstest]
    fn table_reads_duration_matrix() {
        let table = TableResponse::from_body(TABLE.as_bytes()).expect("table parses");
        assert_eq!(table.durations.len(), 2);
        assert!(table.durations.iter().all(|row| row.len() == 2));
        assert_eq!(table.durations[0][1], Some(5.2));
        assert_eq!(table.sources[1].name, "thesource1");
        assert_eq!(table.destinations[0].name, "thedest0");
        assert_eq!(table.distances, None);
    }

    #[rstest]
    fn table_marks_unreachable_pairs() {
        let body = br#"{
            "code": "Ok",
            "durations": [[0.0, null]],
            "distances": [[0.0, null]],
            "sources": [],
            "destinations": []
        }"#;
        let table = TableResponse::from_body(body).expect("table parses");
        assert_eq!(table.durations, vec![vec![Some(0.0), None]]);
        assert_eq!(table.distances, Some(vec![vec![Some(0.0), None]]));
    }

    #[rstest]
    fn match_keeps_unmatched_tracepoints() {
        let response = MatchResponse::from_body(MATCH.as_bytes()).expect("match parses");
        assert_eq!(response.tracepoints.len(), 2);
        let first = response.tracepoints[0].as_ref().expect("first point matched");
        assert_eq!(first.hint, "thehint0");
        assert_eq!(first.matchings_index, Some(0));
        assert!(response.tracepoints[1].is_none());
        assert_eq!(response.matchings[0].confidence, Some(0.5));
    }

    #[rstest]
    fn trip_reads_waypoint_indices() {
        let response = TripResponse::from_body(TRIP.as_bytes()).expect("trip parses");
        assert_eq!(response.waypoints[0].trips_index, Some(0));
        assert_eq!(response.waypoints[0].waypoint_index, Some(0));
        assert_eq!(response.trips[0].legs[0].steps[0].maneuver.kind, "blblbl");
    }

    #[rstest]
    fn unknown_code_fails_to_parse() {
        let body = br#"{"code": "Fine", "waypoints": []}"#;
        let err = NearestResponse::from_body(body).expect_err("unknown code");
        assert_eq!(
            err,
            ModelError::UnknownStatus {
                value: "Fine".to_owned()
            }
        );
    }

    #[rstest]
    fn missing_code_is_reported_first() {
        let err = RouteResponse::from_body(b"{}").expect_err("code is mandatory");
        assert_eq!(
            err,
            ModelError::MissingField {
                entity: "RouteResponse",
                field: "code"
            }
        );
    }

    #[rstest]
    #[case(b"not json".as_slice())]
    #[case(b"".as_slice())]
    fn invalid_json_is_reported(#[case] body: &[u8]) {
        let err = TripResponse::from_body(body).expect_err("body is not JSON");
        assert!(matches!(err, ModelError::InvalidJson { .. }));
    }

    #[rstest]
    fn tile_keeps_bytes_verbatim() {
        let body = [0x1a, 0x00, 0xff, 0x42];
        let tile = TileResponse::from_body(&body).expect("tiles never fail");
        assert_eq!(tile.data, body.to_vec());
    }
}
