//! Typed response model.
//!
//! Entities are immutable snapshots built once from a decoded JSON body.
//! Every composite entity constructs its nested entities recursively through
//! [`FromJson`].

mod fields;
mod geometry;
mod point;
mod response;
mod route;
mod status;
mod waypoint;

pub use fields::FromJson;
pub use geometry::{Geometry, LineString};
pub use point::Point;
pub use response::{
    MatchResponse, NearestResponse, RouteResponse, ServiceResponse, TableResponse, TileResponse,
    TripResponse,
};
pub use route::{Annotation, Entry, Intersection, Lane, Route, RouteLeg, RouteStep, StepManeuver};
pub use status::ServiceStatus;
pub use waypoint::Waypoint;
