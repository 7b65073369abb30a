//! Core types for the OSRM client.
//!
//! This crate holds everything that does not touch the network: the typed
//! response model, the request path builder, the per-service option sets,
//! the response interpreter and the transport contract the HTTP clients
//! implement. Both the blocking and the suspending client in `osrm-http`
//! are thin shells over these pieces.
//!
//! # Examples
//!
//! ```
//! use osrm_core::{CoordinateRequest, Point, RawResponse, RouteOptions, RouteResponse, Service, Settings, interpret};
//!
//! let coords = [Point::new(13.388860, 52.517037), Point::new(13.397634, 52.529407)];
//! let options = RouteOptions::default().with_steps(true);
//! let path = CoordinateRequest::new(&coords, &options).path(&Settings::default());
//! assert!(path.starts_with("route/v1/driving/13.38886,52.517037;13.397634,52.529407?"));
//!
//! let body = br#"{"code": "Ok", "waypoints": [], "routes": []}"#.to_vec();
//! let response: RouteResponse = interpret(RawResponse::new(200, body))?;
//! assert!(response.routes.is_empty());
//! # Ok::<(), osrm_core::OsrmError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod interpret;
pub mod model;
pub mod service;
pub mod transport;
pub mod url;

pub use error::{ModelError, OsrmError, TransportError};
pub use interpret::interpret;
pub use model::{
    Annotation, Entry, FromJson, Geometry, Intersection, Lane, LineString, MatchResponse,
    NearestResponse, Point, Route, RouteLeg, RouteResponse, RouteStep, ServiceResponse,
    ServiceStatus, StepManeuver, TableResponse, TileResponse, TripResponse, Waypoint,
};
pub use service::{
    ContinueStraight, CoordinateRequest, DEFAULT_API_VERSION, DEFAULT_PROFILE, Geometries,
    MatchOptions, NearestOptions, Overview, RouteOptions, Service, ServiceOptions, Settings,
    TableAnnotations, TableOptions, TileRequest, TripDestination, TripOptions, TripSource,
};
pub use transport::{AsyncTransport, RawResponse, Transport};
