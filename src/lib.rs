//! Facade crate for the OSRM client.
//!
//! This crate re-exports the request and response model from `osrm-core`
//! and, behind the default `http` feature, the reqwest-backed blocking and
//! suspending clients from `osrm-http`.
//!
//! # Examples
//!
//! ```
//! use osrm_client::{CoordinateRequest, Point, Service, Settings, TripOptions, TripSource};
//!
//! let coords = [Point::new(0.1, 0.2), Point::new(0.3, 0.4)];
//! let options = TripOptions::default().with_source(TripSource::First);
//! let path = CoordinateRequest::new(&coords, &options).path(&Settings::default());
//! assert!(path.starts_with("trip/v1/driving/0.1,0.2;0.3,0.4?"));
//! assert!(path.contains("source=first"));
//! ```

#![forbid(unsafe_code)]

pub use osrm_core::{
    Annotation, AsyncTransport, ContinueStraight, CoordinateRequest, DEFAULT_API_VERSION,
    DEFAULT_PROFILE, Entry, Geometries, Geometry, Intersection, Lane, MatchOptions,
    MatchResponse, ModelError, NearestOptions, NearestResponse, OsrmError, Overview, Point,
    RawResponse, Route, RouteLeg, RouteOptions, RouteResponse, RouteStep, Service,
    ServiceResponse, ServiceStatus, Settings, StepManeuver, TableAnnotations, TableOptions,
    TableResponse, TileRequest, TileResponse, Transport, TransportError, TripDestination,
    TripOptions, TripResponse, TripSource, Waypoint, interpret,
};

#[cfg(feature = "http")]
pub use osrm_http::{
    BlockingHttpTransport, ClientBuildError, ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT,
    HttpTransport, OsrmAsyncClient, OsrmClient,
};
