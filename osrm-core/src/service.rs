//! Request descriptions shared by the blocking and suspending clients.
//!
//! Each operation has an options struct whose [`Default`] matches the
//! service defaults used by the clients, and a [`Service`] implementation
//! that turns the request into a relative path given the client
//! [`Settings`].

use std::fmt;

use crate::model::{
    MatchResponse, NearestResponse, Point, RouteResponse, ServiceResponse, TableResponse,
    TileResponse, TripResponse,
};
use crate::url::{QueryOptions, QueryValue, build_service_path, build_tile_path};

/// API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Routing profile used when none is configured.
pub const DEFAULT_PROFILE: &str = "driving";

/// Immutable per-client path settings.
///
/// # Examples
/// ```
/// use osrm_core::Settings;
///
/// let settings = Settings::new("v1", "foot");
/// assert_eq!(settings.default_profile(), "foot");
/// assert_eq!(Settings::default().api_version(), "v1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    api_version: String,
    default_profile: String,
}

impl Settings {
    /// Create settings from an API version and default profile.
    #[must_use]
    pub fn new(api_version: impl Into<String>, default_profile: impl Into<String>) -> Self {
        Self {
            api_version: api_version.into(),
            default_profile: default_profile.into(),
        }
    }

    /// API version segment, e.g. `v1`.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Profile used when a request does not name one.
    #[must_use]
    pub fn default_profile(&self) -> &str {
        &self.default_profile
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_API_VERSION, DEFAULT_PROFILE)
    }
}

/// A fully described request that can be rendered into a path.
pub trait Service {
    /// Response type produced by a successful call.
    type Response: ServiceResponse;

    /// Relative request path (without the base URL).
    fn path(&self, settings: &Settings) -> String;
}

/// Options of a coordinate-based service.
pub trait ServiceOptions {
    /// Response type produced by a successful call.
    type Response: ServiceResponse;

    /// Service path segment, e.g. `route`.
    const SERVICE: &'static str;

    /// Profile override; `None` uses [`Settings::default_profile`].
    fn profile(&self) -> Option<&str>;

    /// Query options in wire order.
    fn query(&self) -> QueryOptions;
}

/// A coordinate list paired with the options of one service.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateRequest<'a, O> {
    /// Input coordinates, in the order they are sent.
    pub coordinates: &'a [Point],
    /// Service options.
    pub options: &'a O,
}

impl<'a, O: ServiceOptions> CoordinateRequest<'a, O> {
    /// Pair `coordinates` with `options`.
    #[must_use]
    pub const fn new(coordinates: &'a [Point], options: &'a O) -> Self {
        Self {
            coordinates,
            options,
        }
    }
}

impl<O: ServiceOptions> Service for CoordinateRequest<'_, O> {
    type Response = O::Response;

    fn path(&self, settings: &Settings) -> String {
        let profile = self
            .options
            .profile()
            .unwrap_or_else(|| settings.default_profile());
        build_service_path(
            O::SERVICE,
            settings.api_version(),
            profile,
            self.coordinates,
            &self.options.query(),
        )
    }
}

/// Vector tile coordinates in the slippy-map scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRequest {
    /// Tile column.
    pub x: u32,
    /// Tile row.
    pub y: u32,
    /// Zoom level.
    pub zoom: u32,
}

impl TileRequest {
    /// Describe the tile at `(x, y)` for `zoom`.
    #[must_use]
    pub const fn new(x: u32, y: u32, zoom: u32) -> Self {
        Self { x, y, zoom }
    }
}

impl Service for TileRequest {
    type Response = TileResponse;

    fn path(&self, settings: &Settings) -> String {
        build_tile_path(settings.api_version(), self.x, self.y, self.zoom)
    }
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $tag:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Return the wire tag for this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for QueryValue {
            fn from(value: $name) -> Self {
                Self::Tag(value.as_str())
            }
        }
    };
}

wire_enum! {
    /// Geometry encoding of routes and steps.
    Geometries {
        /// Polyline with precision 5.
        #[default]
        Polyline => "polyline",
        /// Polyline with precision 6.
        Polyline6 => "polyline6",
        /// GeoJSON `LineString`.
        GeoJson => "geojson",
    }
}

wire_enum! {
    /// Level of detail of the overview geometry.
    Overview {
        /// Simplified according to the highest zoom level it could be shown at.
        #[default]
        Simplified => "simplified",
        /// Full geometry.
        Full => "full",
        /// No overview geometry.
        False => "false",
    }
}

wire_enum! {
    /// Whether routes keep going straight at waypoints.
    ContinueStraight {
        /// Use the profile default.
        #[default]
        Default => "default",
        /// Forbid U-turns at waypoints.
        True => "true",
        /// Allow U-turns at waypoints.
        False => "false",
    }
}

wire_enum! {
    /// Where a computed trip starts.
    TripSource {
        /// Any coordinate may start the trip.
        #[default]
        Any => "any",
        /// The trip starts at the first coordinate.
        First => "first",
    }
}

wire_enum! {
    /// Where a computed trip ends.
    TripDestination {
        /// Any coordinate may end the trip.
        #[default]
        Any => "any",
        /// The trip ends at the last coordinate.
        Last => "last",
    }
}

wire_enum! {
    /// Matrices returned by the table service.
    TableAnnotations {
        /// Travel times only.
        #[default]
        Duration => "duration",
        /// Travel distances only.
        Distance => "distance",
        /// Both travel times and distances.
        DurationDistance => "duration,distance",
    }
}

/// Options of the `nearest` service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearestOptions {
    /// Profile override.
    pub profile: Option<String>,
    /// Number of nearest segments to return.
    pub number: u64,
}

impl NearestOptions {
    /// Use `profile` instead of the client default.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Return `number` nearest segments.
    #[must_use]
    pub const fn with_number(mut self, number: u64) -> Self {
        self.number = number;
        self
    }
}

impl Default for NearestOptions {
    fn default() -> Self {
        Self {
            profile: None,
            number: 1,
        }
    }
}

impl ServiceOptions for NearestOptions {
    type Response = NearestResponse;
    const SERVICE: &'static str = "nearest";

    fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    fn query(&self) -> QueryOptions {
        QueryOptions::new().with("number", self.number)
    }
}

/// Options of the `route` service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOptions {
    /// Profile override.
    pub profile: Option<String>,
    /// Search for alternative routes.
    pub alternatives: bool,
    /// Return turn-by-turn steps for each leg.
    pub steps: bool,
    /// Geometry encoding.
    pub geometries: Geometries,
    /// Overview geometry detail.
    pub overview: Overview,
    /// Return per-segment annotations.
    pub annotations: bool,
    /// U-turn policy at waypoints.
    pub continue_straight: ContinueStraight,
}

impl RouteOptions {
    /// Use `profile` instead of the client default.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Toggle alternative routes.
    #[must_use]
    pub const fn with_alternatives(mut self, alternatives: bool) -> Self {
        self.alternatives = alternatives;
        self
    }

    /// Toggle turn-by-turn steps.
    #[must_use]
    pub const fn with_steps(mut self, steps: bool) -> Self {
        self.steps = steps;
        self
    }

    /// Choose the geometry encoding.
    #[must_use]
    pub const fn with_geometries(mut self, geometries: Geometries) -> Self {
        self.geometries = geometries;
        self
    }

    /// Choose the overview detail.
    #[must_use]
    pub const fn with_overview(mut self, overview: Overview) -> Self {
        self.overview = overview;
        self
    }

    /// Toggle per-segment annotations.
    #[must_use]
    pub const fn with_annotations(mut self, annotations: bool) -> Self {
        self.annotations = annotations;
        self
    }

    /// Choose the U-turn policy.
    #[must_use]
    pub const fn with_continue_straight(mut self, continue_straight: ContinueStraight) -> Self {
        self.continue_straight = continue_straight;
        self
    }
}

impl ServiceOptions for RouteOptions {
    type Response = RouteResponse;
    const SERVICE: &'static str = "route";

    fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    fn query(&self) -> QueryOptions {
        QueryOptions::new()
            .with("alternatives", self.alternatives)
            .with("steps", self.steps)
            .with("geometries", self.geometries)
            .with("overview", self.overview)
            .with("annotations", self.annotations)
            .with("continue_straight", self.continue_straight)
    }
}

/// Options of the `table` service.
///
/// Empty `sources` or `destinations` select every coordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Profile override.
    pub profile: Option<String>,
    /// Indices of the coordinates used as sources.
    pub sources: Vec<usize>,
    /// Indices of the coordinates used as destinations.
    pub destinations: Vec<usize>,
    /// Matrices to compute; `None` leaves the server default (durations).
    pub annotations: Option<TableAnnotations>,
}

impl TableOptions {
    /// Use `profile` instead of the client default.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Restrict the sources to the given coordinate indices.
    #[must_use]
    pub fn with_sources(mut self, sources: Vec<usize>) -> Self {
        self.sources = sources;
        self
    }

    /// Restrict the destinations to the given coordinate indices.
    #[must_use]
    pub fn with_destinations(mut self, destinations: Vec<usize>) -> Self {
        self.destinations = destinations;
        self
    }

    /// Request specific matrices.
    #[must_use]
    pub const fn with_annotations(mut self, annotations: TableAnnotations) -> Self {
        self.annotations = Some(annotations);
        self
    }
}

fn indices_or_all(indices: &[usize]) -> QueryValue {
    if indices.is_empty() {
        QueryValue::Tag("all")
    } else {
        QueryValue::from(indices.to_vec())
    }
}

impl ServiceOptions for TableOptions {
    type Response = TableResponse;
    const SERVICE: &'static str = "table";

    fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    fn query(&self) -> QueryOptions {
        QueryOptions::new()
            .with("sources", indices_or_all(&self.sources))
            .with("destinations", indices_or_all(&self.destinations))
            .with_optional("annotations", self.annotations.map(QueryValue::from))
    }
}

/// Options of the `match` service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOptions {
    /// Profile override.
    pub profile: Option<String>,
    /// Return turn-by-turn steps for each leg.
    pub steps: bool,
    /// Geometry encoding.
    pub geometries: Geometries,
    /// Return per-segment annotations.
    pub annotations: bool,
    /// Overview geometry detail.
    pub overview: Overview,
    /// UNIX timestamps of the input coordinates; omitted when empty.
    pub timestamps: Vec<u64>,
    /// GPS precision radius per coordinate in metres; omitted when empty.
    pub radiuses: Vec<f64>,
}

impl MatchOptions {
    /// Use `profile` instead of the client default.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Toggle turn-by-turn steps.
    #[must_use]
    pub const fn with_steps(mut self, steps: bool) -> Self {
        self.steps = steps;
        self
    }

    /// Choose the geometry encoding.
    #[must_use]
    pub const fn with_geometries(mut self, geometries: Geometries) -> Self {
        self.geometries = geometries;
        self
    }

    /// Toggle per-segment annotations.
    #[must_use]
    pub const fn with_annotations(mut self, annotations: bool) -> Self {
        self.annotations = annotations;
        self
    }

    /// Choose the overview detail.
    #[must_use]
    pub const fn with_overview(mut self, overview: Overview) -> Self {
        self.overview = overview;
        self
    }

    /// Attach one timestamp per input coordinate.
    #[must_use]
    pub fn with_timestamps(mut self, timestamps: Vec<u64>) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Attach one search radius per input coordinate.
    #[must_use]
    pub fn with_radiuses(mut self, radiuses: Vec<f64>) -> Self {
        self.radiuses = radiuses;
        self
    }
}

impl ServiceOptions for MatchOptions {
    type Response = MatchResponse;
    const SERVICE: &'static str = "match";

    fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    fn query(&self) -> QueryOptions {
        QueryOptions::new()
            .with("steps", self.steps)
            .with("geometries", self.geometries)
            .with("annotations", self.annotations)
            .with("overview", self.overview)
            .with("timestamps", self.timestamps.clone())
            .with("radiuses", self.radiuses.clone())
    }
}

/// Options of the `trip` service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripOptions {
    /// Profile override.
    pub profile: Option<String>,
    /// Return turn-by-turn steps for each leg.
    pub steps: bool,
    /// Geometry encoding.
    pub geometries: Geometries,
    /// Overview geometry detail.
    pub overview: Overview,
    /// Return per-segment annotations.
    pub annotations: bool,
    /// Start of the trip.
    pub source: TripSource,
    /// End of the trip.
    pub destination: TripDestination,
}

impl TripOptions {
    /// Use `profile` instead of the client default.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Toggle turn-by-turn steps.
    #[must_use]
    pub const fn with_steps(mut self, steps: bool) -> Self {
        self.steps = steps;
        self
    }

    /// Choose the geometry encoding.
    #[must_use]
    pub const fn with_geometries(mut self, geometries: Geometries) -> Self {
        self.geometries = geometries;
        self
    }

    /// Choose the overview detail.
    #[must_use]
    pub const fn with_overview(mut self, overview: Overview) -> Self {
        self.overview = overview;
        self
    }

    /// Toggle per-segment annotations.
    #[must_use]
    pub const fn with_annotations(mut self, annotations: bool) -> Self {
        self.annotations = annotations;
        self
    }

    /// Fix the start of the trip.
    #[must_use]
    pub const fn with_source(mut self, source: TripSource) -> Self {
        self.source = source;
        self
    }

    /// Fix the end of the trip.
    #[must_use]
    pub const fn with_destination(mut self, destination: TripDestination) -> Self {
        self.destination = destination;
        self
    }
}

impl ServiceOptions for TripOptions {
    type Response = TripResponse;
    const SERVICE: &'static str = "trip";

    fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    fn query(&self) -> QueryOptions {
        QueryOptions::new()
            .with("steps", self.steps)
            .with("geometries", self.geometries)
            .with("overview", self.overview)
            .with("annotations", self.annotations)
            .with("source", self.source)
            .with("destination", self.destination)
    }
}
