//! Request path construction.
//!
//! Paths are relative (`{service}/{version}/{profile}/{coordinates}?{query}`)
//! and joined to the transport's base URL with [`join_url`]. The builder is
//! pure: it never fails and never validates values beyond encoding them.
//!
//! # Examples
//! ```
//! use osrm_core::url::{QueryOptions, build_service_path};
//! use osrm_core::Point;
//!
//! let coords = [Point::new(0.1, 0.2), Point::new(0.3, 0.4)];
//! let query = QueryOptions::new().with("number", 1_u64);
//! let path = build_service_path("nearest", "v1", "driving", &coords, &query);
//! assert_eq!(path, "nearest/v1/driving/0.1,0.2;0.3,0.4?number=1");
//! ```

use url::form_urlencoded::byte_serialize;

use crate::model::Point;

/// One encodable query value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// Free text; form-urlencoded on output.
    Text(String),
    /// Boolean rendered as `true` or `false`.
    Flag(bool),
    /// Enumeration wire tag rendered verbatim.
    Tag(&'static str),
    /// Unsigned integer.
    Integer(u64),
    /// Floating-point number in shortest round-trip form.
    Float(f64),
    /// Items joined with `;`. An empty list is omitted from the query.
    List(Vec<Self>),
}

impl QueryValue {
    /// Render the value as it appears after `key=`.
    ///
    /// Returns `None` for values that are omitted from the query.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(byte_serialize(text.as_bytes()).collect()),
            Self::Flag(flag) => Some(flag.to_string()),
            Self::Tag(tag) => Some((*tag).to_owned()),
            Self::Integer(number) => Some(number.to_string()),
            Self::Float(number) => Some(number.to_string()),
            Self::List(items) if items.is_empty() => None,
            Self::List(items) => {
                let rendered: Vec<String> = items.iter().filter_map(Self::render).collect();
                Some(rendered.join(";"))
            }
        }
    }
}

impl From<bool> for QueryValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<u64> for QueryValue {
    fn from(number: u64) -> Self {
        Self::Integer(number)
    }
}

impl From<usize> for QueryValue {
    fn from(number: usize) -> Self {
        Self::Integer(number as u64)
    }
}

impl From<f64> for QueryValue {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<&str> for QueryValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T: Into<Self>> From<Vec<T>> for QueryValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Ordered query options. `None` entries are kept so the caller can pass
/// every option unconditionally; they are dropped when rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pairs: Vec<(&'static str, Option<QueryValue>)>,
}

impl QueryOptions {
    /// Start an empty option set.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append an option that is always present.
    #[must_use]
    pub fn with(self, key: &'static str, value: impl Into<QueryValue>) -> Self {
        self.with_optional(key, Some(value.into()))
    }

    /// Append an option that is omitted when `None`.
    #[must_use]
    pub fn with_optional(mut self, key: &'static str, value: Option<QueryValue>) -> Self {
        self.pairs.push((key, value));
        self
    }

    /// Render the surviving pairs as `k1=v1&k2=v2`, in insertion order.
    #[must_use]
    pub fn render(&self) -> String {
        let rendered: Vec<String> = self
            .pairs
            .iter()
            .filter_map(|(key, value)| {
                value
                    .as_ref()
                    .and_then(QueryValue::render)
                    .map(|text| format!("{key}={text}"))
            })
            .collect();
        rendered.join("&")
    }
}

/// Build the relative path of a coordinate-based service request.
///
/// Coordinates render as `lon,lat` joined by `;`, in input order. The `?`
/// separator is only emitted when at least one option survives.
#[must_use]
pub fn build_service_path(
    service: &str,
    api_version: &str,
    profile: &str,
    coordinates: &[Point],
    options: &QueryOptions,
) -> String {
    let points: Vec<String> = coordinates.iter().map(Point::to_string).collect();
    let mut path = format!("{service}/{api_version}/{profile}/{}", points.join(";"));
    let query = options.render();
    if !query.is_empty() {
        path.push('?');
        path.push_str(&query);
    }
    path
}

/// Build the relative path of a vector tile request.
///
/// Tiles are always served from the `driving` profile.
///
/// # Examples
/// ```
/// use osrm_core::url::build_tile_path;
///
/// assert_eq!(build_tile_path("v1", 8800, 5373, 14), "tile/v1/driving/(8800,5373,14).mvt");
/// ```
#[must_use]
pub fn build_tile_path(api_version: &str, x: u32, y: u32, zoom: u32) -> String {
    format!("tile/{api_version}/driving/({x},{y},{zoom}).mvt")
}

/// Join a base URL and a relative path with exactly one `/`.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
