use osrm_core::{
    CoordinateRequest, MatchOptions, MatchResponse, NearestOptions, NearestResponse, OsrmError,
    Point, RouteOptions, RouteResponse, Service, Settings, TableOptions, TableResponse,
    TileRequest, TileResponse, Transport, TripOptions, TripResponse,
};

use super::{finish, transport_failed};
use crate::config::ClientConfig;
use crate::error::ClientBuildError;
use crate::transport::BlockingHttpTransport;

/// Blocking OSRM client.
///
/// Each call performs exactly one `GET` through the transport and returns
/// the fully materialised response or an [`OsrmError`]. The HTTP session is
/// acquired at construction and released when the client is dropped or
/// [closed](Self::close).
///
/// # Examples
///
/// ```no_run
/// use osrm_core::{Point, RouteOptions};
/// use osrm_http::{ClientConfig, OsrmClient};
///
/// let client = OsrmClient::with_config(&ClientConfig::new("http://localhost:5000"))?;
/// let coords = [Point::new(13.388860, 52.517037), Point::new(13.397634, 52.529407)];
/// let response = client.route(&coords, &RouteOptions::default().with_steps(true))?;
/// println!("{} m", response.routes[0].distance);
/// client.close();
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct OsrmClient<T: Transport = BlockingHttpTransport> {
    transport: T,
    settings: Settings,
}

impl<T: Transport + std::fmt::Debug> std::fmt::Debug for OsrmClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsrmClient")
            .field("transport", &self.transport)
            .field("settings", &self.settings)
            .finish()
    }
}

impl OsrmClient {
    /// Create a client for the public OSRM server with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: &ClientConfig) -> Result<Self, ClientBuildError> {
        let transport = BlockingHttpTransport::new(config)?;
        Ok(Self::with_transport(transport, config.settings()))
    }
}

impl<T: Transport> OsrmClient<T> {
    /// Create a client over a caller-supplied transport.
    #[must_use]
    pub const fn with_transport(transport: T, settings: Settings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Path settings applied to every request.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Perform any described request.
    ///
    /// # Errors
    ///
    /// Returns [`OsrmError`] for transport failures, non-2xx statuses and
    /// bodies that do not fit the response model.
    pub fn execute<S: Service>(&self, request: &S) -> Result<S::Response, OsrmError> {
        let path = request.path(&self.settings);
        let raw = self
            .transport
            .get(&path)
            .inspect_err(|err| transport_failed(self.base_url(), &path, err))?;
        finish::<S>(self.base_url(), &path, raw)
    }

    /// Snap each coordinate to the nearest street segments.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub fn nearest(
        &self,
        coordinates: &[Point],
        options: &NearestOptions,
    ) -> Result<NearestResponse, OsrmError> {
        self.execute(&CoordinateRequest::new(coordinates, options))
    }

    /// Find the fastest route through the coordinates, in order.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub fn route(
        &self,
        coordinates: &[Point],
        options: &RouteOptions,
    ) -> Result<RouteResponse, OsrmError> {
        self.execute(&CoordinateRequest::new(coordinates, options))
    }

    /// Compute the travel time matrix between the coordinates.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub fn table(
        &self,
        coordinates: &[Point],
        options: &TableOptions,
    ) -> Result<TableResponse, OsrmError> {
        self.execute(&CoordinateRequest::new(coordinates, options))
    }

    /// Snap a noisy GPS trace to the road network (the `match` service).
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub fn match_trace(
        &self,
        coordinates: &[Point],
        options: &MatchOptions,
    ) -> Result<MatchResponse, OsrmError> {
        self.execute(&CoordinateRequest::new(coordinates, options))
    }

    /// Solve the travelling salesman problem over the coordinates.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub fn trip(
        &self,
        coordinates: &[Point],
        options: &TripOptions,
    ) -> Result<TripResponse, OsrmError> {
        self.execute(&CoordinateRequest::new(coordinates, options))
    }

    /// Fetch the vector tile at `(x, y, zoom)`.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub fn tile(&self, x: u32, y: u32, zoom: u32) -> Result<TileResponse, OsrmError> {
        self.execute(&TileRequest::new(x, y, zoom))
    }

    /// Release the HTTP session now rather than at the end of scope.
    pub fn close(self) {
        drop(self);
    }
}

impl<T: Transport> Drop for OsrmClient<T> {
    fn drop(&mut self) {
        log::debug!("closing OSRM session for {}", self.transport.base_url());
    }
}
