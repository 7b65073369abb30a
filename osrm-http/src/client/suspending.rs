use osrm_core::{
    AsyncTransport, CoordinateRequest, MatchOptions, MatchResponse, NearestOptions,
    NearestResponse, OsrmError, Point, RouteOptions, RouteResponse, Service, Settings,
    TableOptions, TableResponse, TileRequest, TileResponse, TripOptions, TripResponse,
};

use super::{finish, transport_failed};
use crate::config::ClientConfig;
use crate::error::ClientBuildError;
use crate::transport::HttpTransport;

/// Suspending OSRM client for cooperative async runtimes.
///
/// Each call yields while the request is in flight and performs exactly
/// one `GET`. Dropping a pending call aborts the underlying request and
/// leaves the client usable. The returned futures are not `Send`; drive
/// them on a single-threaded scheduler or a `LocalSet`.
///
/// # Examples
///
/// ```no_run
/// use osrm_core::{NearestOptions, Point};
/// use osrm_http::{ClientConfig, OsrmAsyncClient};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = OsrmAsyncClient::with_config(&ClientConfig::new("http://localhost:5000"))?;
/// let nearest = client
///     .nearest(&[Point::new(13.388860, 52.517037)], &NearestOptions::default())
///     .await?;
/// println!("{}", nearest.waypoints[0].name);
/// # Ok(())
/// # }
/// ```
pub struct OsrmAsyncClient<T: AsyncTransport = HttpTransport> {
    transport: T,
    settings: Settings,
}

impl<T: AsyncTransport + std::fmt::Debug> std::fmt::Debug for OsrmAsyncClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsrmAsyncClient")
            .field("transport", &self.transport)
            .field("settings", &self.settings)
            .finish()
    }
}

impl OsrmAsyncClient {
    /// Create a client for the public OSRM server with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_config(config: &ClientConfig) -> Result<Self, ClientBuildError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(transport, config.settings()))
    }
}

impl<T: AsyncTransport> OsrmAsyncClient<T> {
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
    pub async fn execute<S: Service>(&self, request: &S) -> Result<S::Response, OsrmError> {
        let path = request.path(&self.settings);
        let raw = self
            .transport
            .get(&path)
            .await
            .inspect_err(|err| transport_failed(self.base_url(), &path, err))?;
        finish::<S>(self.base_url(), &path, raw)
    }

    /// Snap each coordinate to the nearest street segments.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub async fn nearest(
        &self,
        coordinates: &[Point],
        options: &NearestOptions,
    ) -> Result<NearestResponse, OsrmError> {
        self.execute(&CoordinateRequest::new(coordinates, options))
            .await
    }

    /// Find the fastest route through the coordinates, in order.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub async fn route(
        &self,
        coordinates: &[Point],
        options: &RouteOptions,
    ) -> Result<RouteResponse, OsrmError> {
        self.execute(&CoordinateRequest::new(coordinates, options))
            .await
    }

    /// Compute the travel time matrix between the coordinates.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub async fn table(
        &self,
        coordinates: &[Point],
        options: &TableOptions,
    ) -> Result<TableResponse, OsrmError> {
        self.execute(&CoordinateRequest::new(coordinates, options))
            .await
    }

    /// Snap a noisy GPS trace to the road network (the `match` service).
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub async fn match_trace(
        &self,
        coordinates: &[Point],
        options: &MatchOptions,
    ) -> Result<MatchResponse, OsrmError> {
        self.execute(&CoordinateRequest::new(coordinates, options))
            .await
    }

    /// Solve the travelling salesman problem over the coordinates.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub async fn trip(
        &self,
        coordinates: &[Point],
        options: &TripOptions,
    ) -> Result<TripResponse, OsrmError> {
        self.execute(&CoordinateRequest::new(coordinates, options))
            .await
    }

    /// Fetch the vector tile at `(x, y, zoom)`.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub async fn tile(&self, x: u32, y: u32, zoom: u32) -> Result<TileResponse, OsrmError> {
        self.execute(&TileRequest::new(x, y, zoom)).await
    }

    /// Release the HTTP session now rather than at the end of scope.
    pub fn close(self) {
        drop(self);
    }
}

impl<T: AsyncTransport> Drop for OsrmAsyncClient<T> {
    fn drop(&mut self) {
        log::debug!("closing OSRM session for {}", self.transport.base_url());
    }
}
