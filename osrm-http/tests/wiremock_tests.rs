//! Integration tests for the OSRM clients against a mock HTTP server.
//!
//! Tests cover:
//! - Every service through the suspending client
//! - The blocking client from synchronous code and from inside runtimes
//! - Status handling for rejected queries, server failures and redirects
//! - Request timeouts and cancelled calls

use std::time::Duration;

use osrm_core::{
    Geometries, MatchOptions, NearestOptions, OsrmError, Overview, Point, RouteOptions,
    ServiceStatus, TableAnnotations, TableOptions, TransportError, TripOptions, TripSource,
};
use osrm_http::{ClientConfig, OsrmAsyncClient, OsrmClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NEAREST: &str = include_str!("../../osrm-core/tests/fixtures/nearest.json");
const ROUTE: &str = include_str!("../../osrm-core/tests/fixtures/route.json");
const TABLE: &str = include_str!("../../osrm-core/tests/fixtures/table.json");
const MATCH: &str = include_str!("../../osrm-core/tests/fixtures/match.json");
const TRIP: &str = include_str!("../../osrm-core/tests/fixtures/trip.json");

fn coords() -> Vec<Point> {
    vec![
        Point::new(13.388_86, 52.517_037),
        Point::new(13.397_634, 52.529_407),
    ]
}

fn json_body(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "application/json")
}

fn async_client(server: &MockServer) -> OsrmAsyncClient {
    OsrmAsyncClient::with_config(&ClientConfig::new(server.uri())).expect("client should build")
}

// ============================================================================
// Suspending client
// ============================================================================

mod suspending_client_tests {
    use super::*;

    #[tokio::test]
    async fn nearest_sends_number_and_parses_waypoints() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(
                "/nearest/v1/driving/13.38886,52.517037;13.397634,52.529407",
            ))
            .and(query_param("number", "3"))
            .and(header("user-agent", osrm_http::DEFAULT_USER_AGENT))
            .respond_with(json_body(NEAREST))
            .expect(1)
            .mount(&server)
            .await;

        let response = async_client(&server)
            .nearest(&coords(), &NearestOptions::default().with_number(3))
            .await
            .expect("nearest should succeed");

        assert_eq!(response.code, ServiceStatus::Ok);
        assert_eq!(response.waypoints.len(), 2);
    }

    #[tokio::test]
    async fn route_honours_profile_override() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/route/v1/bike/13.38886,52.517037;13.397634,52.529407"))
            .and(query_param("steps", "true"))
            .and(query_param("geometries", "geojson"))
            .and(query_param("overview", "full"))
            .and(query_param("continue_straight", "default"))
            .respond_with(json_body(ROUTE))
            .expect(1)
            .mount(&server)
            .await;

        let options = RouteOptions::default()
            .with_profile("bike")
            .with_steps(true)
            .with_geometries(Geometries::GeoJson)
            .with_overview(Overview::Full);
        let response = async_client(&server)
            .route(&coords(), &options)
            .await
            .expect("route should succeed");

        let route = &response.routes[0];
        assert_eq!(route.weight_name.as_deref(), Some("routability"));
        assert_eq!(route.legs[0].steps[0].name, "thename");
    }

    #[tokio::test]
    async fn table_renders_indices_and_annotations() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/table/v1/driving/13.38886,52.517037;13.397634,52.529407"))
            .and(query_param("sources", "0"))
            .and(query_param("destinations", "all"))
            .and(query_param("annotations", "duration,distance"))
            .respond_with(json_body(TABLE))
            .expect(1)
            .mount(&server)
            .await;

        let options = TableOptions::default()
            .with_sources(vec![0])
            .with_annotations(TableAnnotations::DurationDistance);
        let response = async_client(&server)
            .table(&coords(), &options)
            .await
            .expect("table should succeed");

        assert!(!response.durations.is_empty());
    }

    #[tokio::test]
    async fn match_keeps_unmatched_tracepoints() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/match/v1/driving/13.38886,52.517037;13.397634,52.529407"))
            .and(query_param("timestamps", "1424684612;1424684616"))
            .respond_with(json_body(MATCH))
            .expect(1)
            .mount(&server)
            .await;

        let options = MatchOptions::default().with_timestamps(vec![1_424_684_612, 1_424_684_616]);
        let response = async_client(&server)
            .match_trace(&coords(), &options)
            .await
            .expect("match should succeed");

        assert!(response.tracepoints[0].is_some());
        assert!(response.tracepoints[1].is_none());
    }

    #[tokio::test]
    async fn trip_sends_source_constraint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/trip/v1/driving/13.38886,52.517037;13.397634,52.529407"))
            .and(query_param("source", "first"))
            .and(query_param("destination", "any"))
            .respond_with(json_body(TRIP))
            .expect(1)
            .mount(&server)
            .await;

        let options = TripOptions::default().with_source(TripSource::First);
        let response = async_client(&server)
            .trip(&coords(), &options)
            .await
            .expect("trip should succeed");

        assert_eq!(response.trips.len(), 1);
        assert_eq!(response.waypoints[0].waypoint_index, Some(0));
    }

    #[tokio::test]
    async fn tile_returns_raw_bytes() {
        let server = MockServer::start().await;
        let payload = vec![0x1a, 0x02, 0x78, 0x00, 0xff];
        Mock::given(method("GET"))
            .and(path("/tile/v1/driving/(8800,5373,14).mvt"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(payload.clone(), "application/x-protobuf"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let tile = async_client(&server)
            .tile(8800, 5373, 14)
            .await
            .expect("tile should succeed");

        assert_eq!(tile.data, payload);
    }

    #[tokio::test]
    async fn rejected_query_carries_code_and_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "code": "InvalidQuery",
                "message": "Query string malformed close to position 28"
            })))
            .mount(&server)
            .await;

        let err = async_client(&server)
            .route(&coords(), &RouteOptions::default())
            .await
            .expect_err("400 should surface");

        assert_eq!(
            err,
            OsrmError::BadRequest {
                status: 400,
                code: Some("InvalidQuery".to_owned()),
                message: Some("Query string malformed close to position 28".to_owned()),
            }
        );
    }

    #[tokio::test]
    async fn server_failure_carries_body_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let err = async_client(&server)
            .nearest(&coords(), &NearestOptions::default())
            .await
            .expect_err("503 should surface");

        assert_eq!(
            err,
            OsrmError::ServerError {
                status: 503,
                body: "maintenance".to_owned(),
            }
        );
    }

    #[tokio::test]
    async fn redirects_are_not_followed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tile/v1/driving/(1,2,3).mvt"))
            .respond_with(
                ResponseTemplate::new(302).insert_header("location", "/tile/v1/driving/other"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = async_client(&server)
            .tile(1, 2, 3)
            .await
            .expect_err("302 should surface");

        assert_eq!(err, OsrmError::UnexpectedRedirect { status: 302 });
    }

    #[tokio::test]
    async fn cancelled_calls_leave_the_client_usable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(json_body(NEAREST).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client = async_client(&server);
        let cancelled = tokio::time::timeout(
            Duration::from_millis(50),
            client.nearest(&coords(), &NearestOptions::default()),
        )
        .await;
        assert!(cancelled.is_err(), "first call should be cancelled");

        let response = client
            .nearest(&coords(), &NearestOptions::default())
            .await
            .expect("client should be reusable after cancellation");
        assert_eq!(response.waypoints.len(), 2);
    }

    #[tokio::test]
    async fn slow_responses_time_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(json_body(NEAREST).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let config = ClientConfig::new(server.uri()).with_timeout(Duration::from_millis(200));
        let client = OsrmAsyncClient::with_config(&config).expect("client should build");
        let err = client
            .nearest(&coords(), &NearestOptions::default())
            .await
            .expect_err("request should time out");

        assert!(
            matches!(err, OsrmError::Transport(TransportError::Timeout { .. })),
            "expected timeout, got {err:?}"
        );
    }
}

// ============================================================================
// Blocking client
// ============================================================================

mod blocking_client_tests {
    use super::*;

    /// Mock server hosted on a runtime the blocking client never enters.
    struct Harness {
        server: MockServer,
        runtime: tokio::runtime::Runtime,
    }

    impl Harness {
        fn start() -> Self {
            let runtime = tokio::runtime::Runtime::new().expect("runtime should build");
            let server = runtime.block_on(MockServer::start());
            Self { server, runtime }
        }

        fn mount(&self, mock: Mock) {
            self.runtime.block_on(mock.mount(&self.server));
        }

        fn client(&self) -> OsrmClient {
            OsrmClient::with_config(&ClientConfig::new(self.server.uri()))
                .expect("client should build")
        }
    }

    #[test]
    fn route_from_synchronous_code() {
        let harness = Harness::start();
        harness.mount(
            Mock::given(method("GET"))
                .and(path("/route/v1/driving/13.38886,52.517037;13.397634,52.529407"))
                .and(query_param("alternatives", "false"))
                .respond_with(json_body(ROUTE))
                .expect(1),
        );

        let client = harness.client();
        let response = client
            .route(&coords(), &RouteOptions::default())
            .expect("route should succeed");
        client.close();

        assert_eq!(response.routes.len(), 1);
        assert_eq!(response.waypoints[1].name, "thename1");
    }

    #[test]
    fn runs_inside_a_multi_threaded_runtime() {
        let harness = Harness::start();
        harness.mount(
            Mock::given(method("GET"))
                .and(path("/nearest/v1/driving/13.38886,52.517037;13.397634,52.529407"))
                .respond_with(json_body(NEAREST))
                .expect(1),
        );

        let client = harness.client();
        let response = harness
            .runtime
            .block_on(async { client.nearest(&coords(), &NearestOptions::default()) })
            .expect("nearest should succeed");

        assert_eq!(response.waypoints.len(), 2);
    }

    #[test]
    fn one_client_serves_sync_and_async_callers() {
        let harness = Harness::start();
        harness.mount(
            Mock::given(method("GET"))
                .and(path("/nearest/v1/driving/13.38886,52.517037;13.397634,52.529407"))
                .respond_with(json_body(NEAREST))
                .expect(3),
        );

        let client = harness.client();
        client
            .nearest(&coords(), &NearestOptions::default())
            .expect("call outside a runtime should succeed");
        let inside = harness
            .runtime
            .block_on(async { client.nearest(&coords(), &NearestOptions::default()) })
            .expect("call inside a runtime should succeed");
        assert_eq!(inside.waypoints.len(), 2);
        client
            .nearest(&coords(), &NearestOptions::default())
            .expect("call outside a runtime should still succeed");
    }

    #[test]
    fn builds_and_drops_inside_a_runtime() {
        let harness = Harness::start();
        harness.mount(
            Mock::given(method("GET"))
                .and(path("/nearest/v1/driving/13.38886,52.517037;13.397634,52.529407"))
                .respond_with(json_body(NEAREST))
                .expect(1),
        );

        let response = harness.runtime.block_on(async {
            let client = harness.client();
            let response = client.nearest(&coords(), &NearestOptions::default());
            drop(client);
            response
        });

        assert_eq!(response.expect("nearest should succeed").waypoints.len(), 2);
    }

    #[tokio::test]
    async fn drops_inside_a_current_thread_runtime() {
        let client = OsrmClient::with_config(&ClientConfig::new("http://127.0.0.1:9"))
            .expect("client should build");
        client.close();
    }

    #[test]
    fn client_stays_usable_after_a_failure() {
        let harness = Harness::start();
        harness.mount(
            Mock::given(method("GET"))
                .and(path("/nearest/v1/driving/0,0"))
                .respond_with(ResponseTemplate::new(500).set_body_string("boom")),
        );
        harness.mount(
            Mock::given(method("GET"))
                .and(path("/nearest/v1/driving/13.38886,52.517037;13.397634,52.529407"))
                .respond_with(json_body(NEAREST)),
        );

        let client = harness.client();
        let err = client
            .nearest(&[Point::new(0.0, 0.0)], &NearestOptions::default())
            .expect_err("500 should surface");
        assert!(matches!(err, OsrmError::ServerError { status: 500, .. }));

        let response = client
            .nearest(&coords(), &NearestOptions::default())
            .expect("second call should succeed");
        assert_eq!(response.waypoints.len(), 2);
    }
}
