//! HTTP clients for the OSRM routing service.
//!
//! This crate provides [`OsrmClient`], a blocking client, and
//! [`OsrmAsyncClient`], a suspending client for cooperative async runtimes.
//! Both issue a single `GET` per call through a reqwest-backed transport and
//! interpret the response with `osrm-core`.
//!
//! # Architecture
//!
//! The clients are generic over the transport contract defined in
//! `osrm-core`, so tests (and callers with their own HTTP stack) can supply
//! a different collaborator via `with_transport`. The blocking transport
//! drives the async reqwest client on an owned Tokio runtime, keeping the
//! blocking client usable from synchronous code.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use osrm_core::{Point, TableOptions};
//! use osrm_http::{ClientConfig, OsrmClient};
//!
//! let config = ClientConfig::new("http://localhost:5000")
//!     .with_default_profile("foot")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("my-app/1.0");
//! let client = OsrmClient::with_config(&config)?;
//!
//! let coords = [Point::new(-0.1, 51.5), Point::new(-0.2, 51.6)];
//! let table = client.table(&coords, &TableOptions::default())?;
//! println!("Travel time: {:?}", table.durations[0][1]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

mod client;
mod config;
mod error;
mod transport;

#[doc(hidden)]
pub mod test_support;

pub use client::{OsrmAsyncClient, OsrmClient};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::ClientBuildError;
pub use transport::{BlockingHttpTransport, HttpTransport};
