//! Client for the ETS2 / ATS telemetry server HTTP API.
//!
//! The telemetry server plugin exposes the current truck, trailer, job and
//! navigation state of Euro Truck Simulator 2 and American Truck Simulator as a
//! JSON document at `/api/ets2/telemetry`. This crate fetches that document and
//! decodes it into a [`TelemetrySnapshot`].
//!
//! Decoding is tolerant: any field the game leaves out decodes to its zero
//! value, unknown fields are ignored, and only a malformed or mistyped document
//! is an error. Every failure is returned to the caller as a
//! [`TelemetryError`]; nothing is retried or cached.
//!
//! # Usage
//!
//! ```rust,no_run
//! use ets2_telemetry_client::{DEFAULT_BASE_URL, TelemetryClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), ets2_telemetry_client::TelemetryError> {
//! let client = TelemetryClient::new(DEFAULT_BASE_URL)?;
//! let snapshot = client.get_telemetry().await?;
//! println!("{} km/h at {} rpm", snapshot.truck.speed, snapshot.truck.engine_rpm);
//! # Ok(())
//! # }
//! ```
//!
//! Decoding without a network:
//!
//! ```
//! use ets2_telemetry_client::parse_telemetry;
//!
//! let snapshot = parse_telemetry(br#"{"game":{"connected":false}}"#)?;
//! assert!(!snapshot.game.connected);
//! # Ok::<(), ets2_telemetry_client::TelemetryError>(())
//! ```

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod model;

pub use client::{TelemetryClient, TelemetrySource};
pub use config::{ClientConfig, DEFAULT_BASE_URL, TELEMETRY_PATH};
pub use decode::parse_telemetry;
pub use error::{DECODE_PAYLOAD_PREFIX_LEN, ErrorKind, TelemetryError};
pub use model::{Game, Job, Navigation, Placement, TelemetrySnapshot, Trailer, Truck, Vector};

/// A specialized `Result` type for telemetry operations.
pub type Result<T> = std::result::Result<T, TelemetryError>;
