//! Error types for the telemetry client.

use core::fmt;

/// Upper bound on how much of an undecodable payload is kept for diagnostics.
pub const DECODE_PAYLOAD_PREFIX_LEN: usize = 512;

/// Errors returned by [`TelemetryClient`](crate::TelemetryClient) and
/// [`parse_telemetry`](crate::parse_telemetry).
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The HTTP transport could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Connection, timeout, DNS or body read failure
    #[error("Telemetry request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something other than 200 OK
    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The body was not JSON, or a present field had the wrong type
    #[error("Failed to decode telemetry payload ({payload_len} bytes): {source}; payload: {payload:?}")]
    Decode {
        /// Lossy UTF-8 prefix of the payload, at most [`DECODE_PAYLOAD_PREFIX_LEN`] bytes
        payload: String,
        /// Length of the full payload in bytes
        payload_len: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl TelemetryError {
    pub(crate) fn transport(url: &str, source: reqwest::Error) -> Self {
        TelemetryError::Transport {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn decode(payload: &[u8], source: serde_json::Error) -> Self {
        let end = payload.len().min(DECODE_PAYLOAD_PREFIX_LEN);
        let prefix = payload.get(..end).unwrap_or(payload);
        TelemetryError::Decode {
            payload: String::from_utf8_lossy(prefix).into_owned(),
            payload_len: payload.len(),
            source,
        }
    }

    /// Get the error kind for classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TelemetryError::Build(_) => ErrorKind::Build,
            TelemetryError::Transport { .. } => ErrorKind::Transport,
            TelemetryError::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            TelemetryError::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// HTTP status code, if the server answered with an unexpected one.
    pub fn status(&self) -> Option<u16> {
        match self {
            TelemetryError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether repeating the request later may succeed.
    ///
    /// Transport failures and bad statuses usually mean the game or the
    /// telemetry server is not up yet. Build and decode failures will not fix
    /// themselves.
    pub fn is_transient(&self) -> bool {
        matches!(self.kind(), ErrorKind::Transport | ErrorKind::UnexpectedStatus)
    }
}

/// Error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Build,
    Transport,
    UnexpectedStatus,
    Decode,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Build => write!(f, "Build"),
            ErrorKind::Transport => write!(f, "Transport"),
            ErrorKind::UnexpectedStatus => write!(f, "UnexpectedStatus"),
            ErrorKind::Decode => write!(f, "Decode"),
        }
    }
}
