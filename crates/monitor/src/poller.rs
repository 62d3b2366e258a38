//! Poll loop forwarding telemetry frames to a sink.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use ets2_telemetry_client::TelemetrySource;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::frame::write_frame;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSettings {
    /// Delay between polls
    pub interval: Duration,
    /// Stop after this many frames have been written
    pub max_frames: Option<u64>,
    /// Treat transient telemetry errors as fatal too
    pub fail_fast: bool,
}

impl PollSettings {
    /// Settings polling every `interval_ms` milliseconds (at least 1) without a frame limit.
    pub fn every_millis(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms.max(1)),
            max_frames: None,
            fail_fast: false,
        }
    }
}

/// Poll `source` and write a frame for every snapshot until the frame limit is
/// reached or an error ends the run. Returns the number of frames written.
///
/// Transient telemetry errors (server not up, game not running) are logged and
/// polling continues unless `fail_fast` is set.
///
/// # Errors
///
/// Returns the first non-transient telemetry error, any telemetry error when
/// `fail_fast` is set, or the first sink write error.
pub async fn run<S, W>(source: &S, sink: &mut W, settings: &PollSettings) -> Result<u64>
where
    S: TelemetrySource + ?Sized,
    W: Write + ?Sized,
{
    let mut ticker = tokio::time::interval(settings.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut frames = 0u64;
    while settings.max_frames.is_none_or(|max| frames < max) {
        ticker.tick().await;

        match source.get_telemetry().await {
            Ok(snapshot) => {
                write_frame(sink, &snapshot).context("Failed to write frame to sink")?;
                frames = frames.saturating_add(1);
                debug!(frames, "frame sent");
            }
            Err(e) if e.is_transient() && !settings.fail_fast => {
                warn!(kind = %e.kind(), "Telemetry unavailable: {e}");
            }
            Err(e) => return Err(e).context("Failed to read telemetry"),
        }
    }

    Ok(frames)
}
