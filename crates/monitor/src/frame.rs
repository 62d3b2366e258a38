//! Line framing for forwarded telemetry values.
//!
//! Each frame is a sequence of `key=value` commands, one per separator, in the
//! format microcontroller dashboards on the other end of a serial link expect.

use std::io::{self, Write};

use ets2_telemetry_client::{TelemetrySnapshot, Truck};

/// Separator written after every `key=value` command.
pub const VALUE_SEPARATOR: &str = "\n";

/// Render the forwarded fields of a snapshot.
pub fn render_frame(snapshot: &TelemetrySnapshot, separator: &str) -> String {
    format!(
        "rpm={:.6}{separator}kmh={:.6}{separator}fuel={:.6}{separator}",
        snapshot.truck.engine_rpm,
        snapshot.truck.speed,
        fuel_ratio(&snapshot.truck)
    )
}

/// Tank capacity over the fuel currently on board.
///
/// Reports 0 for an empty tank so the device never receives `inf` or `NaN`.
pub fn fuel_ratio(truck: &Truck) -> f32 {
    if truck.fuel <= 0.0 {
        return 0.0;
    }
    let ratio = truck.fuel_capacity / truck.fuel;
    if ratio.is_finite() { ratio } else { 0.0 }
}

/// Write one frame and flush so it reaches the device immediately.
pub fn write_frame<W: Write + ?Sized>(sink: &mut W, snapshot: &TelemetrySnapshot) -> io::Result<()> {
    sink.write_all(render_frame(snapshot, VALUE_SEPARATOR).as_bytes())?;
    sink.flush()
}
