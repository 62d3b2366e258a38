//! Tolerant JSON decoding of telemetry payloads.
//!
//! Decoding happens in two steps. The payload is first parsed into a
//! [`serde_json::Value`] tree whose object keys are canonicalised and whose
//! `null` members are dropped; the tree is then deserialized into
//! [`TelemetrySnapshot`], where `#[serde(default)]` fills in anything absent.
//!
//! Key canonicalisation lower-cases the first character of each key, so the
//! server's camelCase keys and the PascalCase keys produced by some bridges
//! (`EngineRpm`, `X`) land on the same field.
//!
//! Floats are single precision, so a number whose magnitude does not fit an
//! `f32` is rejected instead of decoding to an infinity.

use serde::de::Error as _;
use serde_json::{Map, Number, Value};
use tracing::trace;

use crate::error::TelemetryError;
use crate::model::TelemetrySnapshot;

/// Decode a raw telemetry payload.
///
/// Missing and `null` fields decode to their zero value and unknown fields are
/// ignored, and a bare `null` document decodes to a zero snapshot. Any other
/// non-object document, a present field with the wrong type, or a number out
/// of `f32` range is reported as [`TelemetryError::Decode`].
///
/// # Errors
///
/// Returns [`TelemetryError::Decode`] carrying a bounded prefix of `payload`.
pub fn parse_telemetry(payload: &[u8]) -> crate::Result<TelemetrySnapshot> {
    let decode_err = |e: serde_json::Error| TelemetryError::decode(payload, e);

    let raw: Value = serde_json::from_slice(payload).map_err(decode_err)?;
    let snapshot = if raw.is_null() {
        TelemetrySnapshot::default()
    } else {
        serde_json::from_value(canonicalize(raw).map_err(decode_err)?).map_err(decode_err)?
    };
    trace!(bytes = payload.len(), "decoded telemetry payload");
    Ok(snapshot)
}

fn canonicalize(value: Value) -> serde_json::Result<Value> {
    match value {
        Value::Object(members) => members
            .into_iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| Ok((canonical_key(k), canonicalize(v)?)))
            .collect::<serde_json::Result<Map<String, Value>>>()
            .map(Value::Object),
        Value::Array(items) => items
            .into_iter()
            .map(canonicalize)
            .collect::<serde_json::Result<Vec<Value>>>()
            .map(Value::Array),
        Value::Number(n) => single_precision(n).map(Value::Number),
        other => Ok(other),
    }
}

/// Reject numbers that overflow `f32`. Every integer field is an `i64`, whose
/// whole range fits, so the check holds for integer fields too.
#[expect(
    clippy::cast_possible_truncation,
    reason = "narrowing to f32 is the range check"
)]
fn single_precision(n: Number) -> serde_json::Result<Number> {
    match n.as_f64() {
        Some(wide) if (wide as f32).is_infinite() => Err(serde_json::Error::custom(format!(
            "number {n} is out of range for a 32-bit float"
        ))),
        _ => Ok(n),
    }
}

fn canonical_key(key: String) -> String {
    match key.chars().next() {
        Some(first) if first.is_ascii_uppercase() => {
            let mut out = String::with_capacity(key.len());
            out.push(first.to_ascii_lowercase());
            out.extend(key.chars().skip(1));
            out
        }
        _ => key,
    }
}
