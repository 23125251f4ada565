//! Writer für den Zwischenablage-Payload.

use super::{PAYLOAD_TYPE, PAYLOAD_VERSION};
use crate::core::PlainPoint;
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct Payload<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    version: u32,
    points: &'a [PlainPoint],
}

/// Serialisiert Punkte als Zwischenablage-Text.
///
/// Nicht-endliche Koordinaten werden vorher verworfen, JSON kennt sie nicht.
pub fn serialize_points_for_clipboard(points: &[PlainPoint]) -> Result<String> {
    let finite: Vec<PlainPoint> = points.iter().copied().filter(|p| p.is_finite()).collect();
    let text = serde_json::to_string(&Payload {
        kind: PAYLOAD_TYPE,
        version: PAYLOAD_VERSION,
        points: &finite,
    })?;
    Ok(text)
}
