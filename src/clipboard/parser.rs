//! Parser für den Zwischenablage-Payload.

use super::{PAYLOAD_TYPE, PAYLOAD_VERSION};
use crate::core::PlainPoint;
use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Liest Punkte aus einem Zwischenablage-Text.
///
/// Liefert `None` für fremde oder kaputte Payloads. Einzelne Einträge ohne
/// endliche `x`/`y` werden still übersprungen; bleibt keiner übrig, gilt der
/// ganze Payload als ungültig.
pub fn parse_points_from_clipboard(text: &str) -> Option<Vec<PlainPoint>> {
    match decode_payload(text) {
        Ok(points) => Some(points),
        Err(e) => {
            log::debug!("Zwischenablage ignoriert: {:#}", e);
            None
        }
    }
}

/// Dekodiert einen Payload mit Fehlerbegründung.
pub fn decode_payload(text: &str) -> Result<Vec<PlainPoint>> {
    let value: Value = serde_json::from_str(text).context("Zwischenablage ist kein JSON")?;
    let Some(object) = value.as_object() else {
        bail!("Payload ist kein JSON-Objekt");
    };

    match object.get("type").and_then(Value::as_str) {
        Some(PAYLOAD_TYPE) => {}
        other => bail!("Unbekannter Payload-Typ: {:?}", other),
    }

    let version = object.get("version").and_then(Value::as_f64);
    if version != Some(f64::from(PAYLOAD_VERSION)) {
        bail!("Nicht unterstützte Payload-Version: {:?}", version);
    }

    let Some(entries) = object.get("points").and_then(Value::as_array) else {
        bail!("Feld 'points' fehlt oder ist keine Liste");
    };

    let points: Vec<PlainPoint> = entries.iter().filter_map(decode_point).collect();
    if points.is_empty() {
        bail!("Keine gültigen Punkte im Payload ({} Einträge)", entries.len());
    }
    if points.len() < entries.len() {
        log::debug!(
            "{} ungültige Einträge im Payload übersprungen",
            entries.len() - points.len()
        );
    }
    Ok(points)
}

fn decode_point(entry: &Value) -> Option<PlainPoint> {
    let x = entry.get("x")?.as_f64()?;
    let y = entry.get("y")?.as_f64()?;
    let point = PlainPoint::new(x, y);
    point.is_finite().then_some(point)
}
