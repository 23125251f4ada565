//! Zwischenablage-Format für Punktlisten.
//!
//! Versioniertes JSON-Objekt, das zwischen Plots und Sitzungen ausgetauscht
//! wird:
//! `{ "type": "aero-curves/points", "version": 1, "points": [{ "x": .., "y": .. }] }`.
//! Lesen und Schreiben der System-Zwischenablage erledigt der Host.

pub mod parser;
pub mod writer;

/// Typ-Kennung im Payload.
pub const PAYLOAD_TYPE: &str = "aero-curves/points";
/// Aktuelle Payload-Version.
pub const PAYLOAD_VERSION: u32 = 1;

pub use parser::{decode_payload, parse_points_from_clipboard};
pub use writer::serialize_points_for_clipboard;
