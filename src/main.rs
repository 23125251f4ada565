//! Curve Editor (headless).
//!
//! Lädt die Optionen, baut einen Plot (Startkurve oder Punkte aus einer
//! Zwischenablage-Datei) und gibt SVG-Pfaddaten sowie eine abgetastete
//! Wertetabelle der Spline aus.

use anyhow::Context;
use curve_editor::{clipboard, AppController, AppIntent, AppState, EditorOptions};
use std::path::PathBuf;

/// Zeilen der Wertetabelle.
const SAMPLE_ROWS: usize = 21;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("Curve Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Datei nicht lesbar: {}", path.display()))?;
        let points = clipboard::decode_payload(&text)
            .with_context(|| format!("Kein gültiger Punkte-Payload: {}", path.display()))?;
        log::info!("{} Punkte aus {} gelesen", points.len(), path.display());
        controller.handle_intent(&mut state, AppIntent::ReplacePointsRequested { points })?;
    }

    let plot = state.active().context("Kein aktiver Plot vorhanden")?;
    let spline = plot.spline();

    println!("# {} ({} Punkte)", plot.name, plot.points.len());
    println!("path: {}", spline.path().to_svg_path_data());
    println!("{:>14} {:>14}", "x", "y");
    for sample in spline.sample(plot.domain_x.min, plot.domain_x.max, SAMPLE_ROWS) {
        println!("{:>14.6} {:>14.6}", sample.x, sample.y);
    }

    Ok(())
}
