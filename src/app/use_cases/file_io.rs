//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use std::sync::Arc;

/// Lädt eine .hbs-Datei in den AppState.
pub fn load_stadium_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let json_content = std::fs::read_to_string(path)?;
    let stadium = crate::hbs::parse_stadium(&json_content)?;

    state.selection.clear();
    state.editor.segment_source_vertex = None;

    log::info!(
        "Map geladen: {} ({} Vertices, {} Segmente)",
        stadium.name,
        stadium.vertex_count(),
        stadium.segment_count()
    );

    state.stadium = Some(Arc::new(stadium));
    Ok(())
}

/// Schreibt die aktuelle Map als .hbs-JSON in eine Datei.
pub fn save_stadium_file(state: &AppState, path: &str) -> anyhow::Result<()> {
    let stadium = state
        .stadium
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Keine Map geladen"))?;

    let json_content = crate::hbs::write_stadium(stadium)?;
    std::fs::write(path, json_content)?;

    log::info!("Map gespeichert: {}", path);
    Ok(())
}
