//! Use-Case: Selektierte Vertices verschieben (Drag im Select-Tool).

use crate::app::AppState;
use std::sync::Arc;

/// Verschiebt alle selektierten Vertices um `delta` Map-Einheiten.
///
/// Sehnen-Geometrie und Spatial-Index werden einmal pro Aufruf neu
/// aufgebaut, nicht pro Vertex — der Use-Case läuft bei jedem Drag-Tick.
pub fn move_selected_vertices(state: &mut AppState, delta: glam::DVec2) {
    if state.selection.selected_vertices.is_empty() {
        return;
    }

    let Some(stadium_arc) = state.stadium.as_mut() else {
        return;
    };
    let stadium = Arc::make_mut(stadium_arc);

    let indices: Vec<usize> = state.selection.selected_vertices.iter().copied().collect();
    let moved = stadium.translate_vertices(&indices, delta);

    log::debug!(
        "{} Vertex(es) um ({:.1}, {:.1}) verschoben",
        moved,
        delta.x,
        delta.y
    );
}

/// Setzt einen einzelnen Vertex auf eine absolute Position.
pub fn set_vertex_position(state: &mut AppState, index: usize, position: glam::DVec2) {
    let Some(stadium_arc) = state.stadium.as_mut() else {
        return;
    };
    let stadium = Arc::make_mut(stadium_arc);

    if !stadium.update_vertex_position(index, position) {
        log::warn!("Vertex {} existiert nicht", index);
    }
}
