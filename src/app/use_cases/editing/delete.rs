//! Use-Case: Selektierte Vertices bzw. Segmente löschen.
//!
//! Vertex-Löschung entfernt alle Segmente mit, die einen gelöschten Vertex
//! referenzieren, und rückt die Indizes der überlebenden Segmente nach
//! (`StadiumMap::remove_vertices`). Selektionen werden danach geleert —
//! die alten Indizes sind nicht mehr gültig.

use crate::app::AppState;
use std::sync::Arc;

/// Löscht alle selektierten Vertices inklusive der betroffenen Segmente.
pub fn delete_selected_vertices(state: &mut AppState) {
    if state.selection.selected_vertices.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    }

    let Some(stadium_arc) = state.stadium.as_mut() else {
        return;
    };
    let stadium = Arc::make_mut(stadium_arc);

    let indices: Vec<usize> = state.selection.selected_vertices.iter().copied().collect();
    let result = stadium.remove_vertices(&indices);

    state.selection.clear();
    state.editor.segment_source_vertex = None;

    log::info!(
        "{} Vertex(es) gelöscht, {} Segment(e) mitentfernt",
        result.removed_vertices,
        result.removed_segments
    );
}

/// Löscht alle selektierten Segmente.
pub fn delete_selected_segments(state: &mut AppState) {
    if state.selection.selected_segments.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    }

    let Some(stadium_arc) = state.stadium.as_mut() else {
        return;
    };
    let stadium = Arc::make_mut(stadium_arc);

    let indices: Vec<usize> = state.selection.selected_segments.iter().copied().collect();
    let removed = stadium.remove_segments(&indices);

    state.selection.segments_mut().clear();

    log::info!("{} Segment(e) gelöscht", removed);
}
