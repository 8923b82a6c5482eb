//! Use-Case: Segmente erstellen (direkt und über das Segment-Tool).

use crate::app::AppState;
use crate::core::{CurveSpec, Segment};
use std::sync::Arc;

/// Erstellt ein Segment zwischen zwei Vertices.
///
/// Validiert gegen Self-Loops, ungültige Indizes und exakte Duplikate.
/// Neue Segmente starten gerade (Winkel 0) mit der eingestellten Farbe.
pub fn add_segment(state: &mut AppState, v0: usize, v1: usize) {
    if v0 == v1 {
        log::warn!("Self-Loop nicht erlaubt (Vertex {})", v0);
        return;
    }

    let Some(stadium_arc) = state.stadium.as_ref() else {
        return;
    };

    // Prüfe ob beide Vertices existieren
    if v0 >= stadium_arc.vertex_count() || v1 >= stadium_arc.vertex_count() {
        log::warn!(
            "Segment nicht möglich: Vertex {} oder {} existiert nicht",
            v0,
            v1
        );
        return;
    }

    // Duplikat-Check: exaktes Match auf v0 + v1
    if stadium_arc.has_segment(v0, v1) {
        log::warn!("Segment {}→{} existiert bereits", v0, v1);
        return;
    }

    let color = state.editor.default_segment_color.clone();

    let Some(stadium_arc) = state.stadium.as_mut() else {
        log::warn!("Segment nicht möglich: keine Map geladen");
        return;
    };
    let stadium = Arc::make_mut(stadium_arc);

    let p0 = stadium.vertexes[v0].position();
    let p1 = stadium.vertexes[v1].position();

    let segment = Segment::new(v0, v1, Some(color), CurveSpec::default(), p0, p1);
    let index = stadium.add_segment(segment);

    state.selection.segments_mut().clear();
    state.selection.segments_mut().insert(index);

    log::info!("Segment {}→{} erstellt (Index {})", v0, v1, index);
}

/// Segment-Tool: Nächsten Vertex an Weltposition picken.
///
/// Beim ersten Klick wird der Quell-Vertex gesetzt.
/// Beim zweiten Klick wird das Segment erstellt und die Quelle zurückgesetzt.
pub fn segment_tool_pick_vertex(state: &mut AppState, world_pos: glam::DVec2, max_distance: f64) {
    let Some(stadium) = state.stadium.as_deref() else {
        return;
    };

    let hit = stadium
        .nearest_vertex(world_pos)
        .filter(|hit| hit.distance <= max_distance)
        .map(|hit| hit.index);

    let Some(vertex_index) = hit else {
        // Kein Vertex getroffen — Quelle zurücksetzen
        state.editor.segment_source_vertex = None;
        log::debug!("Segment-Tool: kein Vertex gefunden, Quelle zurückgesetzt");
        return;
    };

    if let Some(source_index) = state.editor.segment_source_vertex.take() {
        // Zweiter Klick: Segment erstellen
        add_segment(state, source_index, vertex_index);
    } else {
        // Erster Klick: Quelle setzen
        state.editor.segment_source_vertex = Some(vertex_index);
        // Quell-Vertex selektieren als visuelles Feedback
        state.selection.vertices_mut().clear();
        state.selection.vertices_mut().insert(vertex_index);
        log::info!("Segment-Tool: Startvertex {} gewählt", vertex_index);
    }
}
