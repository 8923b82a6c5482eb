//! Use-Case: Neuen Vertex an einer Weltposition hinzufügen.

use crate::app::AppState;
use crate::core::Vertex;
use std::sync::Arc;

/// Fügt einen neuen Vertex an der gegebenen Weltposition hinzu.
///
/// Der neue Vertex wird anschließend als einziger selektiert, damit das
/// Segment-Tool direkt daran weiterarbeiten kann.
pub fn add_vertex_at_position(state: &mut AppState, world_pos: glam::DVec2) {
    let Some(stadium_arc) = state.stadium.as_mut() else {
        log::warn!("Kein Vertex hinzufügbar: keine Map geladen");
        return;
    };
    let stadium = Arc::make_mut(stadium_arc);
    let index = stadium.add_vertex(Vertex::from_position(world_pos));

    state.selection.clear();
    state.selection.vertices_mut().insert(index);

    log::info!(
        "Vertex {} an Position ({:.1}, {:.1}) hinzugefügt",
        index,
        world_pos.x,
        world_pos.y
    );
}
