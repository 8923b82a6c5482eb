//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Alle Felder sind Clones bzw. Arc-Clones — der Renderer hält nie eine
/// Referenz in den mutierbaren Editor-Zustand hinein.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        stadium: state.stadium.clone(),
        selected_vertices: state.selection.selected_vertices.clone(),
        selected_segments: state.selection.selected_segments.clone(),
        segment_source_vertex: state.editor.segment_source_vertex,
        zoom: state.view.zoom,
        grid_visible: state.view.grid_visible,
        grid_size: state.view.grid_size,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::{StadiumMap, Vertex};
    use std::sync::Arc;

    #[test]
    fn build_mirrors_state_without_map() {
        let state = AppState::new();
        let scene = build(&state);
        assert!(!scene.has_map());
        assert!(scene.selected_vertices.is_empty());
    }

    #[test]
    fn build_shares_the_stadium_arc() {
        let mut state = AppState::new();
        let mut map = StadiumMap::new("Scene", 420.0, 200.0);
        map.add_vertex(Vertex::new(0.0, 0.0));
        state.stadium = Some(Arc::new(map));
        state.selection.vertices_mut().insert(0);

        let scene = build(&state);
        assert!(scene.has_map());
        assert_eq!(scene.stadium.as_ref().unwrap().vertex_count(), 1);
        assert!(scene.selected_vertices.contains(&0));
        // Arc geteilt, kein Deep-Clone
        assert!(Arc::ptr_eq(
            scene.stadium.as_ref().unwrap(),
            state.stadium.as_ref().unwrap()
        ));
    }
}
