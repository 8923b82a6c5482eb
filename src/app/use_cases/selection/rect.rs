//! Use-Case: Rechteck-Selektion (Shift + Drag).

use crate::app::AppState;
use glam::DVec2;

/// Selektiert alle Vertices im Rechteck (inkl. Rand).
pub fn select_vertices_in_rect(
    state: &mut AppState,
    corner_a: DVec2,
    corner_b: DVec2,
    additive: bool,
) {
    let Some(stadium) = state.stadium.as_deref() else {
        if !additive {
            state.selection.vertices_mut().clear();
        }
        return;
    };

    let (min, max) = rect_min_max(corner_a, corner_b);
    let hits = stadium.vertices_within_rect(min, max);

    if !additive {
        state.selection.vertices_mut().clear();
    }
    state.selection.vertices_mut().extend(hits);

    log::debug!(
        "Rechteck-Selektion: {} Vertex(es) selektiert",
        state.selection.selected_vertices.len()
    );
}

/// Normalisiert zwei Eckpunkte zu (min, max).
fn rect_min_max(a: DVec2, b: DVec2) -> (DVec2, DVec2) {
    (a.min(b), a.max(b))
}
