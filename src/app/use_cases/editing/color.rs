//! Use-Case: Farbe selektierter Segmente ändern.

use crate::app::AppState;
use std::sync::Arc;

/// Setzt die Farbe aller selektierten Segmente und merkt sie als
/// Standardfarbe für neu angelegte Segmente vor.
pub fn set_selected_segments_color(state: &mut AppState, color: String) {
    state.editor.default_segment_color = color.clone();

    if state.selection.selected_segments.is_empty() {
        return;
    }

    let Some(stadium_arc) = state.stadium.as_mut() else {
        return;
    };
    let stadium = Arc::make_mut(stadium_arc);

    let mut changed = 0;
    for &index in state.selection.selected_segments.iter() {
        if stadium.set_segment_color(index, Some(color.clone())) {
            changed += 1;
        }
    }

    log::info!("Farbe {} auf {} Segment(e) angewendet", color, changed);
}
