//! Use-Case: Selektion per Klick (Nearest-Vertex bzw. nächstes Segment).

use crate::app::AppState;
use crate::shared::SegmentPath;

/// Selektiert den nächstgelegenen Vertex im Pick-Radius.
///
/// `additive = false` ersetzt die Selektion, `true` toggelt den Treffer
/// (Shift-Klick). Gibt den getroffenen Index zurück, `None` bei Leerklick.
pub fn pick_vertex_at(state: &mut AppState, world_pos: glam::DVec2, additive: bool) -> Option<usize> {
    let stadium = state.stadium.as_deref()?;

    let hit = stadium
        .nearest_vertex(world_pos)
        .filter(|hit| hit.distance <= state.options.vertex_pick_radius)
        .map(|hit| hit.index);

    let Some(index) = hit else {
        if !additive {
            state.selection.vertices_mut().clear();
        }
        return None;
    };

    if additive {
        let vertices = state.selection.vertices_mut();
        if !vertices.shift_remove(&index) {
            vertices.insert(index);
        }
    } else {
        state.selection.vertices_mut().clear();
        state.selection.vertices_mut().insert(index);
    }

    log::debug!("Vertex {} gepickt", index);
    Some(index)
}

/// Selektiert das Segment, dessen Zeichenpfad dem Klickpunkt am nächsten liegt.
///
/// Der Hit-Test misst gegen den aufgelösten Pfad (Gerade oder Bogen) —
/// ein stark gekrümmtes Segment ist also auch am Scheitel klickbar,
/// nicht nur entlang der Sehne.
pub fn pick_segment_at(state: &mut AppState, world_pos: glam::DVec2, additive: bool) -> Option<usize> {
    let stadium = state.stadium.as_deref()?;

    let mut best: Option<(usize, f64)> = None;
    for (index, segment) in stadium.segments().iter().enumerate() {
        let Some(path) = SegmentPath::for_segment(segment, &stadium.vertexes) else {
            continue;
        };
        let distance = path.distance_to(world_pos);
        if distance <= state.options.segment_pick_radius
            && best.map_or(true, |(_, d)| distance < d)
        {
            best = Some((index, distance));
        }
    }

    let Some((index, _)) = best else {
        if !additive {
            state.selection.segments_mut().clear();
        }
        return None;
    };

    if additive {
        let segments = state.selection.segments_mut();
        if !segments.shift_remove(&index) {
            segments.insert(index);
        }
    } else {
        state.selection.segments_mut().clear();
        state.selection.segments_mut().insert(index);
    }

    log::debug!("Segment {} gepickt", index);
    Some(index)
}
