//! Use-Case: Krümmung eines Segments bearbeiten.
//!
//! Zwei Eingriffe aus dem Kurven-Editor-Panel: Wert in der aktiven
//! Repräsentation ändern und Repräsentation umschalten. Beim Umschalten
//! bleibt die sichtbare Bogenform erhalten (`CurveSpec::converted_to`).

use crate::app::AppState;
use crate::core::{calculate_circular_arc, CurveKind, CurveSpec};
use std::sync::Arc;

/// Anzeige-Daten fürs Kurven-Editor-Panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveInfo {
    /// Aktive Repräsentation
    pub kind: CurveKind,
    /// Roher Anzeigewert
    pub value: f64,
    /// Sehnenlänge des Segments
    pub chord: f64,
    /// Rotationsrichtung des aufgelösten Bogens; `None` = Gerade
    pub anticlockwise: Option<bool>,
}

/// Setzt den Kurvenwert eines Segments in der gegebenen Repräsentation.
///
/// Nicht-endliche Eingaben werden zu 0; Winkel werden auf ±340° geclampt,
/// Radius und Sagitta akzeptieren jeden endlichen Wert.
pub fn update_segment_curve(state: &mut AppState, segment_index: usize, kind: CurveKind, value: f64) {
    let value = if value.is_finite() { value } else { 0.0 };
    let spec = CurveSpec::new(kind, value).clamped();

    let Some(stadium_arc) = state.stadium.as_mut() else {
        return;
    };
    let stadium = Arc::make_mut(stadium_arc);

    if stadium.set_segment_curve(segment_index, spec) {
        log::debug!(
            "Segment {}: Kurve {} = {:.2}",
            segment_index,
            kind.as_str(),
            spec.value()
        );
    } else {
        log::warn!("Segment {} existiert nicht", segment_index);
    }
}

/// Schaltet die Kurven-Repräsentation eines Segments um.
///
/// Der neue Wert wird aus der aktuellen Geometrie abgeleitet, nicht auf 0
/// zurückgesetzt — die Bogenform bleibt beim Umschalten sichtbar gleich.
pub fn set_segment_curve_kind(state: &mut AppState, segment_index: usize, kind: CurveKind) {
    let Some(stadium_arc) = state.stadium.as_mut() else {
        return;
    };
    let stadium = Arc::make_mut(stadium_arc);

    // Kurve und Sehne kopieren, bevor mutiert wird
    let Some((current, chord)) = stadium.segment(segment_index).map(|s| (s.curve, s.chord)) else {
        log::warn!("Segment {} existiert nicht", segment_index);
        return;
    };

    let converted = current.converted_to(kind, chord);
    stadium.set_segment_curve(segment_index, converted);

    log::info!(
        "Segment {}: Repräsentation → {} (Wert {:.2})",
        segment_index,
        kind.as_str(),
        converted.value()
    );
}

/// Liefert die Anzeige-Daten des Kurven-Editors für ein Segment.
pub fn segment_curve_info(state: &AppState, segment_index: usize) -> Option<CurveInfo> {
    let stadium = state.stadium.as_deref()?;
    let segment = stadium.segment(segment_index)?;
    let p0 = stadium.vertex_position(segment.v0)?;
    let p1 = stadium.vertex_position(segment.v1)?;

    let arc = calculate_circular_arc(p0, p1, segment.curve);

    Some(CurveInfo {
        kind: segment.curve.kind(),
        value: segment.curve.value(),
        chord: segment.chord,
        anticlockwise: arc.map(|a| a.anticlockwise),
    })
}
