//! Zentrale Konfiguration für den HaxTrace-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── View ────────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const ZOOM_MIN: f64 = 0.1;
/// Maximaler Zoom-Faktor.
pub const ZOOM_MAX: f64 = 5.0;
/// Zoom-Schritt der Zoom-Buttons.
pub const ZOOM_STEP: f64 = 1.2;
/// Standard-Rastergröße in Map-Einheiten.
pub const GRID_SIZE_DEFAULT: f64 = 20.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Standard-Farbe neuer Segmente.
pub const DEFAULT_SEGMENT_COLOR: &str = "FFFFFF";

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius für Vertices in Map-Einheiten.
pub const VERTEX_PICK_RADIUS: f64 = 10.0;
/// Maximale Distanz zum Segmentpfad beim Segment-Picking.
pub const SEGMENT_PICK_RADIUS: f64 = 6.0;

// ── Rendering ───────────────────────────────────────────────────────

/// Maximale Polyline-Schrittweite beim Abtasten von Bögen (Map-Einheiten).
pub const ARC_SAMPLE_MAX_STEP: f64 = 8.0;

/// Laufzeit-Optionen des Editors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Farbe, mit der neue Segmente angelegt werden
    pub default_segment_color: String,
    /// Pick-Radius für Vertices in Map-Einheiten
    pub vertex_pick_radius: f64,
    /// Maximale Distanz zum Segmentpfad beim Segment-Picking
    pub segment_pick_radius: f64,
    /// Maximale Polyline-Schrittweite beim Abtasten von Bögen
    pub arc_sample_max_step: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_segment_color: DEFAULT_SEGMENT_COLOR.to_string(),
            vertex_pick_radius: VERTEX_PICK_RADIUS,
            segment_pick_radius: SEGMENT_PICK_RADIUS,
            arc_sample_max_step: ARC_SAMPLE_MAX_STEP,
        }
    }
}
