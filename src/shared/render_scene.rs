//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein Renderer (Canvas, Test,
//! Headless-Export) sie konsumiert.

use super::options::EditorOptions;
use crate::core::StadiumMap;
use indexmap::IndexSet;
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Die aktuelle Map (None = keine Map geladen)
    pub stadium: Option<Arc<StadiumMap>>,
    /// Indizes der selektierten Vertices (Arc für O(1)-Clone pro Frame)
    pub selected_vertices: Arc<IndexSet<usize>>,
    /// Indizes der selektierten Segmente (Arc für O(1)-Clone pro Frame)
    pub selected_segments: Arc<IndexSet<usize>>,
    /// Vertex-Index des Segment-Tool-Source (für spezielle Hervorhebung)
    pub segment_source_vertex: Option<usize>,
    /// Zoom-Faktor der Ansicht
    pub zoom: f64,
    /// Raster-Sichtbarkeit
    pub grid_visible: bool,
    /// Rastergröße in Map-Einheiten
    pub grid_size: f64,
    /// Laufzeit-Optionen (Farben, Pick-Radien, Abtastschritt)
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Map für Rendering vorhanden ist.
    pub fn has_map(&self) -> bool {
        self.stadium.is_some()
    }
}
