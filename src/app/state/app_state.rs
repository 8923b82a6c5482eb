use crate::core::StadiumMap;
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{EditorToolState, SelectionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell geladene Map (None = keine Map geladen)
    pub stadium: Option<Arc<StadiumMap>>,
    /// View-State
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Laufzeit-Optionen (Farben, Pick-Radien, Abtastschritt)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            stadium: None,
            view: ViewState::new(),
            selection: SelectionState::new(),
            editor: EditorToolState::new(),
            options: EditorOptions::default(),
        }
    }

    /// Gibt die Anzahl der Vertices zurück (für UI-Anzeige)
    pub fn vertex_count(&self) -> usize {
        self.stadium.as_ref().map_or(0, |map| map.vertex_count())
    }

    /// Gibt die Anzahl der Segmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.stadium.as_ref().map_or(0, |map| map.segment_count())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
