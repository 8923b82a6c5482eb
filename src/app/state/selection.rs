use indexmap::IndexSet;
use std::sync::Arc;

/// Auswahlbezogener Anwendungszustand.
///
/// `IndexSet` statt `HashSet`: die Einfügereihenfolge ist sichtbares
/// Verhalten — der Kurven-Editor bearbeitet das zuerst selektierte Segment.
#[derive(Clone, Default)]
pub struct SelectionState {
    /// Indizes der aktuell selektierten Vertices (Arc für O(1)-Clone in RenderScene)
    pub selected_vertices: Arc<IndexSet<usize>>,
    /// Indizes der aktuell selektierten Segmente (Arc für O(1)-Clone in RenderScene)
    pub selected_segments: Arc<IndexSet<usize>>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_vertices: Arc::new(IndexSet::new()),
            selected_segments: Arc::new(IndexSet::new()),
        }
    }

    /// Mutable Referenz auf die Vertex-Selektion (CoW: klont nur wenn nötig).
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut IndexSet<usize> {
        Arc::make_mut(&mut self.selected_vertices)
    }

    /// Mutable Referenz auf die Segment-Selektion (CoW: klont nur wenn nötig).
    #[inline]
    pub fn segments_mut(&mut self) -> &mut IndexSet<usize> {
        Arc::make_mut(&mut self.selected_segments)
    }

    /// Das zuerst selektierte Segment — Ziel des Kurven-Editors.
    pub fn primary_segment(&self) -> Option<usize> {
        self.selected_segments.first().copied()
    }

    /// Leert beide Selektionen.
    pub fn clear(&mut self) {
        self.vertices_mut().clear();
        self.segments_mut().clear();
    }
}
