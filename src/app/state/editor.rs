use crate::shared::options::DEFAULT_SEGMENT_COLOR;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Vertices/Segmente selektieren und verschieben
    #[default]
    Select,
    /// Neue Vertices auf der Karte platzieren
    Vertex,
    /// Segmente zwischen zwei Vertices erstellen
    Segment,
    /// Ansicht verschieben
    Pan,
}

/// Zustand des aktuellen Editor-Werkzeugs
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Quell-Vertex für das Segment-Tool (wartet auf Ziel)
    pub segment_source_vertex: Option<usize>,
    /// Farbe für neu angelegte Segmente
    pub default_segment_color: String,
}

impl Default for EditorToolState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Select-Tool aktiv).
    pub fn new() -> Self {
        Self {
            active_tool: EditorTool::Select,
            segment_source_vertex: None,
            default_segment_color: DEFAULT_SEGMENT_COLOR.to_string(),
        }
    }
}
