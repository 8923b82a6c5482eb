//! Die zentrale StadiumMap-Datenstruktur mit Vertices, Segmenten und Spatial-Index.

use super::{Background, CurveSpec, Segment, Vertex};
use super::{SpatialIndex, SpatialMatch};
use glam::DVec2;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Vollständige Stadion-Map des .hbs-Formats.
///
/// Discs, Goals, Planes, Joints und Traits werden unverändert als JSON
/// durchgereicht — der Editor bearbeitet nur Vertices und Segmente.
#[derive(Debug, Clone)]
pub struct StadiumMap {
    /// Anzeigename der Map
    pub name: String,
    /// Halbe Spielfeldbreite in Map-Einheiten
    pub width: f64,
    /// Halbe Spielfeldhöhe in Map-Einheiten
    pub height: f64,
    /// Hintergrund (Farbe + optionales Referenzbild)
    pub bg: Background,
    /// Alle Vertices; Segmente referenzieren sie über den Listenindex
    pub vertexes: Vec<Vertex>,
    /// Alle Segmente (Zugriff über Methoden, damit Geometrie und Index konsistent bleiben)
    segments: Vec<Segment>,
    /// Discs, unverändert durchgereicht
    pub discs: Vec<Value>,
    /// Goals, unverändert durchgereicht
    pub goals: Vec<Value>,
    /// Planes, unverändert durchgereicht
    pub planes: Vec<Value>,
    /// Joints, unverändert durchgereicht
    pub joints: Vec<Value>,
    /// Trait-Definitionen, unverändert durchgereicht
    pub traits: Map<String, Value>,
    /// Haxball-Flag: Map darf im Raum gespeichert werden
    pub can_be_stored: bool,
    /// Persistenter Spatial-Index für schnelle Vertex-Abfragen
    spatial_index: SpatialIndex,
}

/// Ergebnis einer Vertex-Löschung.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VertexRemoval {
    /// Anzahl entfernter Vertices
    pub removed_vertices: usize,
    /// Anzahl mitentfernter Segmente (referenzierten einen gelöschten Vertex)
    pub removed_segments: usize,
}

impl StadiumMap {
    /// Erstellt eine neue leere Map.
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            bg: Background::default(),
            vertexes: Vec::new(),
            segments: Vec::new(),
            discs: Vec::new(),
            goals: Vec::new(),
            planes: Vec::new(),
            joints: Vec::new(),
            traits: Map::new(),
            can_be_stored: true,
            spatial_index: SpatialIndex::empty(),
        }
    }

    /// Fügt einen Vertex hinzu und gibt seinen Index zurück.
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        self.vertexes.push(vertex);
        self.rebuild_spatial_index();
        self.vertexes.len() - 1
    }

    /// Position eines Vertex, `None` bei ungültigem Index.
    pub fn vertex_position(&self, index: usize) -> Option<DVec2> {
        self.vertexes.get(index).map(Vertex::position)
    }

    /// Verschiebt einen Vertex und hält Segment-Geometrie und Index aktuell.
    pub fn update_vertex_position(&mut self, index: usize, new_position: DVec2) -> bool {
        let Some(vertex) = self.vertexes.get_mut(index) else {
            return false;
        };

        if vertex.position() == new_position {
            return true;
        }

        *vertex = Vertex::from_position(new_position);
        self.rebuild_segment_geometry();
        self.rebuild_spatial_index();
        true
    }

    /// Verschiebt mehrere Vertices um `delta`; baut Geometrie und Index
    /// nur einmal neu auf. Gibt die Anzahl verschobener Vertices zurück.
    pub fn translate_vertices(&mut self, indices: &[usize], delta: DVec2) -> usize {
        let mut moved = 0;
        for &index in indices {
            if let Some(vertex) = self.vertexes.get_mut(index) {
                *vertex = Vertex::from_position(vertex.position() + delta);
                moved += 1;
            }
        }
        if moved > 0 {
            self.rebuild_segment_geometry();
            self.rebuild_spatial_index();
        }
        moved
    }

    /// Entfernt Vertices und alle Segmente, die sie referenzieren.
    ///
    /// Überlebende Segmente werden auf die nachgerückten Listenindizes
    /// umgeschrieben (Index i verliert so viele Plätze, wie gelöschte
    /// Vertices vor ihm lagen).
    pub fn remove_vertices(&mut self, indices: &[usize]) -> VertexRemoval {
        let mut doomed: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.vertexes.len())
            .collect();
        doomed.sort_unstable();
        doomed.dedup();

        if doomed.is_empty() {
            return VertexRemoval::default();
        }

        let doomed_set: HashSet<usize> = doomed.iter().copied().collect();

        // Remap: alter Index → neuer Index (usize::MAX = gelöscht)
        let mut remap = vec![usize::MAX; self.vertexes.len()];
        let mut shift = 0usize;
        for (old_index, slot) in remap.iter_mut().enumerate() {
            if doomed_set.contains(&old_index) {
                shift += 1;
            } else {
                *slot = old_index - shift;
            }
        }

        let segments_before = self.segments.len();
        self.segments.retain_mut(|segment| {
            // Segmente mit ungültigen Referenzen fliegen ebenfalls raus
            if segment.v0 >= remap.len() || segment.v1 >= remap.len() {
                return false;
            }
            if doomed_set.contains(&segment.v0) || doomed_set.contains(&segment.v1) {
                return false;
            }
            segment.v0 = remap[segment.v0];
            segment.v1 = remap[segment.v1];
            true
        });
        let removed_segments = segments_before - self.segments.len();

        let mut position = 0usize;
        self.vertexes.retain(|_| {
            let keep = remap[position] != usize::MAX;
            position += 1;
            keep
        });

        self.rebuild_spatial_index();

        VertexRemoval {
            removed_vertices: doomed.len(),
            removed_segments,
        }
    }

    /// Fügt ein Segment hinzu und gibt seinen Index zurück.
    pub fn add_segment(&mut self, segment: Segment) -> usize {
        self.segments.push(segment);
        self.segments.len() - 1
    }

    /// Prüft, ob ein Segment mit exakt dieser Vertex-Reihenfolge existiert.
    pub fn has_segment(&self, v0: usize, v1: usize) -> bool {
        self.segments.iter().any(|s| s.v0 == v0 && s.v1 == v1)
    }

    /// Segment per Index, `None` bei ungültigem Index.
    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Read-only Sicht auf alle Segmente.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Entfernt die angegebenen Segmente; gibt die Anzahl entfernter zurück.
    pub fn remove_segments(&mut self, indices: &[usize]) -> usize {
        let doomed: HashSet<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.segments.len())
            .collect();
        if doomed.is_empty() {
            return 0;
        }

        let mut position = 0usize;
        self.segments.retain(|_| {
            let keep = !doomed.contains(&position);
            position += 1;
            keep
        });
        doomed.len()
    }

    /// Setzt die Krümmung eines Segments.
    pub fn set_segment_curve(&mut self, index: usize, curve: CurveSpec) -> bool {
        if let Some(segment) = self.segments.get_mut(index) {
            segment.curve = curve;
            true
        } else {
            false
        }
    }

    /// Setzt die Farbe eines Segments.
    pub fn set_segment_color(&mut self, index: usize, color: Option<String>) -> bool {
        if let Some(segment) = self.segments.get_mut(index) {
            segment.color = color;
            true
        } else {
            false
        }
    }

    /// Aktualisiert die Sehnen-Geometrie aller Segmente.
    pub fn rebuild_segment_geometry(&mut self) {
        for segment in &mut self.segments {
            let (Some(p0), Some(p1)) = (
                self.vertexes.get(segment.v0).map(Vertex::position),
                self.vertexes.get(segment.v1).map(Vertex::position),
            ) else {
                continue;
            };
            segment.update_geometry(p0, p1);
        }
    }

    /// Baut den persistenten Spatial-Index aus den aktuellen Vertices neu auf.
    pub fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_vertices(&self.vertexes);
    }

    /// Findet den nächstgelegenen Vertex zur Weltposition.
    pub fn nearest_vertex(&self, query: DVec2) -> Option<SpatialMatch> {
        self.spatial_index.nearest(query)
    }

    /// Findet alle Vertices innerhalb eines Radius.
    pub fn vertices_within_radius(&self, query: DVec2, radius: f64) -> Vec<SpatialMatch> {
        self.spatial_index.within_radius(query, radius)
    }

    /// Findet alle Vertices innerhalb eines Rechtecks.
    pub fn vertices_within_rect(&self, min: DVec2, max: DVec2) -> Vec<usize> {
        self.spatial_index.within_rect(min, max)
    }

    /// Gibt die Anzahl der Vertices zurück.
    pub fn vertex_count(&self) -> usize {
        self.vertexes.len()
    }

    /// Gibt die Anzahl der Segmente zurück.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

impl Default for StadiumMap {
    fn default() -> Self {
        // Klassische Haxball-Feldmaße als Startwerte
        Self::new("Untitled", 420.0, 200.0)
    }
}
