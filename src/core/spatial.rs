//! Spatial-Index (KD-Tree) für schnelle Vertex-Abfragen.

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::Vertex;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Index des gefundenen Vertex in der Vertex-Liste
    pub index: usize,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Read-only Spatial-Index über allen Vertices einer Map.
///
/// Die Vertex-Liste ist dicht indiziert, daher ist das KD-Tree-Item
/// direkt der Listenindex — kein ID-Mapping nötig.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    positions: Vec<DVec2>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            positions: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus der Vertex-Liste.
    pub fn from_vertices(vertexes: &[Vertex]) -> Self {
        let entries: Vec<[f64; 2]> = vertexes.iter().map(|v| [v.x, v.y]).collect();
        let tree: KdTree<f64, 2> = (&entries).into();
        let positions = vertexes.iter().map(Vertex::position).collect();

        Self { tree, positions }
    }

    /// Gibt die Anzahl indexierter Vertices zurück.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Gibt `true` zurück, wenn keine Vertices im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Findet den nächsten Vertex zur gegebenen Weltposition.
    pub fn nearest(&self, query: DVec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self.tree.nearest_one::<SquaredEuclidean>(&[query.x, query.y]);

        Some(SpatialMatch {
            index: result.item as usize,
            distance: result.distance.sqrt(),
        })
    }

    /// Findet alle Vertices innerhalb eines Radius, nach Distanz sortiert.
    pub fn within_radius(&self, query: DVec2, radius: f64) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], radius * radius)
            .into_iter()
            .map(|entry| SpatialMatch {
                index: entry.item as usize,
                distance: entry.distance.sqrt(),
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }

    /// Findet alle Vertices innerhalb eines axis-aligned Rechtecks.
    ///
    /// KD-Tree-Vorfilter über den umschließenden Kreis, danach exakte
    /// Rechteck-Prüfung.
    pub fn within_rect(&self, min: DVec2, max: DVec2) -> Vec<usize> {
        if self.is_empty() {
            return Vec::new();
        }

        let center = (min + max) * 0.5;
        let half = (max - min) * 0.5;
        let radius_sq = half.length_squared();

        self.tree
            .within::<SquaredEuclidean>(&[center.x, center.y], radius_sq)
            .into_iter()
            .filter_map(|entry| {
                let index = entry.item as usize;
                let pos = self.positions.get(index)?;
                if pos.x >= min.x && pos.x <= max.x && pos.y >= min.y && pos.y <= max.y {
                    Some(index)
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vertices() -> Vec<Vertex> {
        vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(10.0, 0.0),
            Vertex::new(4.0, 3.0),
        ]
    }

    #[test]
    fn nearest_returns_expected_vertex() {
        let index = SpatialIndex::from_vertices(&sample_vertices());
        let nearest = index
            .nearest(DVec2::new(3.9, 2.9))
            .expect("Treffer erwartet");

        assert_eq!(nearest.index, 2);
        assert!(nearest.distance < 0.2);
    }

    #[test]
    fn radius_query_returns_sorted_matches() {
        let index = SpatialIndex::from_vertices(&sample_vertices());
        let matches = index.within_radius(DVec2::new(0.0, 0.0), 6.0);

        let indices: Vec<usize> = matches.into_iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn rect_query_returns_vertices_inside_bounds() {
        let index = SpatialIndex::from_vertices(&sample_vertices());
        let mut indices = index.within_rect(DVec2::new(-1.0, -1.0), DVec2::new(5.0, 3.5));
        indices.sort_unstable();

        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = SpatialIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.nearest(DVec2::new(0.0, 0.0)).is_none());
    }
}
