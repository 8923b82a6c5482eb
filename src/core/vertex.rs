//! Ein Vertex (Eckpunkt) der Stadion-Map.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Eckpunkt in Map-Koordinaten. Segmente referenzieren Vertices über
/// ihren Index in der Vertex-Liste der Map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// X-Koordinate in Map-Einheiten
    pub x: f64,
    /// Y-Koordinate in Map-Einheiten
    pub y: f64,
}

impl Vertex {
    /// Erstellt einen Vertex aus Koordinaten.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Erstellt einen Vertex aus einer Weltposition.
    pub fn from_position(position: DVec2) -> Self {
        Self {
            x: position.x,
            y: position.y,
        }
    }

    /// Position als Vektor für die Geometrie-Berechnungen.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}
