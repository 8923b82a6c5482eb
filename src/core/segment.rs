//! Repräsentiert ein Segment zwischen zwei Vertices.

use super::CurveSpec;
use glam::DVec2;

/// Ein Segment zwischen zwei Vertices der Map.
///
/// `chord` und `midpoint` sind aus den Vertex-Positionen abgeleitete Caches
/// und werden nach jeder Positionsänderung über `update_geometry`
/// aktualisiert.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Index des Start-Vertex in der Vertex-Liste
    pub v0: usize,
    /// Index des End-Vertex in der Vertex-Liste
    pub v1: usize,
    /// Farbe als Hex-String (None = Editor-Standardfarbe)
    pub color: Option<String>,
    /// Krümmung in der aktiven Editor-Repräsentation
    pub curve: CurveSpec,
    /// Sehnenlänge zwischen beiden Vertices
    pub chord: f64,
    /// Mittelpunkt der Sehne
    pub midpoint: DVec2,
}

impl Segment {
    /// Erstellt ein neues Segment und berechnet die Sehnen-Geometrie.
    pub fn new(v0: usize, v1: usize, color: Option<String>, curve: CurveSpec, p0: DVec2, p1: DVec2) -> Self {
        let (chord, midpoint) = Self::calculate_geometry(p0, p1);
        Self {
            v0,
            v1,
            color,
            curve,
            chord,
            midpoint,
        }
    }

    /// Aktualisiert die Geometrie auf Basis der Vertex-Positionen.
    pub fn update_geometry(&mut self, p0: DVec2, p1: DVec2) {
        let (chord, midpoint) = Self::calculate_geometry(p0, p1);
        self.chord = chord;
        self.midpoint = midpoint;
    }

    fn calculate_geometry(p0: DVec2, p1: DVec2) -> (f64, DVec2) {
        (p0.distance(p1), (p0 + p1) * 0.5)
    }

    /// true, wenn das Segment als Gerade gezeichnet wird.
    pub fn is_straight(&self) -> bool {
        self.curve.is_near_zero()
    }

    /// Winkel-Äquivalent der Krümmung fürs persistierte `curve`-Feld.
    ///
    /// `None` für gerade Segmente und für Umrechnungen außerhalb des
    /// Definitionsbereichs — das Format lässt das Feld dann weg.
    pub fn stored_curve(&self) -> Option<f64> {
        if self.is_near_zero_or_degenerate() {
            return None;
        }
        let angle = self.curve.to_angle(self.chord);
        if angle.is_finite() && angle.abs() >= CurveSpec::NEAR_ZERO {
            Some(angle)
        } else {
            None
        }
    }

    fn is_near_zero_or_degenerate(&self) -> bool {
        self.curve.is_near_zero() || self.chord <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_segment_caches_chord_and_midpoint() {
        let seg = Segment::new(
            0,
            1,
            None,
            CurveSpec::default(),
            DVec2::new(0.0, 0.0),
            DVec2::new(30.0, 40.0),
        );
        assert_relative_eq!(seg.chord, 50.0, max_relative = 1e-12);
        assert_eq!(seg.midpoint, DVec2::new(15.0, 20.0));
        assert!(seg.is_straight());
    }

    #[test]
    fn update_geometry_follows_moved_vertices() {
        let mut seg = Segment::new(
            0,
            1,
            None,
            CurveSpec::Angle(90.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(100.0, 0.0),
        );
        seg.update_geometry(DVec2::new(0.0, 0.0), DVec2::new(0.0, 10.0));
        assert_relative_eq!(seg.chord, 10.0, max_relative = 1e-12);
        assert_eq!(seg.midpoint, DVec2::new(0.0, 5.0));
    }

    #[test]
    fn stored_curve_is_the_angle_equivalent() {
        let seg = Segment::new(
            0,
            1,
            None,
            CurveSpec::Radius(70.710678),
            DVec2::new(0.0, 0.0),
            DVec2::new(100.0, 0.0),
        );
        let angle = seg.stored_curve().expect("Winkel erwartet");
        assert_relative_eq!(angle, 90.0, max_relative = 1e-6);
    }

    #[test]
    fn stored_curve_omits_straight_and_degenerate_segments() {
        let straight = Segment::new(
            0,
            1,
            None,
            CurveSpec::Angle(0.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(100.0, 0.0),
        );
        assert_eq!(straight.stored_curve(), None);

        // Radius kleiner als halbe Sehne: kein reeller Winkel
        let degenerate = Segment::new(
            0,
            1,
            None,
            CurveSpec::Radius(10.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(100.0, 0.0),
        );
        assert_eq!(degenerate.stored_curve(), None);

        let zero_chord = Segment::new(
            0,
            1,
            None,
            CurveSpec::Angle(90.0),
            DVec2::new(5.0, 5.0),
            DVec2::new(5.0, 5.0),
        );
        assert_eq!(zero_chord.stored_curve(), None);
    }
}
