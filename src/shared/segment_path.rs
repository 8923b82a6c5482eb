//! Zeichenpfad eines Segments: Gerade oder aufgelöster Kreisbogen.
//!
//! Layer-neutral: `app` nutzt die Distanzfunktion fürs Picking, der
//! Renderer die Polyline-Abtastung. Beides arbeitet auf derselben
//! aufgelösten Geometrie, damit Hit-Test und Darstellung übereinstimmen.

use crate::core::{calculate_circular_arc, CircularArc, Segment, Vertex};
use glam::DVec2;
use std::f64::consts::TAU;

/// Aufgelöster Zeichenpfad zwischen zwei Vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentPath {
    /// Gerades Segment (keine oder degenerierte Krümmung)
    Line {
        /// Startpunkt
        from: DVec2,
        /// Endpunkt
        to: DVec2,
    },
    /// Gekrümmtes Segment mit aufgelöster Bogengeometrie
    Arc(CircularArc),
}

impl SegmentPath {
    /// Baut den Pfad eines Segments aus der Vertex-Liste.
    ///
    /// `None` nur bei ungültigen Vertex-Indizes; eine degenerierte Kurve
    /// fällt stattdessen auf die Gerade zurück.
    pub fn for_segment(segment: &Segment, vertexes: &[Vertex]) -> Option<SegmentPath> {
        let p0 = vertexes.get(segment.v0)?.position();
        let p1 = vertexes.get(segment.v1)?.position();
        Some(Self::from_endpoints(p0, p1, segment))
    }

    fn from_endpoints(p0: DVec2, p1: DVec2, segment: &Segment) -> SegmentPath {
        match calculate_circular_arc(p0, p1, segment.curve) {
            Some(arc) => SegmentPath::Arc(arc),
            None => SegmentPath::Line { from: p0, to: p1 },
        }
    }

    /// Pfadlänge (Sehne bzw. Bogenlänge).
    pub fn length(&self) -> f64 {
        match self {
            SegmentPath::Line { from, to } => from.distance(*to),
            SegmentPath::Arc(arc) => arc.radius * arc.sweep.abs(),
        }
    }

    /// Startpunkt des Pfads.
    pub fn start(&self) -> DVec2 {
        match self {
            SegmentPath::Line { from, .. } => *from,
            SegmentPath::Arc(arc) => arc.point_at_angle(arc.start_angle),
        }
    }

    /// Endpunkt des Pfads.
    pub fn end(&self) -> DVec2 {
        match self {
            SegmentPath::Line { to, .. } => *to,
            SegmentPath::Arc(arc) => arc.point_at_angle(arc.end_angle),
        }
    }

    /// Tastet den Pfad als Polyline ab, mit Schrittweite ≤ `max_step`.
    ///
    /// Kreisbögen brauchen keine LUT wie parametrische Splines: die
    /// Bogenlänge ist geschlossen bekannt, gleichmäßige Winkelschritte
    /// sind bereits arc-length-gleichverteilt.
    pub fn points(&self, max_step: f64) -> Vec<DVec2> {
        match self {
            SegmentPath::Line { from, to } => {
                let length = from.distance(*to);
                let steps = (length / max_step).ceil().max(1.0) as usize;
                let mut result = Vec::with_capacity(steps + 1);
                for i in 0..steps {
                    let t = i as f64 / steps as f64;
                    result.push(from.lerp(*to, t));
                }
                result.push(*to);
                result
            }
            SegmentPath::Arc(arc) => {
                let length = arc.radius * arc.sweep.abs();
                let steps = (length / max_step).ceil().max(1.0) as usize;
                let mut result = Vec::with_capacity(steps + 1);
                for i in 0..=steps {
                    let t = i as f64 / steps as f64;
                    result.push(arc.point_at_angle(arc.start_angle + arc.sweep * t));
                }
                result
            }
        }
    }

    /// Kürzeste Distanz vom Punkt zum Pfad (fürs Segment-Picking).
    pub fn distance_to(&self, point: DVec2) -> f64 {
        match self {
            SegmentPath::Line { from, to } => distance_point_segment(point, *from, *to),
            SegmentPath::Arc(arc) => arc.distance_to(point),
        }
    }
}

impl CircularArc {
    /// Punkt auf dem Kreis beim gegebenen Winkel.
    pub fn point_at_angle(&self, angle: f64) -> DVec2 {
        self.center + DVec2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Kürzeste Distanz vom Punkt zum Bogen.
    ///
    /// Liegt der Punktwinkel im überstrichenen Sektor, ist die Distanz
    /// `| |p − center| − r |`; sonst entscheidet der nähere Endpunkt.
    pub fn distance_to(&self, point: DVec2) -> f64 {
        let offset = point - self.center;
        let angle = offset.y.atan2(offset.x);

        let swept = if self.anticlockwise {
            (angle - self.start_angle).rem_euclid(TAU)
        } else {
            (self.start_angle - angle).rem_euclid(TAU)
        };

        if swept <= self.sweep.abs() {
            (offset.length() - self.radius).abs()
        } else {
            let to_start = point.distance(self.point_at_angle(self.start_angle));
            let to_end = point.distance(self.point_at_angle(self.end_angle));
            to_start.min(to_end)
        }
    }
}

fn distance_point_segment(point: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let length_sq = ab.length_squared();
    if length_sq <= f64::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}
