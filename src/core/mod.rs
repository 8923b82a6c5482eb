//! Core-Domänentypen: Vertices, Segmente, Kurven, StadiumMap, Spatial-Index.

pub mod arc;
pub mod background;
/// Core-Datenmodelle für Stadion-Maps
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - StadiumMap: Container für Vertices, Segmente und durchgereichte Kollektionen
/// - Vertex: Einzelner Eckpunkt
/// - Segment: Verbindung zwischen zwei Vertices mit optionaler Krümmung
/// - CurveSpec/arc: Kurven-Repräsentationen und Kreisbogen-Mathematik
pub mod curve;
pub mod segment;
pub mod spatial;
pub mod stadium;
pub mod vertex;

pub use arc::{
    angle_to_radius, angle_to_sagitta, calculate_circular_arc, chord_length, radius_to_angle,
    radius_to_sagitta, sagitta_to_angle, sagitta_to_radius, CircularArc,
};
pub use background::{Background, BackgroundImage, FitMode};
pub use curve::{CurveKind, CurveSpec};
pub use segment::Segment;
pub use spatial::{SpatialIndex, SpatialMatch};
pub use stadium::{StadiumMap, VertexRemoval};
pub use vertex::Vertex;
