//! Wire-Schema des .hbs-Formats (serde-DTOs).
//!
//! Getrennt vom Core-Datenmodell: `Segment` trägt im Editor Caches und die
//! `CurveSpec`-Session-Form, auf der Datei steht nur das nackte Schema.

use crate::core::{Background, CurveSpec, Vertex};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Segment, wie es in der Datei steht.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRecord {
    /// Index des Start-Vertex
    pub v0: usize,
    /// Index des End-Vertex
    pub v1: usize,
    /// Farbe als Hex-String
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Krümmung als Winkel-Äquivalent in Grad (Abwesenheit = gerade)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<f64>,
    /// Editor-Krümmungsobjekt; wird gelesen, aber nie geschrieben
    #[serde(
        rename = "curveData",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub curve_data: Option<CurveSpec>,
}

/// Vollständige Map, wie sie in der Datei steht.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StadiumFile {
    /// Anzeigename der Map
    pub name: String,
    /// Halbe Spielfeldbreite
    pub width: f64,
    /// Halbe Spielfeldhöhe
    pub height: f64,
    /// Hintergrund (Farbe + optionales Referenzbild)
    pub bg: Background,
    /// Vertex-Liste
    #[serde(default)]
    pub vertexes: Vec<Vertex>,
    /// Segment-Liste
    #[serde(default)]
    pub segments: Vec<SegmentRecord>,
    /// Discs, unverändert durchgereicht
    #[serde(default)]
    pub discs: Vec<Value>,
    /// Goals, unverändert durchgereicht
    #[serde(default)]
    pub goals: Vec<Value>,
    /// Planes, unverändert durchgereicht
    #[serde(default)]
    pub planes: Vec<Value>,
    /// Joints, unverändert durchgereicht
    #[serde(default)]
    pub joints: Vec<Value>,
    /// Trait-Definitionen, unverändert durchgereicht
    #[serde(default)]
    pub traits: Map<String, Value>,
    /// Haxball-Flag: Map darf im Raum gespeichert werden
    #[serde(rename = "canBeStored", default = "default_can_be_stored")]
    pub can_be_stored: bool,
}

fn default_can_be_stored() -> bool {
    true
}
