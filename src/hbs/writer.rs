//! Writer für .hbs-Stadion-Maps.

use super::schema::{SegmentRecord, StadiumFile};
use crate::core::StadiumMap;
use anyhow::{Context, Result};

/// Schreibt eine Stadion-Map als .hbs-JSON-String.
///
/// Krümmung wird als einzelnes Winkel-Äquivalent persistiert
/// (`Segment::stored_curve`); gerade Segmente lassen das Feld weg.
/// Die Session-Form `curveData` wird bewusst nicht geschrieben.
pub fn write_stadium(map: &StadiumMap) -> Result<String> {
    let segments = map
        .segments()
        .iter()
        .map(|segment| SegmentRecord {
            v0: segment.v0,
            v1: segment.v1,
            color: segment.color.clone(),
            curve: segment.stored_curve(),
            curve_data: None,
        })
        .collect();

    let file = StadiumFile {
        name: map.name.clone(),
        width: map.width,
        height: map.height,
        bg: map.bg.clone(),
        vertexes: map.vertexes.clone(),
        segments,
        discs: map.discs.clone(),
        goals: map.goals.clone(),
        planes: map.planes.clone(),
        joints: map.joints.clone(),
        traits: map.traits.clone(),
        can_be_stored: map.can_be_stored,
    };

    serde_json::to_string_pretty(&file).context("Map ließ sich nicht serialisieren")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CurveSpec, Segment, Vertex};

    fn sample_map() -> StadiumMap {
        let mut map = StadiumMap::new("Write", 420.0, 200.0);
        map.add_vertex(Vertex::new(0.0, 0.0));
        map.add_vertex(Vertex::new(100.0, 0.0));
        let p0 = map.vertex_position(0).unwrap();
        let p1 = map.vertex_position(1).unwrap();
        map.add_segment(Segment::new(
            0,
            1,
            Some("FF0000".to_string()),
            CurveSpec::Radius(70.710678),
            p0,
            p1,
        ));
        map
    }

    #[test]
    fn writes_curve_as_single_angle_number() {
        let json = write_stadium(&sample_map()).expect("Serialisierung erwartet");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let segment = &value["segments"][0];
        // Nur das numerische Winkel-Feld überquert die Dateigrenze
        assert!(segment.get("curveData").is_none());
        let angle = segment["curve"].as_f64().expect("Winkel erwartet");
        assert!((angle - 90.0).abs() < 1e-5);
    }

    #[test]
    fn straight_segments_omit_the_curve_field() {
        let mut map = sample_map();
        map.set_segment_curve(0, CurveSpec::Angle(0.0));

        let json = write_stadium(&map).expect("Serialisierung erwartet");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["segments"][0].get("curve").is_none());
    }

    #[test]
    fn passthrough_collections_survive() {
        let mut map = sample_map();
        map.discs.push(serde_json::json!({ "radius": 10, "pos": [0, 0] }));
        map.traits
            .insert("ballArea".to_string(), serde_json::json!({ "vis": false }));

        let json = write_stadium(&map).expect("Serialisierung erwartet");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["discs"][0]["radius"], 10);
        assert_eq!(value["traits"]["ballArea"]["vis"], false);
        assert_eq!(value["canBeStored"], true);
    }
}
