//! Parser für .hbs-Stadion-Maps.

use super::schema::{SegmentRecord, StadiumFile};
use crate::core::{CurveSpec, Segment, StadiumMap};
use anyhow::{bail, Context, Result};

/// Parsed eine Stadion-Map aus einem .hbs-JSON-String.
pub fn parse_stadium(json_content: &str) -> Result<StadiumMap> {
    let file: StadiumFile =
        serde_json::from_str(json_content).context("Ungültiges .hbs-JSON")?;

    if !file.width.is_finite() || file.width < 1.0 {
        bail!("Map-Breite muss endlich und ≥ 1 sein (war {})", file.width);
    }
    if !file.height.is_finite() || file.height < 1.0 {
        bail!("Map-Höhe muss endlich und ≥ 1 sein (war {})", file.height);
    }
    for (index, vertex) in file.vertexes.iter().enumerate() {
        if !vertex.x.is_finite() || !vertex.y.is_finite() {
            bail!("Vertex {} hat nicht-endliche Koordinaten", index);
        }
    }

    let mut map = StadiumMap::new(file.name, file.width, file.height);
    map.bg = file.bg;
    map.vertexes = file.vertexes;
    map.discs = file.discs;
    map.goals = file.goals;
    map.planes = file.planes;
    map.joints = file.joints;
    map.traits = file.traits;
    map.can_be_stored = file.can_be_stored;

    for (index, record) in file.segments.into_iter().enumerate() {
        let segment = build_segment(&map, record)
            .with_context(|| format!("Segment {} ist ungültig", index))?;
        map.add_segment(segment);
    }

    map.rebuild_spatial_index();

    Ok(map)
}

/// Baut ein Core-Segment aus dem Datei-Record.
///
/// Krümmungs-Priorität: `curveData` (Editor-Session, falls vorhanden) vor
/// dem numerischen `curve`-Feld (Winkel), sonst gerade.
fn build_segment(map: &StadiumMap, record: SegmentRecord) -> Result<Segment> {
    if record.v0 == record.v1 {
        bail!("Self-Loop auf Vertex {}", record.v0);
    }

    let p0 = map
        .vertex_position(record.v0)
        .with_context(|| format!("Vertex-Index {} außerhalb der Liste", record.v0))?;
    let p1 = map
        .vertex_position(record.v1)
        .with_context(|| format!("Vertex-Index {} außerhalb der Liste", record.v1))?;

    let curve = match (record.curve_data, record.curve) {
        (Some(spec), _) => spec,
        (None, Some(angle)) if angle.is_finite() => CurveSpec::Angle(angle),
        _ => CurveSpec::default(),
    };

    Ok(Segment::new(
        record.v0,
        record.v1,
        record.color,
        curve,
        p0,
        p1,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CurveKind;
    use approx::assert_relative_eq;

    const MINIMAL: &str = r#"{
        "name": "Mini",
        "width": 420,
        "height": 200,
        "bg": { "color": "718C5A" },
        "vertexes": [ { "x": 0, "y": 0 }, { "x": 100, "y": 0 } ],
        "segments": [ { "v0": 0, "v1": 1, "curve": 90 } ]
    }"#;

    #[test]
    fn parses_a_minimal_map() {
        let map = parse_stadium(MINIMAL).expect("Parse erwartet");
        assert_eq!(map.name, "Mini");
        assert_eq!(map.vertex_count(), 2);
        assert_eq!(map.segment_count(), 1);
        assert!(map.can_be_stored);

        let segment = map.segment(0).unwrap();
        assert_eq!(segment.curve, CurveSpec::Angle(90.0));
        assert_relative_eq!(segment.chord, 100.0, max_relative = 1e-12);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let map = parse_stadium(MINIMAL).expect("Parse erwartet");
        assert!(map.discs.is_empty());
        assert!(map.goals.is_empty());
        assert!(map.traits.is_empty());
    }

    #[test]
    fn curve_data_takes_precedence_over_the_angle_field() {
        let json = r#"{
            "name": "CD",
            "width": 420,
            "height": 200,
            "bg": { "color": "718C5A" },
            "vertexes": [ { "x": 0, "y": 0 }, { "x": 100, "y": 0 } ],
            "segments": [
                { "v0": 0, "v1": 1, "curve": 90,
                  "curveData": { "type": "radius", "value": 70.7 } }
            ]
        }"#;
        let map = parse_stadium(json).expect("Parse erwartet");
        let segment = map.segment(0).unwrap();
        assert_eq!(segment.curve.kind(), CurveKind::Radius);
        assert_relative_eq!(segment.curve.value(), 70.7, max_relative = 1e-12);
    }

    #[test]
    fn segment_without_curve_is_straight() {
        let json = r#"{
            "name": "S",
            "width": 420,
            "height": 200,
            "bg": { "color": "718C5A" },
            "vertexes": [ { "x": 0, "y": 0 }, { "x": 50, "y": 50 } ],
            "segments": [ { "v0": 0, "v1": 1 } ]
        }"#;
        let map = parse_stadium(json).expect("Parse erwartet");
        assert!(map.segment(0).unwrap().is_straight());
    }

    #[test]
    fn rejects_out_of_range_vertex_indices() {
        let json = r#"{
            "name": "Bad",
            "width": 420,
            "height": 200,
            "bg": { "color": "718C5A" },
            "vertexes": [ { "x": 0, "y": 0 } ],
            "segments": [ { "v0": 0, "v1": 5 } ]
        }"#;
        let err = parse_stadium(json).expect_err("Fehler erwartet");
        assert!(err.to_string().contains("Segment 0"));
    }

    #[test]
    fn rejects_self_loops_and_bad_dimensions() {
        let self_loop = r#"{
            "name": "Loop",
            "width": 420,
            "height": 200,
            "bg": { "color": "718C5A" },
            "vertexes": [ { "x": 0, "y": 0 }, { "x": 1, "y": 1 } ],
            "segments": [ { "v0": 1, "v1": 1 } ]
        }"#;
        assert!(parse_stadium(self_loop).is_err());

        let bad_width = r#"{
            "name": "W",
            "width": 0,
            "height": 200,
            "bg": { "color": "718C5A" },
            "vertexes": [],
            "segments": []
        }"#;
        assert!(parse_stadium(bad_width).is_err());
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(parse_stadium("not json").is_err());
    }

    #[test]
    fn spatial_index_is_ready_after_parse() {
        let map = parse_stadium(MINIMAL).expect("Parse erwartet");
        let nearest = map
            .nearest_vertex(glam::DVec2::new(99.0, 1.0))
            .expect("Treffer erwartet");
        assert_eq!(nearest.index, 1);
    }
}
