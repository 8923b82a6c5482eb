//! Kurven-Repräsentationen eines Segments und ihre Umrechnung.
//!
//! Der Editor zeigt dieselbe Krümmung wahlweise als Zentriwinkel (Grad),
//! Radius (Map-Einheiten) oder Stichhöhe/Sagitta (Map-Einheiten) an.
//! Persistiert wird ausschließlich das Winkel-Äquivalent (siehe `hbs`);
//! die `{type, value}`-Form lebt nur in der Editor-Session.

use super::arc;
use serde::{Deserialize, Serialize};

/// Auswählbare Kurven-Repräsentation (UI-Select liefert den lowercase-Namen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    /// Zentriwinkel in Grad
    #[default]
    Angle,
    /// Kreisradius in Map-Einheiten
    Radius,
    /// Stichhöhe über der Sehnenmitte
    Sagitta,
}

impl CurveKind {
    /// Name wie im UI-Select bzw. im `curveData.type`-Feld.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveKind::Angle => "angle",
            CurveKind::Radius => "radius",
            CurveKind::Sagitta => "sagitta",
        }
    }

    /// Parst den UI-Namen; unbekannte Strings liefern `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "angle" => Some(CurveKind::Angle),
            "radius" => Some(CurveKind::Radius),
            "sagitta" => Some(CurveKind::Sagitta),
            _ => None,
        }
    }
}

/// Krümmung eines Segments in einer der drei Repräsentationen.
///
/// Serialisiert als `{"type": "...", "value": n}` — identisch zum
/// `curveData`-Objekt des .hbs-Schemas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CurveSpec {
    /// Zentriwinkel in Grad; 0 = gerades Segment, |θ| > 180° = Major-Bogen
    Angle(f64),
    /// Radius; Betrag muss ≥ halbe Sehne sein, sonst degeneriert
    Radius(f64),
    /// Stichhöhe; jede endliche Größe außer 0 ist gültig
    Sagitta(f64),
}

impl Default for CurveSpec {
    fn default() -> Self {
        CurveSpec::Angle(0.0)
    }
}

impl CurveSpec {
    /// Winkel-Limit des Formats (Grad). Jenseits von ±340° wird geclampt.
    pub const ANGLE_LIMIT_DEG: f64 = 340.0;
    /// Unterhalb dieses Betrags gilt die Kurve als praktisch gerade.
    pub const NEAR_ZERO: f64 = 1e-3;
    /// Start-Stichhöhe beim Umschalten aus einer geraden Kurve.
    pub const SAGITTA_SEED: f64 = 0.1;

    /// Baut die Spec aus Kind + Rohwert.
    pub fn new(kind: CurveKind, value: f64) -> Self {
        match kind {
            CurveKind::Angle => CurveSpec::Angle(value),
            CurveKind::Radius => CurveSpec::Radius(value),
            CurveKind::Sagitta => CurveSpec::Sagitta(value),
        }
    }

    /// Aktive Repräsentation.
    pub fn kind(&self) -> CurveKind {
        match self {
            CurveSpec::Angle(_) => CurveKind::Angle,
            CurveSpec::Radius(_) => CurveKind::Radius,
            CurveSpec::Sagitta(_) => CurveKind::Sagitta,
        }
    }

    /// Roher Anzeigewert in der aktiven Repräsentation.
    pub fn value(&self) -> f64 {
        match *self {
            CurveSpec::Angle(v) | CurveSpec::Radius(v) | CurveSpec::Sagitta(v) => v,
        }
    }

    /// Rotationsvorzeichen; 0 zählt als positiv (Haxball-Konvention).
    pub fn sign(&self) -> f64 {
        if self.value() < 0.0 {
            -1.0
        } else {
            1.0
        }
    }

    /// true, wenn der Wert unterhalb der Gerade-Schwelle liegt.
    pub fn is_near_zero(&self) -> bool {
        self.value().abs() < Self::NEAR_ZERO
    }

    /// Winkel-Äquivalent in Grad (kann NaN/∞ liefern, siehe `arc`).
    pub fn to_angle(&self, chord: f64) -> f64 {
        match *self {
            CurveSpec::Angle(v) => v,
            CurveSpec::Radius(v) => arc::radius_to_angle(v, chord),
            CurveSpec::Sagitta(v) => arc::sagitta_to_angle(v, chord),
        }
    }

    /// Radius-Äquivalent (kann NaN/∞ liefern).
    pub fn to_radius(&self, chord: f64) -> f64 {
        match *self {
            CurveSpec::Angle(v) => arc::angle_to_radius(v, chord),
            CurveSpec::Radius(v) => v,
            CurveSpec::Sagitta(v) => arc::sagitta_to_radius(v, chord),
        }
    }

    /// Sagitta-Äquivalent (kann NaN/∞ liefern).
    pub fn to_sagitta(&self, chord: f64) -> f64 {
        match *self {
            CurveSpec::Angle(v) => arc::angle_to_sagitta(v, chord),
            CurveSpec::Radius(v) => arc::radius_to_sagitta(v, chord),
            CurveSpec::Sagitta(v) => v,
        }
    }

    /// Wechselt die Repräsentation und erhält dabei die sichtbare Bogenform.
    ///
    /// Regeln (in dieser Reihenfolge):
    /// - Sehne ≈ 0: jeder Zielwert wird 0.
    /// - aktueller Wert praktisch gerade: kleiner Startwert im Ziel
    ///   (Radius = sign·Sehne, Sagitta = sign·0.1, Winkel = 0), damit der
    ///   Nutzer einen sichtbaren Bogen zum Anfassen bekommt.
    /// - sonst exakte Umrechnung; läuft sie aus dem Definitionsbereich
    ///   (z.B. Ziel Radius bei sehr spitzem Winkel), greift derselbe
    ///   vorzeichenbehaftete Startwert statt NaN/∞.
    pub fn converted_to(self, kind: CurveKind, chord: f64) -> CurveSpec {
        if kind == self.kind() {
            return self;
        }
        if chord <= 0.0 {
            return CurveSpec::new(kind, 0.0);
        }

        let sign = self.sign();
        if self.is_near_zero() {
            return match kind {
                CurveKind::Angle => CurveSpec::Angle(0.0),
                CurveKind::Radius => CurveSpec::Radius(sign * chord),
                CurveKind::Sagitta => CurveSpec::Sagitta(sign * Self::SAGITTA_SEED),
            };
        }

        let converted = match kind {
            CurveKind::Angle => self.to_angle(chord),
            CurveKind::Radius => self.to_radius(chord),
            CurveKind::Sagitta => self.to_sagitta(chord),
        };
        if converted.is_finite() {
            return CurveSpec::new(kind, converted);
        }

        match kind {
            CurveKind::Angle => CurveSpec::Angle(0.0),
            CurveKind::Radius => CurveSpec::Radius(sign * chord),
            CurveKind::Sagitta => CurveSpec::Sagitta(sign * Self::SAGITTA_SEED),
        }
    }

    /// Clampt Winkel auf das Format-Limit; andere Repräsentationen bleiben frei.
    pub fn clamped(self) -> CurveSpec {
        match self {
            CurveSpec::Angle(v) => {
                CurveSpec::Angle(v.clamp(-Self::ANGLE_LIMIT_DEG, Self::ANGLE_LIMIT_DEG))
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn serializes_like_the_curve_data_schema() {
        let json = serde_json::to_string(&CurveSpec::Radius(70.5)).unwrap();
        assert_eq!(json, r#"{"type":"radius","value":70.5}"#);

        let back: CurveSpec = serde_json::from_str(r#"{"type":"sagitta","value":-12.0}"#).unwrap();
        assert_eq!(back, CurveSpec::Sagitta(-12.0));
    }

    #[test]
    fn kind_names_roundtrip() {
        for kind in [CurveKind::Angle, CurveKind::Radius, CurveKind::Sagitta] {
            assert_eq!(CurveKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(CurveKind::from_name("bezier"), None);
    }

    #[test]
    fn switch_preserves_the_arc_shape() {
        // Winkel 90° auf Sehne 100 → Radius ≈ 70.71 → zurück ≈ 90°
        let spec = CurveSpec::Angle(90.0);
        let as_radius = spec.converted_to(CurveKind::Radius, 100.0);
        assert_eq!(as_radius.kind(), CurveKind::Radius);
        assert_relative_eq!(as_radius.value(), 70.710678, max_relative = 1e-6);

        let back = as_radius.converted_to(CurveKind::Angle, 100.0);
        assert_relative_eq!(back.value(), 90.0, max_relative = 1e-6);
    }

    #[test]
    fn switch_on_zero_chord_forces_zero() {
        let spec = CurveSpec::Angle(90.0);
        assert_eq!(
            spec.converted_to(CurveKind::Radius, 0.0),
            CurveSpec::Radius(0.0)
        );
        assert_eq!(
            spec.converted_to(CurveKind::Sagitta, 0.0),
            CurveSpec::Sagitta(0.0)
        );
    }

    #[test]
    fn switch_from_near_zero_seeds_a_visible_curve() {
        let flat = CurveSpec::Angle(0.0004);
        assert_eq!(
            flat.converted_to(CurveKind::Radius, 250.0),
            CurveSpec::Radius(250.0)
        );
        assert_eq!(
            flat.converted_to(CurveKind::Sagitta, 250.0),
            CurveSpec::Sagitta(CurveSpec::SAGITTA_SEED)
        );

        // Negatives Vorzeichen bleibt erhalten
        let flat_neg = CurveSpec::Sagitta(-0.0004);
        assert_eq!(
            flat_neg.converted_to(CurveKind::Radius, 250.0),
            CurveSpec::Radius(-250.0)
        );
    }

    #[test]
    fn out_of_domain_conversion_falls_back_to_signed_default() {
        // Radius 30 auf Sehne 100: kein reeller Winkel → 0
        let spec = CurveSpec::Radius(-30.0);
        assert_eq!(
            spec.converted_to(CurveKind::Angle, 100.0),
            CurveSpec::Angle(0.0)
        );
        // … und keine reelle Sagitta → sign·0.1
        assert_eq!(
            spec.converted_to(CurveKind::Sagitta, 100.0),
            CurveSpec::Sagitta(-CurveSpec::SAGITTA_SEED)
        );
    }

    #[test]
    fn same_kind_switch_is_identity() {
        let spec = CurveSpec::Sagitta(42.0);
        assert_eq!(spec.converted_to(CurveKind::Sagitta, 100.0), spec);
    }

    #[test]
    fn clamp_limits_only_angles() {
        assert_eq!(
            CurveSpec::Angle(400.0).clamped(),
            CurveSpec::Angle(CurveSpec::ANGLE_LIMIT_DEG)
        );
        assert_eq!(
            CurveSpec::Angle(-400.0).clamped(),
            CurveSpec::Angle(-CurveSpec::ANGLE_LIMIT_DEG)
        );
        assert_eq!(CurveSpec::Radius(9999.0).clamped(), CurveSpec::Radius(9999.0));
    }
}
