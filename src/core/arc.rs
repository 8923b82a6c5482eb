//! Kreisbogen-Mathematik für gekrümmte Segmente.
//!
//! Alle Funktionen sind pure, geschlossene Trigonometrie ohne Allokation —
//! sie laufen ungedrosselt bei jedem Redraw und jedem Eingabe-Tick.
//! Degenerierte Eingaben liefern IEEE-Sentinels (NaN/∞) bzw. `None`,
//! niemals einen Fehler: der Aufrufer fällt dann auf die Gerade zurück.

use super::CurveSpec;
use glam::DVec2;

/// Schwelle, unter der Sehne bzw. Winkel als degeneriert gelten.
const EPS: f64 = 1e-9;

/// Vorzeichen nach Haxball-Konvention: 0 zählt als positiv.
#[inline]
fn sign_of(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Länge der Sehne zwischen beiden Segment-Endpunkten.
///
/// Gemeinsame Referenzlänge aller Kurven-Umrechnungen.
#[inline]
pub fn chord_length(p0: DVec2, p1: DVec2) -> f64 {
    p0.distance(p1)
}

/// Radius des Kreises durch beide Endpunkte bei Zentriwinkel `angle_deg`.
///
/// `r = c / (2·sin(|θ|/2))`, Vorzeichen vom Winkel übernommen.
/// θ = 0 liefert ∞ (Gerade), Sehne 0 liefert NaN.
pub fn angle_to_radius(angle_deg: f64, chord: f64) -> f64 {
    let half = angle_deg.abs().to_radians() / 2.0;
    (chord / (2.0 * half.sin())) * sign_of(angle_deg)
}

/// Zentriwinkel (Grad) zum gegebenen Radius.
///
/// `θ = 2·asin(c / (2·|r|))`, Vorzeichen vom Radius übernommen.
/// Für |r| < c/2 existiert keine Lösung — asin läuft aus dem
/// Definitionsbereich und liefert NaN. Rekonstruiert wird immer der
/// Minor-Bogen (|θ| ≤ 180°); ein Reflex-Winkel ist aus dem Radius
/// allein nicht unterscheidbar.
pub fn radius_to_angle(radius: f64, chord: f64) -> f64 {
    let ratio = chord / (2.0 * radius.abs());
    (2.0 * ratio.asin()).to_degrees() * sign_of(radius)
}

/// Stichhöhe (Sagitta) zum gegebenen Radius.
///
/// Algebraisch `|r| − sqrt(r² − (c/2)²)`; implementiert in der
/// auslöschungsfreien Form `h² / (|r| + sqrt(r² − h²))`, da die direkte
/// Differenz für |r| ≫ c Stellen verliert. Für |r| < c/2: NaN.
pub fn radius_to_sagitta(radius: f64, chord: f64) -> f64 {
    let r = radius.abs();
    let h = chord / 2.0;
    let s = (h * h) / (r + (r * r - h * h).sqrt());
    s * sign_of(radius)
}

/// Radius zum Kreis mit gegebener Stichhöhe.
///
/// `r = (s² + (c/2)²) / (2·|s|)`, Vorzeichen von der Sagitta übernommen.
/// s = 0 liefert ∞ (Gerade); eine untere Betragsschranke wie beim Radius
/// gibt es nicht.
pub fn sagitta_to_radius(sagitta: f64, chord: f64) -> f64 {
    let s = sagitta.abs();
    let h = chord / 2.0;
    ((s * s + h * h) / (2.0 * s)) * sign_of(sagitta)
}

/// Stichhöhe zum Zentriwinkel, komponiert über den Radius.
///
/// Bewusst keine eigene geschlossene Form: die Komposition hält
/// Winkel↔Radius↔Sagitta paarweise konsistent.
pub fn angle_to_sagitta(angle_deg: f64, chord: f64) -> f64 {
    radius_to_sagitta(angle_to_radius(angle_deg, chord), chord)
}

/// Zentriwinkel zur Stichhöhe, komponiert über den Radius.
pub fn sagitta_to_angle(sagitta: f64, chord: f64) -> f64 {
    radius_to_angle(sagitta_to_radius(sagitta, chord), chord)
}

/// Aufgelöste Bogengeometrie eines gekrümmten Segments.
///
/// Wird pro Frame aus (v0, v1, CurveSpec) abgeleitet und nie persistiert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularArc {
    /// Kreismittelpunkt in Map-Koordinaten
    pub center: DVec2,
    /// Radius (immer positiver Betrag, fürs Rendering)
    pub radius: f64,
    /// Winkel von v0 um den Mittelpunkt (Radiant, atan2)
    pub start_angle: f64,
    /// Winkel von v1 um den Mittelpunkt (Radiant, atan2)
    pub end_angle: f64,
    /// Vorzeichenbehafteter Zentriwinkel (Radiant, positiv = gegen den Uhrzeigersinn)
    pub sweep: f64,
    /// true = Bogen läuft gegen den Uhrzeigersinn von v0 nach v1
    pub anticlockwise: bool,
    /// Sehnenlänge, aus der die Geometrie berechnet wurde
    pub chord: f64,
}

/// Löst die Bogengeometrie für ein Segment zwischen `p0` und `p1`.
///
/// Gibt `None` zurück, wenn kein Bogen existiert: Sehne ≈ 0, Kurvenwert ≈ 0
/// oder eine Umrechnung außerhalb ihres Definitionsbereichs (z.B. Radius
/// kleiner als die halbe Sehne). Der Aufrufer zeichnet dann die Gerade.
///
/// Vorzeichen-Konvention: mit `dir = (p1−p0)/c` und linker Normale
/// `n = (−dir.y, dir.x)` liegt der Mittelpunkt bei
/// `mid + n · |r|·cos(|θ|/2) · sign(θ)`. Positive Kurvenwerte laufen gegen
/// den Uhrzeigersinn (in Map-Koordinaten; ein y-nach-unten-Canvas zeigt das
/// spiegelbildlich). Für |θ| > 180° wird cos(|θ|/2) negativ und der
/// Mittelpunkt wechselt auf die andere Sehnenseite — der Major-Bogen.
pub fn calculate_circular_arc(p0: DVec2, p1: DVec2, curve: CurveSpec) -> Option<CircularArc> {
    let chord = chord_length(p0, p1);
    if chord <= EPS {
        return None;
    }

    let angle_deg = curve.to_angle(chord);
    if !angle_deg.is_finite() || angle_deg.abs() <= EPS {
        return None;
    }

    let signed_radius = angle_to_radius(angle_deg, chord);
    if !signed_radius.is_finite() {
        return None;
    }
    let radius = signed_radius.abs();

    let half = angle_deg.abs().to_radians() / 2.0;
    // Abstand Mittelpunkt ↔ Sehnenmitte, vorzeichenbehaftet über cos:
    // negativ für Reflex-Winkel (Mittelpunkt jenseits der Sehne).
    let apothem = radius * half.cos();

    let dir = (p1 - p0) / chord;
    let normal = DVec2::new(-dir.y, dir.x);
    let midpoint = (p0 + p1) * 0.5;
    let center = midpoint + normal * (apothem * sign_of(angle_deg));

    let start_angle = (p0.y - center.y).atan2(p0.x - center.x);
    let end_angle = (p1.y - center.y).atan2(p1.x - center.x);

    Some(CircularArc {
        center,
        radius,
        start_angle,
        end_angle,
        sweep: angle_deg.to_radians(),
        anticlockwise: angle_deg > 0.0,
        chord,
    })
}
