//! Hintergrund der Map: Flächenfarbe plus optionales Referenzbild.
//!
//! Das Bild selbst wird nie dekodiert oder komponiert — die Engine führt
//! nur die Metadaten (Data-URL, Deckkraft, Lage), der Renderer zeichnet.

use serde::{Deserialize, Serialize};

/// Einpass-Modus des Referenzbilds im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Vollständig einpassen (Letterbox)
    Fit,
    /// Viewport füllen (Überstand wird beschnitten)
    Cover,
    /// Originalgröße, zentriert
    #[default]
    Center,
}

/// Metadaten des Hintergrund-Referenzbilds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundImage {
    /// Bilddaten als Data-URL (base64), unverändert durchgereicht
    #[serde(rename = "dataURL")]
    pub data_url: String,
    /// Deckkraft 0.0–1.0
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Skalierung 0.1–5.0 (1.0 = Original)
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Verschiebung in Map-Einheiten
    #[serde(rename = "offsetX", default)]
    pub offset_x: f64,
    /// Verschiebung in Map-Einheiten
    #[serde(rename = "offsetY", default)]
    pub offset_y: f64,
    /// Einpass-Modus
    #[serde(rename = "fitMode", default)]
    pub fit_mode: FitMode,
    /// Gesperrt gegen versehentliches Verschieben im Editor
    #[serde(default)]
    pub locked: bool,
}

fn default_opacity() -> f64 {
    0.5
}

fn default_scale() -> f64 {
    1.0
}

impl BackgroundImage {
    /// Erstellt Bild-Metadaten mit Schema-Defaults.
    pub fn new(data_url: String) -> Self {
        Self {
            data_url,
            opacity: default_opacity(),
            scale: default_scale(),
            offset_x: 0.0,
            offset_y: 0.0,
            fit_mode: FitMode::default(),
            locked: false,
        }
    }

    /// Setzt die Deckkraft, geclampt auf den Schema-Bereich 0.0–1.0.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    /// Setzt die Skalierung, geclampt auf den Schema-Bereich 0.1–5.0.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(0.1, 5.0);
    }
}

/// Hintergrund der Map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    /// Flächenfarbe als Hex-String
    pub color: String,
    /// Optionales Referenzbild
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<BackgroundImage>,
}

impl Background {
    /// Standard-Flächenfarbe neuer Maps (Haxball-Rasen).
    pub const DEFAULT_COLOR: &'static str = "718C5A";
}

impl Default for Background {
    fn default() -> Self {
        Self {
            color: Self::DEFAULT_COLOR.to_string(),
            image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_defaults_match_the_schema() {
        let image = BackgroundImage::new("data:image/png;base64,AAAA".to_string());
        assert_eq!(image.opacity, 0.5);
        assert_eq!(image.scale, 1.0);
        assert_eq!(image.fit_mode, FitMode::Center);
        assert!(!image.locked);
    }

    #[test]
    fn opacity_and_scale_are_clamped() {
        let mut image = BackgroundImage::new(String::new());
        image.set_opacity(1.7);
        assert_eq!(image.opacity, 1.0);
        image.set_opacity(-0.2);
        assert_eq!(image.opacity, 0.0);
        image.set_scale(0.01);
        assert_eq!(image.scale, 0.1);
        image.set_scale(99.0);
        assert_eq!(image.scale, 5.0);
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let image: BackgroundImage =
            serde_json::from_str(r#"{"dataURL":"data:,x"}"#).expect("Parse erwartet");
        assert_eq!(image.opacity, 0.5);
        assert_eq!(image.scale, 1.0);
        assert_eq!(image.offset_x, 0.0);
        assert_eq!(image.fit_mode, FitMode::Center);
    }
}
