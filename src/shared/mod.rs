//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einem Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
mod segment_path;

pub use options::EditorOptions;
pub use render_scene::RenderScene;
pub use segment_path::SegmentPath;
