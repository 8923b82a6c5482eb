//! Application-Layer: State und Use-Cases.

pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (geladene Map, View,
/// Selektion, Werkzeuge).
pub mod state;
pub mod use_cases;

pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorTool, EditorToolState, SelectionState, ViewState};
