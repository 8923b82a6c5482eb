//! HaxTrace Editor Library.
//! Engine-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod hbs;
pub mod shared;

pub use app::{AppState, EditorTool, EditorToolState, SelectionState, ViewState};
pub use core::{
    calculate_circular_arc, chord_length, Background, BackgroundImage, CircularArc, CurveKind,
    CurveSpec, FitMode, Segment, StadiumMap, Vertex, VertexRemoval,
};
pub use core::{SpatialIndex, SpatialMatch};
pub use shared::{EditorOptions, RenderScene, SegmentPath};
pub use hbs::{parse_stadium, write_stadium};
