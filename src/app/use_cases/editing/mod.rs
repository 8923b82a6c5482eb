//! Use-Case-Funktionen für Vertex/Segment-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `add_vertex` — Neuen Vertex hinzufügen
//! - `connect` — Segmente erstellen (inkl. Segment-Tool-Flow)
//! - `delete` — Selektierte Vertices/Segmente löschen
//! - `move_vertex` — Selektierte Vertices verschieben
//! - `color` — Segmentfarbe ändern

mod add_vertex;
mod color;
mod connect;
mod delete;
mod move_vertex;

pub use add_vertex::add_vertex_at_position;
pub use color::set_selected_segments_color;
pub use connect::{add_segment, segment_tool_pick_vertex};
pub use delete::{delete_selected_segments, delete_selected_vertices};
pub use move_vertex::{move_selected_vertices, set_vertex_position};
