//! Use-Case-Funktionen für Vertex/Segment-Selektion.
//!
//! Aufgeteilt nach Selektionsmodus:
//! - `pick` — Einzelklick-Selektion (Nearest-Vertex bzw. nächstes Segment)
//! - `rect` — Rechteck-Selektion

mod pick;
mod rect;

pub use pick::{pick_segment_at, pick_vertex_at};
pub use rect::select_vertices_in_rect;
