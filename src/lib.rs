//! Replay and annotation core for recorded hand-drawing sessions.
//!
//! A trace file of timestamped line strokes is loaded into a
//! [`trace::TraceDocument`], strokes are grouped under semantic tags via
//! axis-aligned [`model::TagRegion`]s, and the drawing order is shown as
//! smoothed, direction-annotated cubic-curve chains: the dense per-stroke
//! line sequence and the coarser per-tag drawing sequence.

pub mod model;
pub mod geometry {
    pub mod curve;
    pub mod tolerance;
}
pub mod annotations;
pub mod history;
pub mod json;
pub mod markers;
pub mod sequence;
pub mod trace;

pub use annotations::{resolve_tag, AnnotationStore};
pub use geometry::curve::{CubicSegment, CurveChain};
pub use history::EditHistory;
pub use markers::{arrow_at, endpoint_markers, ArrowMarker, EndpointMarker, EndpointRole};
pub use model::{LabelGroup, Rect, Stroke, TagLabel, TagRegion, Vec2};
pub use sequence::{drawing_sequence, line_sequence};
pub use trace::{TraceDocument, TraceError};
