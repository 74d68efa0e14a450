//! Direction markers decorating a sequence curve for display.

use serde::{Deserialize, Serialize};

use crate::geometry::curve::{CubicSegment, CurveChain};
use crate::geometry::tolerance::clamp01;
use crate::model::Vec2;

/// Curve parameter where arrow glyphs sit, halfway along each segment.
pub const ARROW_T: f32 = 0.5;

/// An arrow glyph placed on a segment. `heading_degrees` assumes the glyph
/// points "up" at rest, so the path tangent angle gets a 90 degree offset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArrowMarker {
    pub position: Vec2,
    pub heading_degrees: f32,
    pub scale: f32,
}

/// Role of an anchor in the chain. Maps to display colors only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointRole {
    Start,
    Interior,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndpointMarker {
    pub position: Vec2,
    pub role: EndpointRole,
}

/// Evaluates the segment at `t` and orients an arrow glyph along the
/// tangent there. Glyph size follows the segment's control box diagonal.
pub fn arrow_at(segment: &CubicSegment, t: f32) -> ArrowMarker {
    let t = clamp01(t);
    let position = segment.eval(t);
    let d = segment.tangent(t);
    let heading_degrees = d.y.atan2(d.x).to_degrees() + 90.0;
    let (min_x, min_y, max_x, max_y) = segment.control_box();
    let dx = max_x - min_x;
    let dy = max_y - min_y;
    let scale = (dx * dx + dy * dy).sqrt() / 4.0;
    ArrowMarker {
        position,
        heading_degrees,
        scale,
    }
}

/// One arrow per segment, at the midpoint parameter.
pub fn arrows(chain: &CurveChain) -> Vec<ArrowMarker> {
    chain
        .segments
        .iter()
        .map(|seg| arrow_at(seg, ARROW_T))
        .collect()
}

/// Marks the chain's first anchor as start, the last as end, and every
/// segment end in between as interior. Empty chains get no markers.
pub fn endpoint_markers(chain: &CurveChain) -> Vec<EndpointMarker> {
    let mut out = Vec::new();
    let Some(first) = chain.segments.first() else {
        return out;
    };
    out.push(EndpointMarker {
        position: first.start,
        role: EndpointRole::Start,
    });
    let last = chain.segments.len() - 1;
    for (i, seg) in chain.segments.iter().enumerate() {
        out.push(EndpointMarker {
            position: seg.end,
            role: if i == last {
                EndpointRole::End
            } else {
                EndpointRole::Interior
            },
        });
    }
    out
}
