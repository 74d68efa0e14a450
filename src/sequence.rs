//! Sequence curves: the per-stroke "line sequence" and the coarser
//! "drawing sequence" over consecutive same-tag stroke runs.

use crate::geometry::curve::CurveChain;
use crate::model::{Stroke, Vec2};

/// Pull ratio for the dense per-stroke sequence. A larger pull gives the
/// denser path a visually tighter curve.
pub const LINE_SEQUENCE_PULL: f32 = 0.3;

/// Pull ratio for the sparse per-tag-group sequence.
pub const DRAWING_SEQUENCE_PULL: f32 = 0.1;

/// Smoothed chain through every stroke midpoint, in time order.
pub fn line_sequence(strokes: &[Stroke]) -> CurveChain {
    let points: Vec<Vec2> = strokes.iter().map(|s| s.midpoint()).collect();
    let mut chain = CurveChain::build(&points);
    chain.smooth(LINE_SEQUENCE_PULL);
    chain
}

/// Smoothed chain through the centroid of each maximal run of consecutive
/// same-tag strokes, showing the order in which tagged objects were drawn.
/// Untagged strokes fall under the empty tag and run together like any
/// other tag value.
pub fn drawing_sequence(strokes: &[Stroke]) -> CurveChain {
    let mut centroids: Vec<Vec2> = Vec::new();
    let mut run_sum = Vec2::new(0.0, 0.0);
    let mut run_len = 0usize;
    let mut run_tag: Option<&str> = None;
    for stroke in strokes {
        if run_tag.is_some() && run_tag != Some(stroke.tag.as_str()) {
            centroids.push(Vec2::new(
                run_sum.x / run_len as f32,
                run_sum.y / run_len as f32,
            ));
            run_sum = Vec2::new(0.0, 0.0);
            run_len = 0;
        }
        let mid = stroke.midpoint();
        run_sum.x += mid.x;
        run_sum.y += mid.y;
        run_len += 1;
        run_tag = Some(stroke.tag.as_str());
    }
    if run_len > 0 {
        centroids.push(Vec2::new(
            run_sum.x / run_len as f32,
            run_sum.y / run_len as f32,
        ));
    }
    let mut chain = CurveChain::build(&centroids);
    chain.smooth(DRAWING_SEQUENCE_PULL);
    chain
}
