//! Interpolating cubic curve chains and the joint-angle smoothing pass.
//!
//! A chain is built over an ordered anchor list: N anchors give N-1 cubic
//! segments, and every anchor stays exactly on the path before and after
//! smoothing. Smoothing only displaces control points.

use crate::model::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Control points of one cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub start: Vec2,
    pub ctrl1: Vec2,
    pub ctrl2: Vec2,
    pub end: Vec2,
}

impl CubicSegment {
    /// Evaluate the curve at parameter t ∈ [0, 1].
    pub fn eval(&self, t: f32) -> Vec2 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        Vec2 {
            x: mt3 * self.start.x
                + 3.0 * mt2 * t * self.ctrl1.x
                + 3.0 * mt * t2 * self.ctrl2.x
                + t3 * self.end.x,
            y: mt3 * self.start.y
                + 3.0 * mt2 * t * self.ctrl1.y
                + 3.0 * mt * t2 * self.ctrl2.y
                + t3 * self.end.y,
        }
    }

    /// Evaluate the tangent (derivative) at parameter t.
    pub fn tangent(&self, t: f32) -> Vec2 {
        let t2 = t * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;

        Vec2 {
            x: 3.0 * mt2 * (self.ctrl1.x - self.start.x)
                + 6.0 * mt * t * (self.ctrl2.x - self.ctrl1.x)
                + 3.0 * t2 * (self.end.x - self.ctrl2.x),
            y: 3.0 * mt2 * (self.ctrl1.y - self.start.y)
                + 6.0 * mt * t * (self.ctrl2.y - self.ctrl1.y)
                + 3.0 * t2 * (self.end.y - self.ctrl2.y),
        }
    }

    /// Bounding box of the control polygon as (min_x, min_y, max_x, max_y).
    pub fn control_box(&self) -> (f32, f32, f32, f32) {
        let min_x = self
            .start
            .x
            .min(self.ctrl1.x)
            .min(self.ctrl2.x)
            .min(self.end.x);
        let max_x = self
            .start
            .x
            .max(self.ctrl1.x)
            .max(self.ctrl2.x)
            .max(self.end.x);
        let min_y = self
            .start
            .y
            .min(self.ctrl1.y)
            .min(self.ctrl2.y)
            .min(self.end.y);
        let max_y = self
            .start
            .y
            .max(self.ctrl1.y)
            .max(self.ctrl2.y)
            .max(self.end.y);
        (min_x, min_y, max_x, max_y)
    }

    /// Direction of the chord from end anchor to start anchor, via atan2.
    fn chord_direction(&self) -> f32 {
        (self.start.y - self.end.y).atan2(self.start.x - self.end.x)
    }
}

/// A chain of cubic segments; segment i shares its end anchor with segment
/// i+1's start anchor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveChain {
    pub segments: Vec<CubicSegment>,
}

impl CurveChain {
    /// Build a straight-jointed chain over the anchor list. Fewer than two
    /// points give an empty chain. Every control point starts collapsed onto
    /// its adjacent anchor.
    pub fn build(points: &[Vec2]) -> Self {
        if points.len() < 2 {
            return CurveChain::default();
        }
        let segments = points
            .windows(2)
            .map(|w| CubicSegment {
                start: w[0],
                ctrl1: w[0],
                ctrl2: w[1],
                end: w[1],
            })
            .collect();
        CurveChain { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The anchor points of the chain, in order.
    pub fn anchors(&self) -> Vec<Vec2> {
        let mut out = Vec::with_capacity(self.segments.len() + 1);
        if let Some(first) = self.segments.first() {
            out.push(first.start);
        }
        out.extend(self.segments.iter().map(|s| s.end));
        out
    }

    /// Single-pass local smoothing: at each interior joint, both adjacent
    /// control points are pulled toward the far end of their own segment by
    /// `pull_ratio` of the chord and rotated about the anchor by half the
    /// joint's opening angle, mirror-symmetric across the joint. The first
    /// and last control points see only their single neighboring joint.
    /// Anchors never move. No-op below 2 segments.
    pub fn smooth(&mut self, pull_ratio: f32) {
        let n = self.segments.len();
        if n < 2 {
            return;
        }

        let first_turn = turn_angle(&self.segments[0], &self.segments[1]);
        let first_half = half_opening(first_turn);
        pull_controls(&mut self.segments[0], pull_ratio);
        rotate_ctrl2(&mut self.segments[0], signed(first_half, first_turn >= 0.0));

        for i in 0..n - 2 {
            let turn_in = turn_angle(&self.segments[i], &self.segments[i + 1]);
            let turn_out = turn_angle(&self.segments[i + 1], &self.segments[i + 2]);
            let half_in = half_opening(turn_in);
            let half_out = half_opening(turn_out);
            let seg = &mut self.segments[i + 1];
            pull_controls(seg, pull_ratio);
            rotate_ctrl1(seg, signed(half_in, turn_in < 0.0));
            rotate_ctrl2(seg, signed(half_out, turn_out >= 0.0));
        }

        let last_turn = turn_angle(&self.segments[n - 2], &self.segments[n - 1]);
        let last_half = half_opening(last_turn);
        pull_controls(&mut self.segments[n - 1], pull_ratio);
        rotate_ctrl1(&mut self.segments[n - 1], signed(last_half, last_turn < 0.0));
    }
}

/// Signed fold of the two chord directions at the joint between adjacent
/// segments, in (-π, π]. A straight continuation folds to ±π and a full
/// reversal to 0, so `(π - |turn|) / 2` is the half-opening each control
/// point rotates through; the sign selects the rotation side.
pub fn turn_angle(a: &CubicSegment, b: &CubicSegment) -> f32 {
    let diff = a.chord_direction() - b.chord_direction();
    if diff < 0.0 {
        diff + PI
    } else {
        diff - PI
    }
}

#[inline]
fn half_opening(turn: f32) -> f32 {
    (PI - turn.abs()) / 2.0
}

#[inline]
fn signed(magnitude: f32, positive: bool) -> f32 {
    if positive {
        magnitude
    } else {
        -magnitude
    }
}

/// Pull both control points toward the far end of the segment by `ratio` of
/// the chord length.
fn pull_controls(seg: &mut CubicSegment, ratio: f32) {
    seg.ctrl1 = Vec2 {
        x: seg.start.x + (seg.end.x - seg.start.x) * ratio,
        y: seg.start.y + (seg.end.y - seg.start.y) * ratio,
    };
    seg.ctrl2 = Vec2 {
        x: seg.end.x + (seg.start.x - seg.end.x) * ratio,
        y: seg.end.y + (seg.start.y - seg.end.y) * ratio,
    };
}

fn rotate_about(anchor: Vec2, point: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let dx = point.x - anchor.x;
    let dy = point.y - anchor.y;
    Vec2 {
        x: anchor.x + cos * dx - sin * dy,
        y: anchor.y + sin * dx + cos * dy,
    }
}

fn rotate_ctrl1(seg: &mut CubicSegment, angle: f32) {
    seg.ctrl1 = rotate_about(seg.start, seg.ctrl1, angle);
}

fn rotate_ctrl2(seg: &mut CubicSegment, angle: f32) {
    seg.ctrl2 = rotate_about(seg.end, seg.ctrl2, angle);
}
