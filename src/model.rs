use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
}

/// One recorded line segment with its draw time interval.
///
/// Everything except `tag` is immutable after load; the stroke list is kept
/// sorted ascending by `time_start`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub id: i32,
    pub x_start: i32,
    pub x_end: i32,
    pub y_start: i32,
    pub y_end: i32,
    pub time_start: i64,
    pub time_end: i64,
    pub tag: String,
}

impl Stroke {
    pub fn midpoint(&self) -> Vec2 {
        Vec2 {
            x: (self.x_start + self.x_end) as f32 * 0.5,
            y: (self.y_start + self.y_end) as f32 * 0.5,
        }
    }
}

/// Axis-aligned rectangle with integer pixel bounds. Containment is inclusive
/// on all four edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        min_x: 0,
        min_y: 0,
        max_x: 0,
        max_y: 0,
    };

    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Rect {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// True when both endpoints of the stroke fall inside the bounds.
    pub fn contains_stroke(&self, stroke: &Stroke) -> bool {
        stroke.x_start >= self.min_x
            && stroke.x_start <= self.max_x
            && stroke.x_end >= self.min_x
            && stroke.x_end <= self.max_x
            && stroke.y_start >= self.min_y
            && stroke.y_start <= self.max_y
            && stroke.y_end >= self.min_y
            && stroke.y_end <= self.max_y
    }
}

/// A rectangle with an associated label, used to retroactively assign tags
/// to strokes spatially.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagRegion {
    pub bounds: Rect,
    pub tag: String,
}

impl TagRegion {
    pub fn new(bounds: Rect, tag: impl Into<String>) -> Self {
        TagRegion {
            bounds,
            tag: tag.into(),
        }
    }
}

/// A text label anchored at a stroke midpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TagLabel {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// The visual labels produced by one tagging attempt. Index 0 of the label
/// list is reserved for labels loaded from the trace file; cancelled attempts
/// contribute an empty group so that label and region indices stay aligned.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelGroup {
    pub labels: Vec<TagLabel>,
}
