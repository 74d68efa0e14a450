// Centralized tolerances and helpers for robust geometry

pub const EPS_POS: f32 = 1e-4; // point coincidence threshold (px)
pub const EPS_LEN: f32 = 1e-6; // zero-length vector threshold
pub const EPS_ANG: f32 = 1e-5; // angle compare slack (radians)

#[inline]
pub fn clamp01(x: f32) -> f32 {
    x.max(0.0).min(1.0)
}

#[inline]
pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
