use super::types::{GeomCfg, Point2, Winding};

/// 2D cross product (determinant of `[a b]`).
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn cross2d(a: Point2, b: Point2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Shoelace signed area of the closed loop through `points`.
///
/// Positive for counter-clockwise loops. Fewer than 3 points give `0.0`.
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        area += a.x * b.y - b.x * a.y;
    }
    area * 0.5
}

/// Winding of the loop; clockwise iff the signed area is negative.
#[inline]
pub fn winding(points: &[Point2]) -> Winding {
    if signed_area(points) < 0.0 {
        Winding::Clockwise
    } else {
        Winding::CounterClockwise
    }
}

/// Scalar approximate equality: `|a-b| <= max(rel * max(|a|,|b|), abs)`.
#[inline]
pub fn approx_eq(a: f64, b: f64, cfg: &GeomCfg) -> bool {
    let tol = (cfg.approx_rel * a.abs().max(b.abs())).max(cfg.approx_abs);
    (a - b).abs() <= tol
}

/// Componentwise `approx_eq`.
#[inline]
pub fn points_approx_eq(a: Point2, b: Point2, cfg: &GeomCfg) -> bool {
    approx_eq(a.x, b.x, cfg) && approx_eq(a.y, b.y, cfg)
}

/// Treat `|x| <= eps` as zero.
#[inline]
pub(crate) fn near_zero(x: f64, eps: f64) -> bool {
    x.abs() <= eps
}
