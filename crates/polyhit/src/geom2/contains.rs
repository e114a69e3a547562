//! Ray-casting point-in-polygon for hit testing.
//!
//! Assumptions and conventions
//! - Points live in the normalized unit square, so a horizontal segment from
//!   the query to `x = 1` leaves the shape on the right.
//! - Each edge is normalized to `(up, down)` with `up` the higher endpoint.
//! - Touching an endpoint, or lying on an edge's supporting line while inside
//!   its y-range and left of its far x, reports `true` immediately.
//! - A crossing counts when the edge and the ray segment straddle each other
//!   and the query lies left of `down → up`. Odd parity is inside.
//!
//! Code cross-refs: `triangle::point_in_triangle`

use super::triangle::point_in_triangle;
use super::types::{GeomCfg, Point2};
use super::util::{cross2d, near_zero, points_approx_eq};

/// Shorthand for `point_in_polygon_with(points, query, GeomCfg::default())`.
#[inline]
pub fn point_in_polygon(points: &[Point2], query: Point2) -> bool {
    point_in_polygon_with(points, query, GeomCfg::default())
}

/// Closed point-in-polygon test.
///
/// Fewer than 3 points are never hit; exactly 3 use the triangle test.
pub fn point_in_polygon_with(points: &[Point2], query: Point2, cfg: GeomCfg) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    if n == 3 {
        return point_in_triangle(query, points[0], points[1], points[2]);
    }

    let ray_end = Point2::new(1.0, query.y);
    let mut crossings = 0usize;
    for i in 0..n {
        let mut up = points[i];
        let mut down = points[(i + 1) % n];
        if up.y < down.y {
            std::mem::swap(&mut up, &mut down);
        }

        if up.x.max(down.x) < query.x || up.y < query.y || down.y > query.y {
            continue;
        }

        let q_up = up - query;
        let down_up = up - down;
        if points_approx_eq(up, query, &cfg)
            || points_approx_eq(down, query, &cfg)
            || near_zero(cross2d(q_up, down_up), cfg.eps_collinear)
        {
            return true;
        }

        let q_ray = ray_end - query;
        let q_down = down - query;
        let c1 = cross2d(q_up, q_ray);
        let c2 = cross2d(q_down, q_ray);

        let ray_q = query - ray_end;
        let c3 = cross2d(up - ray_end, ray_q);
        let c4 = cross2d(down - ray_end, ray_q);

        if c1 * c2 <= 0.0 && c3 * c4 <= 0.0 && cross2d(q_down, q_up) > 0.0 {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}
