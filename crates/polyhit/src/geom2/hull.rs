//! Gift-wrapping (Jarvis march) convex hull.
//!
//! Purpose
//! - Replace an unordered point set by its hull, counter-clockwise, keeping
//!   points that lie exactly on a hull edge.
//!
//! Assumptions and conventions
//! - Anchor is the leftmost point; ties go to the lowest, then to the first
//!   in input order. The anchor is always the first output point.
//! - Points approximately equal to the current vertex or to the current best
//!   target are skipped, so duplicates collapse.
//! - Collinear candidates only count when they lie ahead of the current
//!   vertex; they are emitted nearest-to-farthest before the edge's corner,
//!   unless already on the hull (a fully collinear set walks back over it).
//! - At most `n + 1` march steps. O(h·n).
//!
//! Code cross-refs: `util::{cross2d, points_approx_eq}`

use super::types::{GeomCfg, Point2};
use super::util::{cross2d, near_zero, points_approx_eq};

/// Shorthand for `convex_hull_with(points, GeomCfg::default())`.
#[inline]
pub fn convex_hull(points: &[Point2]) -> Vec<Point2> {
    convex_hull_with(points, GeomCfg::default())
}

/// Counter-clockwise hull of `points`, including boundary-collinear points.
///
/// Empty input gives an empty hull; a single distinct point gives itself.
pub fn convex_hull_with(points: &[Point2], cfg: GeomCfg) -> Vec<Point2> {
    let Some(anchor) = leftmost(points) else {
        return Vec::new();
    };
    let mut hull = vec![anchor];
    let mut current = anchor;

    for _ in 0..=points.len() {
        let Some((target, mut collinear)) = next_target(points, current, &cfg) else {
            return hull;
        };
        collinear.sort_by(|a, b| {
            (a - current)
                .norm_squared()
                .partial_cmp(&(b - current).norm_squared())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for p in collinear {
            if !hull.iter().any(|&h| points_approx_eq(h, p, &cfg)) {
                hull.push(p);
            }
        }
        if points_approx_eq(target, anchor, &cfg) {
            return hull;
        }
        hull.push(target);
        current = target;
    }
    tracing::debug!(
        points = points.len(),
        hull = hull.len(),
        "convex hull march hit its step cap"
    );
    hull
}

/// Minimum x, then minimum y. A first-occurrence tie-break could pick a point
/// in the middle of the left edge, and the march would then miss the part of
/// that edge below it.
fn leftmost(points: &[Point2]) -> Option<Point2> {
    let mut best = *points.first()?;
    for p in &points[1..] {
        if p.x < best.x || (p.x == best.x && p.y < best.y) {
            best = *p;
        }
    }
    Some(best)
}

/// Most clockwise candidate seen from `current`, so every other point is on
/// its left; plus the points strictly between `current` and it.
fn next_target(
    points: &[Point2],
    current: Point2,
    cfg: &GeomCfg,
) -> Option<(Point2, Vec<Point2>)> {
    let mut target: Option<Point2> = None;
    let mut collinear: Vec<Point2> = Vec::new();

    for &p in points {
        if points_approx_eq(p, current, cfg) {
            continue;
        }
        let Some(best) = target else {
            target = Some(p);
            continue;
        };
        if points_approx_eq(p, best, cfg) {
            continue;
        }
        let to_best = best - current;
        let to_p = p - current;
        let z = cross2d(to_p, to_best);
        if near_zero(z, cfg.eps_collinear) {
            if to_p.dot(&to_best) <= 0.0 {
                continue;
            }
            if to_best.norm_squared() < to_p.norm_squared() {
                collinear.push(best);
                target = Some(p);
            } else {
                collinear.push(p);
            }
        } else if z > 0.0 {
            target = Some(p);
            collinear.clear();
        }
    }
    target.map(|t| (t, collinear))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn empty_and_single() {
        assert!(convex_hull(&[]).is_empty());
        let p = vector![0.3, 0.3];
        assert_eq!(convex_hull(&[p, p]), vec![p]);
    }

    #[test]
    fn square_with_interior_points() {
        let pts = [
            vector![0.5, 0.5],
            vector![1.0, 1.0],
            vector![0.0, 0.0],
            vector![0.2, 0.7],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
        ];
        let hull = convex_hull(&pts);
        assert_eq!(
            hull,
            vec![
                vector![0.0, 0.0],
                vector![1.0, 0.0],
                vector![1.0, 1.0],
                vector![0.0, 1.0]
            ]
        );
    }

    #[test]
    fn keeps_edge_collinear_points_in_order() {
        let pts = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.75, 0.0],
            vector![0.25, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
            vector![0.0, 0.5],
        ];
        let hull = convex_hull(&pts);
        assert_eq!(
            hull,
            vec![
                vector![0.0, 0.0],
                vector![0.25, 0.0],
                vector![0.75, 0.0],
                vector![1.0, 0.0],
                vector![1.0, 1.0],
                vector![0.0, 1.0],
                vector![0.0, 0.5],
            ]
        );
    }

    #[test]
    fn anchor_on_left_edge_prefers_lowest() {
        let pts = [
            vector![0.0, 0.5],
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        let hull = convex_hull(&pts);
        assert_eq!(hull[0], vector![0.0, 0.0]);
        assert_eq!(hull.len(), 5);
        assert_eq!(hull[4], vector![0.0, 0.5]);
    }

    #[test]
    fn collinear_set_terminates() {
        let pts: Vec<Point2> = (0..5).map(|i| vector![i as f64 * 0.25, 0.5]).collect();
        let hull = convex_hull(&pts);
        assert_eq!(hull, pts);
    }

    #[test]
    fn repeated_edge_point_appears_once() {
        let pts = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.5, 0.0],
            vector![0.5, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        let hull = convex_hull(&pts);
        assert_eq!(
            hull,
            vec![
                vector![0.0, 0.0],
                vector![0.5, 0.0],
                vector![1.0, 0.0],
                vector![1.0, 1.0],
                vector![0.0, 1.0]
            ]
        );
        assert_eq!(convex_hull(&hull), hull);
        assert_eq!(crate::geom2::triangulate(&hull).triangle_count(), 3);
    }

    #[test]
    fn hull_is_idempotent() {
        let pts = [
            vector![0.1, 0.9],
            vector![0.5, 0.1],
            vector![0.9, 0.4],
            vector![0.5, 0.5],
            vector![0.3, 0.3],
            vector![0.8, 0.9],
        ];
        let once = convex_hull(&pts);
        let twice = convex_hull(&once);
        assert_eq!(once, twice);
    }
}
