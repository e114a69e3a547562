//! Ear-clipping triangulation of simple polygons.
//!
//! Purpose
//! - Turn an ordered simple polygon (any winding, convex or not) into a list
//!   of triangle index triples for a renderer.
//!
//! Assumptions and conventions
//! - Input must be simple (non-self-intersecting); this is not verified.
//! - Triangles are emitted as `(prev, ear, next)` and keep the input winding.
//! - The scan cursor persists across removals. Each failed ear check spends
//!   one unit of a budget equal to the remaining vertex count; a removal
//!   refills it. An exhausted budget ends the run with a partial result.
//!
//! Code cross-refs: `triangle::point_in_triangle`, `util::winding`

use super::triangle::point_in_triangle;
use super::types::{GeomCfg, Point2, Winding};
use super::util::{cross2d, winding};

/// Flat triangle index list; each consecutive triple names one triangle.
///
/// Invariants:
/// - `indices.len() % 3 == 0`.
/// - Every index is valid for the point slice it was built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriangleIndexList {
    pub indices: Vec<usize>,
}

impl TriangleIndexList {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Sum of the absolute triangle areas against `points`.
    pub fn area(&self, points: &[Point2]) -> f64 {
        self.triangles()
            .map(|[a, b, c]| 0.5 * cross2d(points[b] - points[a], points[c] - points[a]).abs())
            .sum()
    }

    #[inline]
    fn push(&mut self, a: usize, b: usize, c: usize) {
        self.indices.extend_from_slice(&[a, b, c]);
    }
}

/// Shorthand for `triangulate_with(points, GeomCfg::default())`.
#[inline]
pub fn triangulate(points: &[Point2]) -> TriangleIndexList {
    triangulate_with(points, GeomCfg::default())
}

/// Ear-clipping triangulation.
///
/// Returns `n - 2` triangles for a simple polygon with `n >= 3` vertices,
/// an empty list for fewer than 3, and a partial list if no ear can be
/// found (malformed input).
pub fn triangulate_with(points: &[Point2], cfg: GeomCfg) -> TriangleIndexList {
    let mut out = TriangleIndexList::default();
    let n = points.len();
    if n < 3 {
        return out;
    }
    out.indices.reserve(3 * (n - 2));

    let wind = winding(points);
    let mut rest: Vec<usize> = (0..n).collect();
    let mut cursor = 0usize;
    let mut budget = rest.len();

    while rest.len() > 2 {
        if budget == 0 {
            tracing::debug!(
                remaining = rest.len(),
                emitted = out.triangle_count(),
                "ear clipping stopped without an ear"
            );
            break;
        }

        if is_ear(points, &rest, cursor, wind, &cfg) {
            let (prev, next) = neighbors(rest.len(), cursor);
            out.push(rest[prev], rest[cursor], rest[next]);
            rest.remove(cursor);
            budget = rest.len();
        } else {
            cursor += 1;
            budget -= 1;
        }

        if cursor >= rest.len() {
            cursor = 0;
        }
    }
    out
}

/// Positions of the predecessor and successor of `i` in a ring of `len`.
#[inline]
fn neighbors(len: usize, i: usize) -> (usize, usize) {
    let prev = if i == 0 { len - 1 } else { i - 1 };
    let next = if i + 1 == len { 0 } else { i + 1 };
    (prev, next)
}

fn is_ear(points: &[Point2], rest: &[usize], at: usize, wind: Winding, cfg: &GeomCfg) -> bool {
    let (prev_pos, next_pos) = neighbors(rest.len(), at);
    let prev = rest[prev_pos];
    let ear = rest[at];
    let next = rest[next_pos];

    let a = points[prev];
    let b = points[ear];
    let c = points[next];

    if !wind.agrees(cross2d(b - a, c - b), cfg.eps_convex) {
        return false;
    }
    !rest
        .iter()
        .filter(|&&k| k != prev && k != ear && k != next)
        .any(|&k| point_in_triangle(points[k], a, b, c))
}
