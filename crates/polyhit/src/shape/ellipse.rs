//! Ellipse inscribed in a rect: outline, fan triangulation and hit test.

use super::frame::Rect;
use crate::geom2::{Point2, TriangleIndexList};

/// Ellipse approximated by `segments` outline points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EllipseShape {
    pub segments: usize,
}

impl Default for EllipseShape {
    fn default() -> Self {
        Self { segments: 36 }
    }
}

impl EllipseShape {
    /// Clamps `segments` to at least 3.
    pub fn new(segments: usize) -> Self {
        Self {
            segments: segments.max(3),
        }
    }

    /// Outline points counter-clockwise from the right-hand extreme.
    pub fn outline(&self, rect: Rect) -> Vec<Point2> {
        let n = self.segments.max(3);
        let c = rect.center();
        let r = rect.size * 0.5;
        (0..n)
            .map(|i| {
                let th = i as f64 * std::f64::consts::TAU / n as f64;
                Point2::new(c.x + th.cos() * r.x, c.y + th.sin() * r.y)
            })
            .collect()
    }

    /// Fan `(0, i, i + 1)` over the outline.
    pub fn fan(&self) -> TriangleIndexList {
        let n = self.segments.max(3);
        let mut out = TriangleIndexList {
            indices: Vec::with_capacity(3 * (n - 2)),
        };
        for i in 1..n - 1 {
            out.indices.extend_from_slice(&[0, i, i + 1]);
        }
        out
    }

    /// Closed containment in the exact ellipse inscribed in `rect`.
    pub fn contains(&self, rect: Rect, p: Point2) -> bool {
        let r = rect.size * 0.5;
        if r.x == 0.0 || r.y == 0.0 {
            return false;
        }
        let d = p - rect.center();
        let (u, v) = (d.x / r.x, d.y / r.y);
        u * u + v * v <= 1.0
    }
}
