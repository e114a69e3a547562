//! Rect geometry around a shape: pivot-relative local space and the
//! normalized `[0,1]²` space the kernel works in.
//!
//! - `Rect`: axis-aligned rectangle by bottom-left corner and size.
//! - `RectFrame`: a rect of given size whose local origin sits at `pivot`.
//! - `Anchor`, `Padding`: named rect positions and per-side insets.

use nalgebra::Vector2;

use crate::geom2::Point2;

/// Axis-aligned rectangle `[min, min + size]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Point2,
    pub size: Vector2<f64>,
}

impl Rect {
    #[inline]
    pub fn new(min: Point2, size: Vector2<f64>) -> Self {
        Self { min, size }
    }

    /// `[0,1]²`; the default uv rect.
    #[inline]
    pub fn unit() -> Self {
        Self::new(Point2::zeros(), Vector2::new(1.0, 1.0))
    }

    #[inline]
    pub fn center(&self) -> Point2 {
        self.min + self.size * 0.5
    }

    /// `min + normalized * size` (componentwise).
    #[inline]
    pub fn lerp(&self, normalized: Point2) -> Point2 {
        self.min + self.size.component_mul(&normalized)
    }
}

/// Named positions on a rect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Anchor {
    /// Normalized coordinates, bottom-left is `(0,0)`.
    pub fn normalized(self) -> Point2 {
        let (x, y) = match self {
            Anchor::Center => (0.5, 0.5),
            Anchor::Top => (0.5, 1.0),
            Anchor::Bottom => (0.5, 0.0),
            Anchor::Left => (0.0, 0.5),
            Anchor::Right => (1.0, 0.5),
            Anchor::TopLeft => (0.0, 1.0),
            Anchor::TopRight => (1.0, 1.0),
            Anchor::BottomLeft => (0.0, 0.0),
            Anchor::BottomRight => (1.0, 0.0),
        };
        Point2::new(x, y)
    }
}

/// Per-side insets. Positive values shrink the rect, negative values grow it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

/// A rect of `size` whose local origin is at `pivot` (normalized; `(0.5, 0.5)` is the center).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectFrame {
    pub size: Vector2<f64>,
    pub pivot: Point2,
}

impl Default for RectFrame {
    fn default() -> Self {
        Self {
            size: Vector2::new(100.0, 100.0),
            pivot: Point2::new(0.5, 0.5),
        }
    }
}

impl RectFrame {
    #[inline]
    pub fn new(size: Vector2<f64>, pivot: Point2) -> Self {
        Self { size, pivot }
    }

    /// The frame in local coordinates.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.local_position(Point2::zeros()), self.size)
    }

    /// Local position of a normalized point.
    pub fn local_position(&self, normalized: Point2) -> Point2 {
        let pivot_offset = (Vector2::repeat(0.5) - self.pivot).component_mul(&self.size);
        let bottom_left = pivot_offset - self.size * 0.5;
        bottom_left + normalized.component_mul(&self.size)
    }

    #[inline]
    pub fn anchor(&self, anchor: Anchor) -> Point2 {
        self.local_position(anchor.normalized())
    }

    /// Inverse of `local_position`; `None` for a zero-width or zero-height frame.
    pub fn to_normalized(&self, local: Point2) -> Option<Point2> {
        if self.size.x == 0.0 || self.size.y == 0.0 {
            return None;
        }
        let delta = local - self.local_position(Point2::zeros());
        Some(delta.component_div(&self.size))
    }

    /// Closed containment in the frame's rect.
    #[inline]
    pub fn contains_local(&self, local: Point2) -> bool {
        self.contains_padded(local, Padding::default())
    }

    /// Corners `[top_left, top_right, bottom_right, bottom_left]` after padding.
    pub fn padded_corners(&self, padding: Padding) -> [Point2; 4] {
        let (lo, hi) = self.padded_bounds(padding);
        [
            Point2::new(lo.x, hi.y),
            hi,
            Point2::new(hi.x, lo.y),
            lo,
        ]
    }

    /// Rect-only hit test: closed containment in the padded rect.
    pub fn contains_padded(&self, local: Point2, padding: Padding) -> bool {
        let (lo, hi) = self.padded_bounds(padding);
        (lo.x..=hi.x).contains(&local.x) && (lo.y..=hi.y).contains(&local.y)
    }

    fn padded_bounds(&self, padding: Padding) -> (Point2, Point2) {
        let lo = self.anchor(Anchor::BottomLeft) + Vector2::new(padding.left, padding.bottom);
        let hi = self.anchor(Anchor::TopRight) - Vector2::new(padding.right, padding.top);
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn centered_pivot_anchors() {
        let f = RectFrame::new(vector![200.0, 100.0], vector![0.5, 0.5]);
        assert_eq!(f.anchor(Anchor::BottomLeft), vector![-100.0, -50.0]);
        assert_eq!(f.anchor(Anchor::TopRight), vector![100.0, 50.0]);
        assert_eq!(f.anchor(Anchor::Center), vector![0.0, 0.0]);
        assert_eq!(f.anchor(Anchor::Left), vector![-100.0, 0.0]);
    }

    #[test]
    fn bottom_left_pivot_is_origin() {
        let f = RectFrame::new(vector![10.0, 20.0], vector![0.0, 0.0]);
        assert_eq!(f.anchor(Anchor::BottomLeft), vector![0.0, 0.0]);
        assert_eq!(f.anchor(Anchor::Top), vector![5.0, 20.0]);
        assert_eq!(f.rect(), Rect::new(vector![0.0, 0.0], vector![10.0, 20.0]));
    }

    #[test]
    fn normalized_round_trip_and_zero_size() {
        let f = RectFrame::new(vector![40.0, 80.0], vector![0.25, 0.75]);
        let n = vector![0.3, 0.6];
        let back = f.to_normalized(f.local_position(n)).unwrap();
        assert!((back - n).norm() < 1e-12);
        let flat = RectFrame::new(vector![40.0, 0.0], vector![0.5, 0.5]);
        assert!(flat.to_normalized(vector![0.0, 0.0]).is_none());
    }

    #[test]
    fn padding_shrinks_and_grows() {
        let f = RectFrame::new(vector![100.0, 100.0], vector![0.5, 0.5]);
        let p = vector![48.0, 0.0];
        assert!(f.contains_local(p));
        let inset = Padding {
            right: 5.0,
            ..Padding::default()
        };
        assert!(!f.contains_padded(p, inset));
        let outset = Padding {
            right: -5.0,
            ..Padding::default()
        };
        assert!(f.contains_padded(vector![53.0, 0.0], outset));
        let corners = f.padded_corners(inset);
        assert_eq!(corners[1], vector![45.0, 50.0]);
        assert_eq!(corners[3], vector![-50.0, -50.0]);
    }
}
