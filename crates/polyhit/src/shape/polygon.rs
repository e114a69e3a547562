use super::frame::RectFrame;
use crate::error::ShapeError;
use crate::geom2::{
    convex_hull_with, point_in_polygon_with, triangulate_with, GeomCfg, Point2, TriangleIndexList,
};

/// Editable polygon in normalized rect space plus its cached triangle list.
///
/// Invariants:
/// - `triangles` always indexes the current `points` (rebuilt after every edit).
/// - Out-of-range indices are reported, never clamped.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonShape {
    points: Vec<Point2>,
    triangles: TriangleIndexList,
    cfg: GeomCfg,
}

impl Default for PolygonShape {
    /// The unit square, listed clockwise from the origin.
    fn default() -> Self {
        Self::from_points(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ])
    }
}

impl PolygonShape {
    pub fn from_points(points: Vec<Point2>) -> Self {
        Self::with_cfg(points, GeomCfg::default())
    }

    pub fn with_cfg(points: Vec<Point2>, cfg: GeomCfg) -> Self {
        let mut shape = Self {
            points,
            triangles: TriangleIndexList::default(),
            cfg,
        };
        shape.rebuild_triangles();
        shape
    }

    #[inline]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn triangles(&self) -> &TriangleIndexList {
        &self.triangles
    }

    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }

    pub fn point(&self, index: usize) -> Result<Point2, ShapeError> {
        self.check(index)?;
        Ok(self.points[index])
    }

    pub fn set_point(&mut self, index: usize, point: Point2) -> Result<(), ShapeError> {
        self.check(index)?;
        self.points[index] = point;
        self.rebuild_triangles();
        Ok(())
    }

    pub fn remove_point(&mut self, index: usize) -> Result<Point2, ShapeError> {
        self.check(index)?;
        let removed = self.points.remove(index);
        self.rebuild_triangles();
        Ok(removed)
    }

    /// Append a point: the origin while there are fewer than 2 points,
    /// otherwise the midpoint of the closing edge (last → first).
    pub fn push_point(&mut self) -> Point2 {
        let p = match (self.points.first(), self.points.last()) {
            (Some(&first), Some(&last)) if self.points.len() >= 2 => last + (first - last) * 0.5,
            _ => Point2::zeros(),
        };
        self.points.push(p);
        self.rebuild_triangles();
        p
    }

    /// Recompute the triangle list from scratch; fewer than 3 points clear it.
    pub fn rebuild_triangles(&mut self) {
        self.triangles = triangulate_with(&self.points, self.cfg);
    }

    /// Replace the points by their convex hull and re-triangulate.
    ///
    /// Fewer than 3 points only clear the triangle list.
    pub fn reduce_to_convex_hull(&mut self) {
        if self.points.len() < 3 {
            self.triangles = TriangleIndexList::default();
            return;
        }
        self.points = convex_hull_with(&self.points, self.cfg);
        self.rebuild_triangles();
    }

    /// Closed containment of a normalized point.
    #[inline]
    pub fn contains(&self, normalized: Point2) -> bool {
        point_in_polygon_with(&self.points, normalized, self.cfg)
    }

    /// Hit test for a point in `frame`'s local space.
    pub fn hit_test(&self, frame: &RectFrame, local: Point2) -> bool {
        match frame.to_normalized(local) {
            Some(n) => self.contains(n),
            None => false,
        }
    }

    fn check(&self, index: usize) -> Result<(), ShapeError> {
        if index < self.points.len() {
            return Ok(());
        }
        let err = ShapeError::OutOfRange {
            index,
            len: self.points.len(),
        };
        tracing::warn!(index, len = self.points.len(), "{err}");
        Err(err)
    }
}
