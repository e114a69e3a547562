//! Supported entry points.
//!
//! The four kernel operations come in a default-tolerance form and a
//! `*_with(.., GeomCfg)` form. All are pure and thread-safe.

// Kernel
pub use crate::geom2::{
    convex_hull, convex_hull_with, point_in_polygon, point_in_polygon_with, point_in_triangle,
    triangulate, triangulate_with, GeomCfg, Point2, TriangleIndexList,
};
// Primitives
pub use crate::geom2::{approx_eq, cross2d, points_approx_eq, signed_area, winding, Winding};
// Shapes
pub use crate::error::ShapeError;
pub use crate::shape::{
    build_mesh, Anchor, EllipseShape, Mesh, MeshVertex, Padding, PolygonShape, Rect, RectFrame,
};

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn square_vectors_through_api() {
        let sq = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        assert_eq!(triangulate(&sq).triangle_count(), 2);
        assert_eq!(convex_hull(&sq), sq.to_vec());
        assert!(point_in_polygon(&sq, vector![0.5, 0.5]));
        assert!(!point_in_polygon(&sq, vector![1.5, 0.5]));
        assert!(point_in_polygon(&sq, vector![0.0, 0.5]));
        assert!(point_in_triangle(vector![0.5, 0.25], sq[0], sq[1], sq[2]));
    }

    #[test]
    fn kernel_is_shareable_across_threads() {
        let pts = std::sync::Arc::new(vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 0.5],
            vector![0.5, 0.5],
            vector![0.5, 1.0],
            vector![0.0, 1.0],
        ]);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let pts = pts.clone();
                std::thread::spawn(move || triangulate(&pts))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap().triangle_count(), 4);
        }
    }
}
