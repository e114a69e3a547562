//! Geometry kernel for normalized 2D polygon shapes.
//!
//! Triangulates simple polygons for rendering, reduces point sets to their
//! convex hull, and answers point-in-triangle / point-in-polygon queries for
//! hit testing. The `shape` layer wraps the kernel for editors and
//! hit-testing code.
//!
//! API Policy
//! - `api` lists the supported entry points; everything else may move.

pub mod api;
pub mod error;
pub mod geom2;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::ShapeError;
pub use geom2::{GeomCfg, Point2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_point_cloud, draw_star_polygon, ReplayToken, StarCfg, VertexCount,
    };
    pub use crate::geom2::{
        convex_hull, point_in_polygon, point_in_triangle, signed_area, triangulate, GeomCfg,
        Point2, TriangleIndexList, Winding,
    };
    pub use crate::shape::{EllipseShape, PolygonShape, Rect, RectFrame};
    pub use crate::ShapeError;
}
