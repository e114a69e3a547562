//! 2D polygon kernel: triangulation, convex hull and containment.
//!
//! Purpose
//! - Decompose an ordered simple polygon into triangles (`triangulate`).
//! - Reduce an unordered point set to its convex hull (`convex_hull`).
//! - Classify query points against a triangle or polygon
//!   (`point_in_triangle`, `point_in_polygon`).
//!
//! Assumptions and conventions
//! - Points are `Vector2<f64>` values, usually in the normalized unit square.
//! - Every operation is a total function: degenerate input yields empty or
//!   partial results, never an error. Nothing here allocates shared state, so
//!   calls may run concurrently.
//! - Near-zero decisions go through `GeomCfg`; each operation has a
//!   `*_with(.., cfg)` form and a default-config shorthand.
//!
//! Code cross-refs: `crate::shape` (collaborator-facing models)

mod contains;
mod earclip;
mod hull;
pub mod rand;
mod triangle;
mod types;
mod util;

pub use contains::{point_in_polygon, point_in_polygon_with};
pub use earclip::{triangulate, triangulate_with, TriangleIndexList};
pub use hull::{convex_hull, convex_hull_with};
pub use triangle::point_in_triangle;
pub use types::{GeomCfg, Point2, Winding};
pub use util::{approx_eq, cross2d, points_approx_eq, signed_area, winding};
