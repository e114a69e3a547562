//! Collaborator-facing shapes built on the `geom2` kernel.
//!
//! Purpose
//! - `PolygonShape`: the authoring surface (add, move, remove points; hull
//!   reduction) that keeps a triangle list in sync and answers hit tests.
//! - `RectFrame`: maps rect-local points to the normalized space the kernel
//!   expects, plus rect-only hit tests with padding.
//! - `build_mesh`: positions and uvs for a renderer.
//! - `EllipseShape`: the ellipse counterpart (outline, fan, exact hit test).
//!
//! Code cross-refs: `crate::geom2`, `crate::error::ShapeError`

mod ellipse;
mod frame;
mod mesh;
mod polygon;

pub use ellipse::EllipseShape;
pub use frame::{Anchor, Padding, Rect, RectFrame};
pub use mesh::{build_mesh, Mesh, MeshVertex};
pub use polygon::PolygonShape;
