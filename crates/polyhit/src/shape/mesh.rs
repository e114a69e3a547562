//! Renderable geometry from a normalized polygon and its triangle list.
//!
//! Produces positions, uvs and indices only; colors, normals and any GPU
//! upload belong to the renderer.

use super::frame::Rect;
use crate::geom2::{Point2, TriangleIndexList};

/// One output vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshVertex {
    pub position: Point2,
    pub uv: Point2,
}

/// Indexed triangle mesh; `indices.len()` is a multiple of 3.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<usize>,
}

impl Mesh {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Place normalized `points` in `rect` (`rect.min + p * rect.size`) with uvs
/// spread over `uv`, and copy whole triangles from `triangles`.
///
/// Triangles naming a point outside `points` are dropped.
pub fn build_mesh(points: &[Point2], triangles: &TriangleIndexList, rect: Rect, uv: Rect) -> Mesh {
    let vertices = points
        .iter()
        .map(|&p| MeshVertex {
            position: rect.lerp(p),
            uv: uv.lerp(p),
        })
        .collect();
    let mut indices = Vec::with_capacity(triangles.indices.len());
    for t in triangles.triangles() {
        if t.iter().all(|&i| i < points.len()) {
            indices.extend_from_slice(&t);
        }
    }
    Mesh { vertices, indices }
}
