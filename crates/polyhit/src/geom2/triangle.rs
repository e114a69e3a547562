use super::types::Point2;
use super::util::cross2d;

/// Closed point-in-triangle test, independent of the triangle's winding.
///
/// Takes the cross products of consecutive vertex vectors seen from `p`
/// (a×b, b×c, c×a) and requires every consecutive pair to agree in sign,
/// i.e. `p` lies on the same side of all three edges. Zero products count
/// as agreement, so boundary points are inside.
pub fn point_in_triangle(p: Point2, a: Point2, b: Point2, c: Point2) -> bool {
    let pa = a - p;
    let pb = b - p;
    let pc = c - p;

    let c1 = cross2d(pa, pb);
    let c2 = cross2d(pb, pc);
    let c3 = cross2d(pc, pa);

    c1 * c2 >= 0.0 && c2 * c3 >= 0.0 && c3 * c1 >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn inside_outside_and_boundary() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        let c = vector![0.0, 1.0];
        assert!(point_in_triangle(vector![0.25, 0.25], a, b, c));
        assert!(!point_in_triangle(vector![0.75, 0.75], a, b, c));
        assert!(!point_in_triangle(vector![-0.1, 0.5], a, b, c));
        // edge midpoint and vertex
        assert!(point_in_triangle(vector![0.5, 0.5], a, b, c));
        assert!(point_in_triangle(a, a, b, c));
    }

    #[test]
    fn winding_does_not_matter() {
        let a = vector![0.1, 0.2];
        let b = vector![0.9, 0.3];
        let c = vector![0.4, 0.8];
        for q in [
            vector![0.45, 0.4],
            vector![0.0, 0.0],
            vector![0.9, 0.9],
            vector![0.5, 0.25],
        ] {
            assert_eq!(point_in_triangle(q, a, b, c), point_in_triangle(q, c, b, a));
        }
    }

    #[test]
    fn collinear_triangle_rejects_off_line_points() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        let c = vector![2.0, 0.0];
        assert!(!point_in_triangle(vector![0.0, 1.0], a, b, c));
    }
}
