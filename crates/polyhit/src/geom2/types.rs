//! Basic 2D types and tolerances shared by the kernel.
//!
//! - `Point2`: plain `Vector2<f64>`; points are values, freely copied.
//! - `GeomCfg`: centralizes epsilons for convexity, collinearity and
//!   approximate point equality.
//! - `Winding`: orientation derived from the signed area.
//!
//! Code cross-refs: `util::{signed_area, winding, approx_eq}`

use nalgebra::Vector2;

/// A point (or vector) in the polygon's 2D space.
pub type Point2 = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// Absolute epsilons assume O(1) coordinates (normalized unit square).
/// Approximate equality mixes a relative and an absolute floor so that it
/// stays meaningful for both tiny and large magnitudes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Ear convexity: a corner is convex only if `|cross| > eps_convex`
    /// with the polygon's sign.
    pub eps_convex: f64,
    /// Cross products with `|cross| <= eps_collinear` count as collinear.
    pub eps_collinear: f64,
    /// Relative part of `approx_eq`.
    pub approx_rel: f64,
    /// Absolute floor of `approx_eq`.
    pub approx_abs: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_convex: 1e-12,
            eps_collinear: 1e-12,
            approx_rel: 1e-9,
            approx_abs: 1e-12,
        }
    }
}

/// Rotational direction of an ordered point loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    /// `true` if `cross` turns the same way as this winding, beyond `eps`.
    #[inline]
    pub fn agrees(self, cross: f64, eps: f64) -> bool {
        match self {
            Winding::Clockwise => cross < -eps,
            Winding::CounterClockwise => cross > eps,
        }
    }
}
