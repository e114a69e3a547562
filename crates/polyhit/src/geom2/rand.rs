//! Random polygons and point clouds in the unit square (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide small, deterministic samplers for property tests, benches and
//!   the CLI. Outputs are plain point lists ready for the kernel.
//!
//! Model
//! - Star polygons: `n` angles on [0, 2π) with bounded angular and radial
//!   jitter, sorted by angle and connected in order. Sorting around a common
//!   center keeps the loop simple (star-shaped) but generally non-convex.
//!   The result is rescaled into `[margin, 1 - margin]²`.
//! - Point clouds: uniform in the unit square.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter in [0, 0.95]. Radii = `1 + u`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Gap kept between the polygon and the unit square's border.
    pub margin: f64,
    /// Emit the loop clockwise instead of counter-clockwise.
    pub clockwise: bool,
}
impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            margin: 0.05,
            clockwise: false,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a simple star-shaped polygon inside the unit square.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mut pts: Vec<Point2> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = 1.0 + u;
            Point2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    fit_unit_square(&mut pts, cfg.margin.clamp(0.0, 0.49));
    if cfg.clockwise {
        pts.reverse();
    }
    pts
}

/// Draw `count` uniform points in the unit square.
pub fn draw_point_cloud(count: usize, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    (0..count)
        .map(|_| Point2::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect()
}

/// Uniformly scale and translate so the bounding box fits `[margin, 1 - margin]²`.
fn fit_unit_square(pts: &mut [Point2], margin: f64) {
    let (mut lo, mut hi) = (Point2::repeat(f64::INFINITY), Point2::repeat(f64::NEG_INFINITY));
    for p in pts.iter() {
        lo = lo.inf(p);
        hi = hi.sup(p);
    }
    let extent = (hi - lo).max();
    if !(extent.is_finite()) || extent <= 0.0 {
        return;
    }
    let s = (1.0 - 2.0 * margin) / extent;
    for p in pts.iter_mut() {
        *p = (*p - lo) * s + Point2::repeat(margin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::{winding, Winding};

    #[test]
    fn reproducible_draw() {
        let cfg = StarCfg {
            vertex_count: VertexCount::Fixed(10),
            ..StarCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_star_polygon(cfg, tok);
        let p2 = draw_star_polygon(cfg, tok);
        assert_eq!(p1, p2);
        assert_eq!(p1.len(), 10);
        let p3 = draw_star_polygon(cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(p1, p3);
    }

    #[test]
    fn star_fits_unit_square_and_winds_as_asked() {
        let tok = ReplayToken {
            seed: 1,
            index: 123,
        };
        let ccw = draw_star_polygon(StarCfg::default(), tok);
        assert!(ccw
            .iter()
            .all(|p| (0.05 - 1e-12..=0.95 + 1e-12).contains(&p.x)
                && (0.05 - 1e-12..=0.95 + 1e-12).contains(&p.y)));
        assert_eq!(winding(&ccw), Winding::CounterClockwise);
        let cw = draw_star_polygon(
            StarCfg {
                clockwise: true,
                ..StarCfg::default()
            },
            tok,
        );
        assert_eq!(winding(&cw), Winding::Clockwise);
    }

    #[test]
    fn cloud_is_in_unit_square() {
        let pts = draw_point_cloud(64, ReplayToken { seed: 3, index: 0 });
        assert_eq!(pts.len(), 64);
        assert!(pts
            .iter()
            .all(|p| (0.0..1.0).contains(&p.x) && (0.0..1.0).contains(&p.y)));
    }
}
