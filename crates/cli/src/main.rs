use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use polyhit::geom2::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use polyhit::geom2::{convex_hull_with, point_in_polygon_with, signed_area, triangulate_with};
use polyhit::{GeomCfg, Point2};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use provenance::{write_sidecar, Provenance};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Triangulate, hull and hit-test normalized polygons")]
struct Cmd {
    #[command(flatten)]
    tol: Tolerance,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct Tolerance {
    /// Ear convexity threshold on the cross product
    #[arg(long, global = true, default_value_t = GeomCfg::default().eps_convex)]
    eps_convex: f64,
    /// Collinearity threshold for the hull walk and on-edge hits
    #[arg(long, global = true, default_value_t = GeomCfg::default().eps_collinear)]
    eps_collinear: f64,
}

impl Tolerance {
    fn cfg(&self) -> GeomCfg {
        GeomCfg {
            eps_convex: self.eps_convex,
            eps_collinear: self.eps_collinear,
            ..GeomCfg::default()
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Ear-clip a polygon into triangle indices
    Triangulate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Reduce a point set to its convex hull (counter-clockwise)
    Hull {
        #[arg(long)]
        input: PathBuf,
        /// `.json` or `.csv`
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Test whether (x, y) lies in the polygon, boundary included
    Contains {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
    /// Draw a random star polygon in the unit square
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long)]
        clockwise: bool,
        /// `.json` or `.csv`
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a provenance JSON block
    Report,
}

#[derive(Serialize)]
struct TriangulateOut {
    indices: Vec<usize>,
    triangle_count: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = cmd.tol.cfg();
    match cmd.action {
        Action::Triangulate { input, out } => triangulate(input, out, cfg),
        Action::Hull { input, out } => hull(input, out, cfg),
        Action::Contains { input, x, y } => contains(input, Point2::new(x, y), cfg),
        Action::Sample {
            seed,
            index,
            vertices,
            clockwise,
            out,
        } => sample(seed, index, vertices, clockwise, out, cfg),
        Action::Report => report(cfg),
    }
}

fn triangulate(input: PathBuf, out: Option<PathBuf>, cfg: GeomCfg) -> Result<()> {
    let pts = points::load(&input)?;
    let tri = triangulate_with(&pts, cfg);
    tracing::info!(
        input = %input.display(),
        points = pts.len(),
        triangles = tri.triangle_count(),
        "triangulate"
    );
    if tri.triangle_count() + 2 != pts.len() && pts.len() >= 3 {
        tracing::warn!(
            expected = pts.len() - 2,
            got = tri.triangle_count(),
            "partial triangulation; polygon may be self-intersecting or degenerate"
        );
    }
    let doc = TriangulateOut {
        triangle_count: tri.triangle_count(),
        indices: tri.indices,
    };
    match out {
        Some(out) => {
            points::write_json(&out, &doc)?;
            let params = json!({"input": input, "points": pts.len()});
            write_sidecar(&out, Provenance::new("triangulate", cfg, params))?;
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

fn hull(input: PathBuf, out: Option<PathBuf>, cfg: GeomCfg) -> Result<()> {
    let pts = points::load(&input)?;
    let hull = convex_hull_with(&pts, cfg);
    tracing::info!(
        input = %input.display(),
        points = pts.len(),
        hull = hull.len(),
        area = signed_area(&hull),
        "hull"
    );
    match out {
        Some(out) => {
            points::save(&out, &hull)?;
            let params = json!({"input": input, "points": pts.len()});
            write_sidecar(&out, Provenance::new("hull", cfg, params))?;
        }
        None => println!(
            "{}",
            serde_json::to_string_pretty(&points::PointsOut::new(&hull))?
        ),
    }
    Ok(())
}

fn contains(input: PathBuf, q: Point2, cfg: GeomCfg) -> Result<()> {
    let pts = points::load(&input)?;
    let hit = point_in_polygon_with(&pts, q, cfg);
    tracing::debug!(x = q.x, y = q.y, hit, "contains");
    println!("{hit}");
    Ok(())
}

fn sample(
    seed: u64,
    index: u64,
    vertices: usize,
    clockwise: bool,
    out: PathBuf,
    cfg: GeomCfg,
) -> Result<()> {
    let star = StarCfg {
        vertex_count: VertexCount::Fixed(vertices),
        clockwise,
        ..StarCfg::default()
    };
    let pts = draw_star_polygon(star, ReplayToken { seed, index });
    tracing::info!(seed, index, vertices = pts.len(), out = %out.display(), "sample");
    points::save(&out, &pts)?;
    let params = json!({
        "seed": seed,
        "index": index,
        "vertices": vertices,
        "clockwise": clockwise
    });
    write_sidecar(&out, Provenance::new("sample", cfg, params))?;
    Ok(())
}

fn report(cfg: GeomCfg) -> Result<()> {
    let doc = Provenance::new("report", cfg, json!({}));
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
