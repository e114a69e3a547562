//! Point files: `.json` (`{"points": [[x, y], ...]}` or a bare array),
//! `.csv` and `.parquet` (columns `x`, `y`).

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use polyhit::Point2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum PointFile {
    Wrapped { points: Vec<[f64; 2]> },
    Bare(Vec<[f64; 2]>),
}

#[derive(Serialize)]
pub struct PointsOut {
    pub points: Vec<[f64; 2]>,
}

impl PointsOut {
    pub fn new(points: &[Point2]) -> Self {
        Self {
            points: points.iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}

pub fn load(path: &Path) -> Result<Vec<Point2>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let pts = match ext {
        "json" => load_json(path)?,
        "csv" => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()?;
            load_frame(lf)?
        }
        "parquet" => load_frame(LazyFrame::scan_parquet(path, ScanArgsParquet::default())?)?,
        other => bail!("unsupported point file extension {other:?} ({})", path.display()),
    };
    tracing::debug!(path = %path.display(), count = pts.len(), "points_loaded");
    Ok(pts)
}

fn load_json(path: &Path) -> Result<Vec<Point2>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: PointFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing points from {}", path.display()))?;
    let raw = match file {
        PointFile::Wrapped { points } | PointFile::Bare(points) => points,
    };
    Ok(raw.into_iter().map(|[x, y]| Point2::new(x, y)).collect())
}

fn load_frame(lf: LazyFrame) -> Result<Vec<Point2>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(Point2::new(x, y)),
            _ => Err(anyhow!("row {row} has a missing coordinate")),
        })
        .collect()
}

/// Write points as JSON, or as CSV when `path` ends in `.csv`.
pub fn save(path: &Path, points: &[Point2]) -> Result<()> {
    ensure_parent(path)?;
    if path.extension().and_then(|e| e.to_str()) == Some("csv") {
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        let mut df = polars::df!("x" => xs, "y" => ys)?;
        let mut file =
            fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
        CsvWriter::new(&mut file).finish(&mut df)?;
        return Ok(());
    }
    write_json(path, &PointsOut::new(points))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn json_wrapped_and_bare() {
        let dir = tempdir().unwrap();
        let wrapped = dir.path().join("w.json");
        fs::write(&wrapped, r#"{"points": [[0, 0], [1, 0], [0.5, 1]]}"#).unwrap();
        let bare = dir.path().join("b.json");
        fs::write(&bare, "[[0, 0], [1, 0], [0.5, 1]]").unwrap();
        let a = load(&wrapped).unwrap();
        assert_eq!(a, load(&bare).unwrap());
        assert_eq!(a[2], Point2::new(0.5, 1.0));
    }

    #[test]
    fn csv_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/pts.csv");
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.25), Point2::new(0.5, 1.0)];
        save(&path, &pts).unwrap();
        assert_eq!(load(&path).unwrap(), pts);
    }

    #[test]
    fn integer_csv_columns_are_cast() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("int.csv");
        fs::write(&path, "x,y\n0,0\n2,0\n1,3\n").unwrap();
        assert_eq!(load(&path).unwrap()[2], Point2::new(1.0, 3.0));
    }

    #[test]
    fn bad_inputs_are_errors() {
        let dir = tempdir().unwrap();
        let txt = dir.path().join("pts.txt");
        fs::write(&txt, "0 0").unwrap();
        assert!(load(&txt).is_err());
        let broken = dir.path().join("broken.json");
        fs::write(&broken, r#"{"pts": []}"#).unwrap();
        assert!(load(&broken).is_err());
        assert!(load(&dir.path().join("missing.json")).is_err());
    }
}
