//! Point file readers and writers.
//!
//! Two formats:
//! - two-line text: line 1 holds comma-separated x values, line 2 the y values;
//! - CSV with `x` and `y` columns (any other columns are ignored).
//!
//! `.csv` files use the CSV reader, everything else the two-line reader.

use anyhow::{bail, Context, Result};
use closest::Point2;
use polars::prelude::*;
use std::fs;
use std::path::Path;

pub fn read_points(path: &Path) -> Result<Vec<Point2>> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    let points = if is_csv {
        read_csv(path)?
    } else {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        parse_two_line(&text).with_context(|| format!("parsing {}", path.display()))?
    };
    tracing::info!(path = %path.display(), n = points.len(), "points_loaded");
    Ok(points)
}

/// Parse the two-line format. Blank lines are skipped; extra lines are ignored.
pub fn parse_two_line(text: &str) -> Result<Vec<Point2>> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let xs = parse_row(lines.next().context("missing x line")?, "x")?;
    let ys = parse_row(lines.next().context("missing y line")?, "y")?;
    if xs.len() != ys.len() {
        bail!("{} x values but {} y values", xs.len(), ys.len());
    }
    Ok(xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Point2::new(x, y))
        .collect())
}

fn parse_row(line: &str, name: &str) -> Result<Vec<f64>> {
    line.split(',')
        .enumerate()
        .map(|(i, tok)| {
            tok.trim()
                .parse::<f64>()
                .with_context(|| format!("{name} value #{i} is not a number: {tok:?}"))
        })
        .collect()
}

/// Inverse of `parse_two_line`.
pub fn format_two_line(points: &[Point2]) -> String {
    let row = |f: fn(&Point2) -> f64| {
        points
            .iter()
            .map(|p| f(p).to_string())
            .collect::<Vec<_>>()
            .join(",")
    };
    format!("{}\n{}\n", row(|p| p.x), row(|p| p.y))
}

fn read_csv(path: &Path) -> Result<Vec<Point2>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point2::new(x, y)),
            _ => bail!("row {row}: missing x or y"),
        })
        .collect()
}
