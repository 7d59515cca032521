//! Point tables on disk: columns `x`, `y`, one point per row.
//!
//! Reading goes through a lazy polars CSV scan; integer columns are cast to
//! `f64`. Writing picks CSV or Parquet from the file extension.

use anyhow::{anyhow, bail, Context, Result};
use dchull::{point, Point2};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Read `x`,`y` columns from a CSV file with a header row.
pub fn read_points_csv(path: &Path) -> Result<Vec<Point2>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("scanning {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;

    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(point(x, y)),
            _ => Err(anyhow!("{}: missing coordinate in row {row}", path.display())),
        })
        .collect()
}

fn points_frame(points: &[Point2]) -> Result<DataFrame> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    Ok(df!("x" => xs, "y" => ys)?)
}

/// On-disk table format, chosen from the output extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Parquet,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(TableFormat::Csv),
            Some("parquet") => Ok(TableFormat::Parquet),
            other => bail!(
                "unsupported output extension {:?} for {} (use .csv or .parquet)",
                other,
                path.display()
            ),
        }
    }
}

/// Write points as `.csv` or `.parquet`, creating parent directories.
///
/// The format is resolved before anything is created, so a rejected path
/// leaves the filesystem untouched.
pub fn write_points(path: &Path, points: &[Point2]) -> Result<()> {
    let format = TableFormat::from_path(path)?;
    let mut df = points_frame(points)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match format {
        TableFormat::Csv => {
            CsvWriter::new(&mut file).finish(&mut df)?;
        }
        TableFormat::Parquet => {
            ParquetWriter::new(&mut file).finish(&mut df)?;
        }
    }
    Ok(())
}
