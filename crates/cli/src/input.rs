//! Point-set tables: `x`, `y` and an optional integer `set` column.
//!
//! Rows sharing a `set` value form one point set; sets keep the order in which
//! they first appear. Without a `set` column the whole table is one set (id 0).

use anyhow::{anyhow, bail, Context, Result};
use dividemerge::Point;
use polars::prelude::*;
use std::path::Path;

/// One point set as read from the table, before sorting.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    pub id: i64,
    pub points: Vec<Point>,
}

/// Read CSV or Parquet (by extension) into point sets.
pub fn load_point_sets(path: &Path) -> Result<Vec<PointSet>> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("scanning {}", path.display()))?,
        Some("csv") => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("scanning {}", path.display()))?,
        _ => bail!("unsupported input {}; expected .csv or .parquet", path.display()),
    };
    let df = lf
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_shape");
    point_sets_from_frame(&df)
}

pub fn point_sets_from_frame(df: &DataFrame) -> Result<Vec<PointSet>> {
    let xs = float_column(df, "x")?;
    let ys = float_column(df, "y")?;
    let ids = if df.column("set").is_ok() {
        let col = df.column("set")?.cast(&DataType::Int64)?;
        col.i64()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| v.ok_or_else(|| anyhow!("missing set id in row {row}")))
            .collect::<Result<Vec<i64>>>()?
    } else {
        vec![0; xs.len()]
    };
    Ok(group_rows(&ids, &xs, &ys))
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("input needs a `{name}` column"))?
        .cast(&DataType::Float64)
        .with_context(|| format!("column `{name}` is not numeric"))?;
    let values = col
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| anyhow!("missing `{name}` in row {row}")))
        .collect::<Result<Vec<f64>>>()?;
    Ok(values)
}

fn group_rows(ids: &[i64], xs: &[f64], ys: &[f64]) -> Vec<PointSet> {
    let mut sets: Vec<PointSet> = Vec::new();
    for ((&id, &x), &y) in ids.iter().zip(xs).zip(ys) {
        let p = Point::new(x, y);
        match sets.iter_mut().find(|s| s.id == id) {
            Some(set) => set.points.push(p),
            None => sets.push(PointSet {
                id,
                points: vec![p],
            }),
        }
    }
    sets
}

/// Flatten point sets into a `set, x, y` frame.
pub fn frame_from_point_sets(sets: &[PointSet]) -> Result<DataFrame> {
    let (mut ids, mut xs, mut ys) = (Vec::new(), Vec::new(), Vec::new());
    for s in sets {
        for p in &s.points {
            ids.push(s.id);
            xs.push(p.x);
            ys.push(p.y);
        }
    }
    Ok(df!("set" => ids, "x" => xs, "y" => ys)?)
}
