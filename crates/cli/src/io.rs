//! Point-set files: CSV with header `x,y`.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use closestpair::Point;
use polars::prelude::*;

/// Read all rows of a CSV with integer columns `x` and `y`.
///
/// Columns must be inferred as integers; fractional or textual cells are
/// rejected naming the column. Null cells and values outside
/// `[-COORD_MAX, COORD_MAX]` are rejected with the offending row number
/// (0-based, header excluded).
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([col("x"), col("y")])
        .collect()
        .with_context(|| format!("reading columns x,y from {}", path.display()))?;

    let xs = integer_column(&df, "x")?;
    let ys = integer_column(&df, "y")?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in (&xs).into_iter().zip(&ys).enumerate() {
        let (Some(x), Some(y)) = (x, y) else {
            bail!("row {row}: missing coordinate");
        };
        let p = match (i32::try_from(x), i32::try_from(y)) {
            (Ok(x), Ok(y)) => Point::new(x, y),
            _ => bail!("row {row}: coordinate ({x}, {y}) does not fit in i32"),
        };
        if !p.in_range() {
            bail!(
                "row {row}: coordinate ({x}, {y}) exceeds ±{}",
                closestpair::COORD_MAX
            );
        }
        points.push(p);
    }
    Ok(points)
}

/// Widen an integer column to `i64`; any other inferred dtype is an error.
fn integer_column(df: &DataFrame, name: &str) -> Result<Int64Chunked> {
    let s = df.column(name)?;
    if !s.dtype().is_integer() {
        bail!("column {name}: expected integer coordinates, found {}", s.dtype());
    }
    let wide = s
        .strict_cast(&DataType::Int64)
        .with_context(|| format!("column {name}: widening to i64"))?;
    Ok(wide.i64()?.clone())
}

/// Write points as CSV with header `x,y`, creating parent directories.
pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let xs: Vec<i32> = points.iter().map(|p| p.x).collect();
    let ys: Vec<i32> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
