//! Edge-list files for the CLI.
//!
//! - JSON: `[[[ax, ay], [bx, by]], ...]`, the same nesting the web app uses for
//!   `Edge = [Point, Point]`.
//! - CSV: header `ax,ay,bx,by`, one edge per row. Read through polars with all
//!   four columns declared f64 up front, so integer cells parse as floats
//!   wherever they appear in the file.
//!
//! The format is picked from the file extension.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::sync::Arc;
use std::path::Path;
use visualaiz::geom2::{Edge, Point};

/// One JSON edge: `[[ax, ay], [bx, by]]` (newtype serializes as the bare array).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeRow(pub [[f64; 2]; 2]);

const CSV_COLUMNS: [&str; 4] = ["ax", "ay", "bx", "by"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(Format::Json),
            Some("csv") => Ok(Format::Csv),
            _ => bail!(
                "unsupported edge file {} (expected .json or .csv)",
                path.display()
            ),
        }
    }
}

pub fn edge_from_row(row: EdgeRow) -> Edge {
    let EdgeRow([[ax, ay], [bx, by]]) = row;
    Edge::new(Point::new(ax, ay), Point::new(bx, by))
}

pub fn edge_to_row(edge: &Edge) -> EdgeRow {
    EdgeRow([[edge.a.x, edge.a.y], [edge.b.x, edge.b.y]])
}

fn csv_schema() -> SchemaRef {
    let fields = CSV_COLUMNS
        .iter()
        .map(|name| Field::new((*name).into(), DataType::Float64));
    Arc::new(Schema::from_iter(fields))
}

pub fn read_edges(path: &Path) -> Result<Vec<Edge>> {
    match Format::from_path(path)? {
        Format::Json => read_json(path),
        Format::Csv => read_csv(path),
    }
}

pub fn write_edges(path: &Path, edges: &[Edge]) -> Result<()> {
    let format = Format::from_path(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    match format {
        Format::Json => write_json(path, edges),
        Format::Csv => write_csv(path, edges),
    }
}

fn read_json(path: &Path) -> Result<Vec<Edge>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let rows: Vec<EdgeRow> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing edge list {}", path.display()))?;
    Ok(rows.into_iter().map(edge_from_row).collect())
}

fn write_json(path: &Path, edges: &[Edge]) -> Result<()> {
    let rows: Vec<EdgeRow> = edges.iter().map(edge_to_row).collect();
    fs::write(path, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn read_csv(path: &Path) -> Result<Vec<Edge>> {
    let df = LazyCsvReader::new(path)
        .with_dtype_overwrite(Some(csv_schema()))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let mut cols: Vec<Vec<f64>> = Vec::with_capacity(CSV_COLUMNS.len());
    for name in CSV_COLUMNS {
        let values = df
            .column(name)
            .with_context(|| format!("{}: missing column `{name}`", path.display()))?
            .f64()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| {
                v.with_context(|| format!("{}: empty `{name}` in row {row}", path.display()))
            })
            .collect::<Result<Vec<f64>>>()?;
        cols.push(values);
    }
    let edges = (0..df.height())
        .map(|i| edge_from_row(EdgeRow([[cols[0][i], cols[1][i]], [cols[2][i], cols[3][i]]])))
        .collect();
    Ok(edges)
}

fn write_csv(path: &Path, edges: &[Edge]) -> Result<()> {
    let column = |f: fn(&Edge) -> f64| edges.iter().map(f).collect::<Vec<f64>>();
    let mut df = df!(
        "ax" => column(|e| e.a.x),
        "ay" => column(|e| e.a.y),
        "bx" => column(|e| e.b.x),
        "by" => column(|e| e.b.y)
    )?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Vec<Edge> {
        vec![
            Edge::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
            Edge::new(Point::new(2.5, -3.0), Point::new(0.25, 7.0)),
        ]
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a/b.json")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("b.CSV")).unwrap(), Format::Csv);
        assert!(Format::from_path(Path::new("b.parquet")).is_err());
        assert!(Format::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn json_uses_nested_point_arrays() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("in.json");
        fs::write(&path, "[[[0,0],[1,1]],[[1,1],[0,0]]]").unwrap();
        let edges = read_edges(&path).unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[1], edges[0].reversed());

        let out = dir.path().join("nested/out.json");
        write_edges(&out, &sample()).unwrap();
        assert_eq!(read_edges(&out).unwrap(), sample());
    }

    #[test]
    fn csv_reads_integer_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(&path, "ax,ay,bx,by\n0,0,1,1\n2,2,3,3\n").unwrap();
        let edges = read_edges(&path).unwrap();
        assert_eq!(
            edges,
            vec![
                Edge::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
                Edge::new(Point::new(2.0, 2.0), Point::new(3.0, 3.0)),
            ]
        );
    }

    #[test]
    fn csv_decimal_row_after_long_integer_prefix() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("in.csv");
        let mut text = String::from("ax,ay,bx,by\n");
        for i in 0..150 {
            text.push_str(&format!("{i},0,1,1\n"));
        }
        text.push_str("0.5,0.25,1,1\n");
        fs::write(&path, text).unwrap();
        let edges = read_edges(&path).unwrap();
        assert_eq!(edges.len(), 151);
        assert_eq!(edges[149], Edge::new(Point::new(149.0, 0.0), Point::new(1.0, 1.0)));
        assert_eq!(edges[150], Edge::new(Point::new(0.5, 0.25), Point::new(1.0, 1.0)));
    }

    #[test]
    fn json_row_is_a_bare_nested_array() {
        let row = edge_to_row(&Edge::new(Point::new(1.5, -2.0), Point::new(0.0, 3.0)));
        assert_eq!(serde_json::to_string(&row).unwrap(), "[[1.5,-2.0],[0.0,3.0]]");
        let back: EdgeRow = serde_json::from_str("[[1.5,-2],[0,3]]").unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn csv_write_then_read_keeps_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_edges(&path, &sample()).unwrap();
        assert_eq!(read_edges(&path).unwrap(), sample());
    }

    #[test]
    fn csv_missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "ax,ay,bx\n0,0,1\n").unwrap();
        assert!(read_edges(&path).is_err());
    }
}
