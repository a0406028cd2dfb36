//! A minimal column table over Candle tensors with a pandas-style rendering.

use anyhow::Result;
use candle_core::{Device, Tensor};

/// A fixed set of named integer columns of equal length, implicitly
/// row-indexed from 0. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Frame {
    columns: Vec<(String, Tensor)>,
    rows: usize,
}

impl Frame {
    /// Build a frame from `(name, values)` pairs, materializing each column
    /// as a 1-D `I64` tensor on `device`.
    ///
    /// Fails if column lengths differ, a name repeats, or a name is empty.
    pub fn from_columns(cols: &[(&str, &[i64])], device: &Device) -> Result<Self> {
        let rows = cols.first().map(|(_, v)| v.len()).unwrap_or(0);
        let mut columns = Vec::with_capacity(cols.len());
        for (name, values) in cols {
            anyhow::ensure!(!name.is_empty(), "column name must not be empty");
            anyhow::ensure!(
                columns.iter().all(|(n, _)| n != name),
                "duplicate column name: {name}"
            );
            anyhow::ensure!(
                values.len() == rows,
                "column {name} has {} rows, expected {rows}",
                values.len()
            );
            let t = Tensor::from_slice(values, values.len(), device)?;
            columns.push((name.to_string(), t));
        }
        Ok(Self { columns, rows })
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Column tensor by name, if present.
    pub fn column(&self, name: &str) -> Option<&Tensor> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t)
    }

    /// Pandas-default rendering: a header line with a blank cell over the
    /// index column, then one line per row starting with the 0-based index.
    /// Cells are right-aligned to the widest entry of their column and
    /// separated by two spaces. No trailing newline.
    pub fn render(&self) -> Result<String> {
        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|(_, t)| {
                Ok(t.to_vec1::<i64>()?
                    .iter()
                    .map(|v| v.to_string())
                    .collect())
            })
            .collect::<Result<_>>()?;

        let idx_width = self
            .rows
            .checked_sub(1)
            .map(|last| last.to_string().len())
            .unwrap_or(0);
        let col_widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&cells)
            .map(|((name, _), col)| {
                col.iter()
                    .map(String::len)
                    .max()
                    .unwrap_or(0)
                    .max(name.len())
            })
            .collect();

        let mut lines = Vec::with_capacity(self.rows + 1);
        let mut header = " ".repeat(idx_width);
        for ((name, _), &w) in self.columns.iter().zip(&col_widths) {
            header.push_str("  ");
            header.push_str(&format!("{name:>w$}"));
        }
        lines.push(header);
        for r in 0..self.rows {
            let mut line = format!("{r:>idx_width$}");
            for (col, &w) in cells.iter().zip(&col_widths) {
                line.push_str("  ");
                line.push_str(&format!("{:>w$}", col[r]));
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }
}
