use anyhow::{bail, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Square adjacency matrix, rows and columns ordered by vertex index
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(into = "Vec<Vec<i64>>", try_from = "Vec<Vec<i64>>")]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<i64>>,
}

impl AdjacencyMatrix {
    /// Create an `n × n` matrix filled with zeros
    pub fn zeros(n: usize) -> Self {
        Self {
            rows: vec![vec![0; n]; n],
        }
    }

    /// Number of rows (equal to the number of columns)
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: i64) {
        self.rows[row][col] = value;
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<i64>> {
        self.rows
    }

    /// Check whether `[i][j] == [j][i]` for every cell
    pub fn is_symmetric(&self) -> bool {
        (0..self.size()).all(|i| (0..i).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

impl TryFrom<Vec<Vec<i64>>> for AdjacencyMatrix {
    type Error = Error;

    /// Rejects rows whose length differs from the row count
    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        let n = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            bail!("Matrix is not square: row {} has {} columns, expected {}", i, row.len(), n);
        }
        Ok(Self { rows })
    }
}

impl From<AdjacencyMatrix> for Vec<Vec<i64>> {
    fn from(matrix: AdjacencyMatrix) -> Self {
        matrix.rows
    }
}

/// Rows of space-separated integers, one row per line
impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
