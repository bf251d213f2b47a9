//! Dense distance matrix
//!
//! Row-major `n × n` storage returned by every reconstruction strategy.

use std::ops::Index;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::core::error::{Error, Result};

/// A dense n×n distance matrix stored in row-major order
///
/// Serializes as a list of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a zero matrix of the given dimension
    pub fn zeros(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Copies a square nested-row payload without any interpretation
    ///
    /// Fails with [`Error::MalformedInput`] if any row length differs from the number of rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(Error::MalformedInput(format!(
                    "full matrix row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(Self { data, size })
    }

    /// Number of nodes
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Distance from node `from` to node `to`
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.size && to < self.size, "index ({from}, {to}) out of bounds for size {}", self.size);
        self.data[from * self.size + to]
    }

    /// Writes `distance` to both `(i, j)` and `(j, i)`
    pub(crate) fn set_symmetric(&mut self, i: usize, j: usize, distance: f64) {
        self.data[i * self.size + j] = distance;
        self.data[j * self.size + i] = distance;
    }

    /// Applies `f` to every entry in place
    pub(crate) fn map_in_place(&mut self, f: impl Fn(f64) -> f64) {
        for value in &mut self.data {
            *value = f(*value);
        }
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // chunks_exact(0) panics; an empty matrix has no data anyway
        self.data.chunks_exact(self.size.max(1))
    }

    /// Returns `true` if `M[i][j] == M[j][i]` for every pair (exact comparison)
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Returns `true` if every self-distance is zero
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.size).all(|i| self.get(i, i) == 0.0)
    }

    /// Converts into nested rows
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = f64;

    fn index(&self, (from, to): (usize, usize)) -> &f64 {
        assert!(from < self.size && to < self.size, "index ({from}, {to}) out of bounds for size {}", self.size);
        &self.data[from * self.size + to]
    }
}

impl Serialize for DistanceMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.size))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
