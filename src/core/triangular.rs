//! Expansion of compact lower-triangular tables (no diagonal)
//!
//! Two readings of the same payload exist in the wild:
//!
//! - **Row-major** (`LOWER_ROW` as specified): row `k` lists the distances from node
//!   `k + 1` to nodes `0..=k`.
//! - **Eilon**: the Eilon instances are labelled `LOWER_ROW` but their values follow
//!   the pairs `(i, j)`, `i < j`, in lexicographic order, i.e. the lower triangle read
//!   column by column. Row boundaries in the payload carry no meaning there.

use crate::core::error::{Error, Result};
use crate::core::matrix::DistanceMatrix;

/// Expands ragged lower-triangular rows into the full symmetric matrix
///
/// A payload of `n - 1` rows yields an `n × n` matrix; row `k` must hold exactly
/// `k + 1` entries.
pub fn from_lower_row(triangular: &[Vec<f64>]) -> Result<DistanceMatrix> {
    for (k, row) in triangular.iter().enumerate() {
        if row.len() != k + 1 {
            return Err(Error::MalformedInput(format!(
                "lower-row entry {k} has {} values, expected {}",
                row.len(),
                k + 1
            )));
        }
    }

    let n = triangular.len() + 1;
    let mut distances = DistanceMatrix::zeros(n);

    for i in 1..n {
        for (j, &d) in triangular[i - 1].iter().enumerate() {
            distances.set_symmetric(i, j, d);
        }
    }

    Ok(distances)
}

/// Expands an Eilon-style payload, read as a flattened column-wise lower triangle
///
/// The dimension is derived from the number of values alone; a count that is not a
/// triangular number is rejected with [`Error::MalformedInput`].
pub fn from_eilon(edge_weights: &[Vec<f64>]) -> Result<DistanceMatrix> {
    let flattened: Vec<f64> = edge_weights.iter().flatten().copied().collect();

    let n = triangular_dimension(flattened.len()).ok_or_else(|| {
        Error::MalformedInput(format!(
            "{} edge weights do not form a lower triangle of any matrix",
            flattened.len()
        ))
    })?;

    let mut distances = DistanceMatrix::zeros(n);
    let mut values = flattened.into_iter();

    // (i, j) with i < j in lexicographic order
    for i in 0..n {
        for j in (i + 1)..n {
            if let Some(d) = values.next() {
                distances.set_symmetric(i, j, d);
            }
        }
    }

    Ok(distances)
}

/// Checks whether `n` is of the form `k(k+1)/2`
pub fn is_triangular_number(n: usize) -> bool {
    let Some(twice) = n.checked_mul(2) else {
        return false;
    };
    let i = isqrt(twice);
    i.checked_mul(i + 1) == Some(twice)
}

/// Matrix dimension whose strict lower triangle holds `len` values
///
/// `len = n(n-1)/2` gives `n`; `None` when `len` is not triangular.
pub fn triangular_dimension(len: usize) -> Option<usize> {
    if is_triangular_number(len) {
        Some(isqrt(2 * len) + 1)
    } else {
        None
    }
}

/// Integer square root, seeded by the float estimate and corrected exactly
fn isqrt(value: usize) -> usize {
    let mut root = (value as f64).sqrt() as usize;
    while root.checked_mul(root).map_or(true, |sq| sq > value) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= value) {
        root += 1;
    }
    root
}
