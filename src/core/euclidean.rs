//! Euclidean distances from 2D node coordinates

use crate::core::matrix::DistanceMatrix;

/// Post-processing applied to raw Euclidean distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// `EUC_2D`: raw distances
    None,
    /// `FLOOR_2D`: rounded toward negative infinity
    Floor,
    /// `EXACT_2D`: scaled by 1000, rounded half to even
    Exact,
}

impl Rounding {
    pub fn apply(self, distance: f64) -> f64 {
        match self {
            Rounding::None => distance,
            Rounding::Floor => distance.floor(),
            Rounding::Exact => (distance * 1000.0).round_ties_even(),
        }
    }
}

/// Computes the pairwise Euclidean distances between the given coordinates
///
/// Each unordered pair is computed once and mirrored; the diagonal stays zero.
pub fn pairwise_euclidean(coords: &[[f64; 2]]) -> DistanceMatrix {
    let n = coords.len();
    let mut distances = DistanceMatrix::zeros(n);

    for i in 0..n {
        for j in (i + 1)..n {
            let dx = coords[i][0] - coords[j][0];
            let dy = coords[i][1] - coords[j][1];
            distances.set_symmetric(i, j, (dx * dx + dy * dy).sqrt());
        }
    }

    distances
}

/// Pairwise distances followed by the type's post-processing
pub fn euclidean_distances(coords: &[[f64; 2]], rounding: Rounding) -> DistanceMatrix {
    let mut distances = pairwise_euclidean(coords);
    if rounding != Rounding::None {
        distances.map_in_place(|d| rounding.apply(d));
    }
    distances
}
