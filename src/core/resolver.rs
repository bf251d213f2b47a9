//! Edge weight resolution
//!
//! Dispatches an [`EdgeWeightSpec`] to the matching reconstruction strategy.

use crate::core::error::{Error, Result};
use crate::core::euclidean::euclidean_distances;
use crate::core::matrix::DistanceMatrix;
use crate::core::spec::{EdgeWeightSpec, Strategy};
use crate::core::triangular::{from_eilon, from_lower_row};

/// Builds the dense distance matrix described by `spec`
///
/// `data` is the edge weight section (ignored for coordinate-based types) and
/// `node_coord` the node coordinates (ignored for `EXPLICIT`).
pub fn resolve(data: &[Vec<f64>], spec: &EdgeWeightSpec, node_coord: Option<&[[f64; 2]]>) -> Result<DistanceMatrix> {
    match spec.strategy()? {
        Strategy::Euclidean(rounding) => {
            let coords = node_coord.ok_or_else(|| {
                Error::MissingInput(format!(
                    "node coordinates are required for EDGE_WEIGHT_TYPE {}",
                    spec.edge_weight_type
                ))
            })?;
            Ok(euclidean_distances(coords, rounding))
        }
        Strategy::FullMatrix => DistanceMatrix::from_rows(data),
        Strategy::LowerRow => from_lower_row(data),
        Strategy::EilonLowerRow => from_eilon(data),
    }
}
