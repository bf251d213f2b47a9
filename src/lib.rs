//! # vrplib-distances
//!
//! Reconstructs the dense, symmetric distance matrix of a Vehicle Routing Problem
//! instance from its VRPLIB edge weight section.
//!
//! ## Supported encodings
//!
//! | `EDGE_WEIGHT_TYPE` | `EDGE_WEIGHT_FORMAT` | Source                                   |
//! |--------------------|----------------------|------------------------------------------|
//! | `EUC_2D`           | ignored              | node coordinates, raw distances          |
//! | `FLOOR_2D`         | ignored              | node coordinates, floored                |
//! | `EXACT_2D`         | ignored              | node coordinates, ×1000 and rounded      |
//! | `EXPLICIT`         | `FULL_MATRIX`        | payload used as is                       |
//! | `EXPLICIT`         | `LOWER_ROW`          | lower triangle without diagonal          |
//!
//! Instances whose comment mentions `Eilon` store their `LOWER_ROW` section column-wise
//! despite the label; they are expanded in that order instead.
//!
//! ## Basic Usage
//!
//! ```rust
//! use vrplib_distances::parse_distances;
//!
//! let coords = [[0.0, 0.0], [3.0, 4.0]];
//! let matrix = parse_distances(&[], "EUC_2D", None, Some(&coords[..]), None)?;
//! assert_eq!(matrix.get(0, 1), 5.0);
//!
//! let lower_row = vec![vec![1.0], vec![2.0, 3.0]];
//! let matrix = parse_distances(&lower_row, "EXPLICIT", Some("LOWER_ROW"), None, None)?;
//! assert_eq!(matrix.get(1, 2), 3.0);
//! # Ok::<(), vrplib_distances::Error>(())
//! ```
//!
//! ## Typed API
//!
//! ```rust
//! use vrplib_distances::{resolve, EdgeWeightFormat, EdgeWeightSpec, EdgeWeightType, Strategy};
//!
//! let spec = EdgeWeightSpec::new(EdgeWeightType::Explicit)
//!     .with_format(EdgeWeightFormat::LowerRow)
//!     .with_comment("Eilon et al.");
//! assert_eq!(spec.strategy()?, Strategy::EilonLowerRow);
//!
//! let matrix = resolve(&[vec![1.0, 2.0, 3.0]], &spec, None)?;
//! assert_eq!(matrix.size(), 3);
//! # Ok::<(), vrplib_distances::Error>(())
//! ```

// Re-export core types that users might need
pub use crate::core::{resolve, DistanceMatrix, EdgeWeightFormat, EdgeWeightSpec, EdgeWeightType, Error, Result, Strategy};
pub use crate::core::error::suggest_correction;
pub use crate::core::euclidean::{euclidean_distances, pairwise_euclidean, Rounding};
pub use crate::core::triangular::{from_eilon, from_lower_row, is_triangular_number, triangular_dimension};

// Internal modules
mod core;

/// Parse the distances of an instance from its raw header values
///
/// # Arguments
/// * `data` - The edge weight section as nested rows (unused for coordinate-based types)
/// * `edge_weight_type` - `EUC_2D`, `FLOOR_2D`, `EXACT_2D` or `EXPLICIT`
/// * `edge_weight_format` - `LOWER_ROW` or `FULL_MATRIX`, required for `EXPLICIT`
/// * `node_coord` - Node coordinates, required for the coordinate-based types
/// * `comment` - The instance comment, used to recognise Eilon instances
///
/// # Errors
/// * [`Error::UnsupportedSpec`] for unknown types or formats
/// * [`Error::MissingInput`] when coordinates are needed but absent
/// * [`Error::MalformedInput`] when the payload does not describe an n×n matrix
pub fn parse_distances(
    data: &[Vec<f64>],
    edge_weight_type: &str,
    edge_weight_format: Option<&str>,
    node_coord: Option<&[[f64; 2]]>,
    comment: Option<&str>,
) -> Result<DistanceMatrix> {
    let spec = EdgeWeightSpec::parse(edge_weight_type, edge_weight_format, comment)?;
    resolve(data, &spec, node_coord)
}
