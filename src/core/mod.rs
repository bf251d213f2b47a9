//! Core library modules for vrplib-distances
//!
//! Pure, stateless reconstruction of dense distance matrices.

pub mod error;
pub mod euclidean;
pub mod matrix;
pub mod resolver;
pub mod spec;
pub mod triangular;

// Re-export main types for internal use
pub use error::{Error, Result};
pub use matrix::DistanceMatrix;
pub use resolver::resolve;
pub use spec::{EdgeWeightFormat, EdgeWeightSpec, EdgeWeightType, Strategy};
