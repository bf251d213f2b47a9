//! CLI-specific utilities for vrplib-distances
//!
//! Document loading and matrix writing live here so the library stays free of I/O.

pub mod input;
pub mod output;

pub use input::EdgeWeightDocument;
pub use output::{resolve_output, write_to, OutputDestination, OutputFormat};
