//! Edge weight document loading
//!
//! The CLI reads one JSON object per run, keyed by lowercase VRPLIB section names.
//! Fields other than the ones below are accepted and ignored.

use std::fs::File;
use std::io::{self, BufReader, Read};

use anyhow::{Context, Result};
use serde::Deserialize;
use vrplib_distances::{DistanceMatrix, EdgeWeightSpec, Strategy};

/// Raw edge weight inputs of one instance
#[derive(Debug, Deserialize)]
pub struct EdgeWeightDocument {
    #[serde(default)]
    pub name: Option<String>,
    pub edge_weight_type: String,
    #[serde(default)]
    pub edge_weight_format: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub node_coord: Option<Vec<[f64; 2]>>,
    #[serde(default)]
    pub edge_weight: Vec<Vec<f64>>,
}

impl EdgeWeightDocument {
    /// Load from a file path, or from stdin when `input` is `-`
    pub fn load(input: &str) -> Result<Self> {
        if input == "-" {
            Self::from_reader(io::stdin().lock()).context("Failed to read edge weights from stdin")
        } else {
            let file = File::open(input).with_context(|| format!("Failed to open {input}"))?;
            Self::from_reader(BufReader::new(file)).with_context(|| format!("Failed to read edge weights from {input}"))
        }
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Typed edge weight tags of this document
    pub fn spec(&self) -> vrplib_distances::Result<EdgeWeightSpec> {
        EdgeWeightSpec::parse(
            &self.edge_weight_type,
            self.edge_weight_format.as_deref(),
            self.comment.as_deref(),
        )
    }

    /// Dimension the selected strategy will produce, if the payload allows one
    pub fn expected_dimension(&self, strategy: Strategy) -> Option<usize> {
        match strategy {
            Strategy::Euclidean(_) => self.node_coord.as_ref().map(Vec::len),
            Strategy::FullMatrix => Some(self.edge_weight.len()),
            Strategy::LowerRow => Some(self.edge_weight.len() + 1),
            Strategy::EilonLowerRow => {
                let values = self.edge_weight.iter().map(Vec::len).sum();
                vrplib_distances::triangular_dimension(values)
            }
        }
    }

    pub fn resolve(&self) -> vrplib_distances::Result<DistanceMatrix> {
        let spec = self.spec()?;
        vrplib_distances::resolve(&self.edge_weight, &spec, self.node_coord.as_deref())
    }
}
