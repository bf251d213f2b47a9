//! Edge weight header tags
//!
//! Typed counterparts of the `EDGE_WEIGHT_TYPE` and `EDGE_WEIGHT_FORMAT` instance
//! headers, and the strategy they select.

use std::fmt;
use std::str::FromStr;

use crate::core::error::{Error, Result};
use crate::core::euclidean::Rounding;

/// Comment marker of the Eilon instances, whose `LOWER_ROW` section is column-wise
const EILON_MARKER: &str = "Eilon";

/// Supported `EDGE_WEIGHT_TYPE` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeWeightType {
    Euc2d,
    Floor2d,
    Exact2d,
    Explicit,
}

impl EdgeWeightType {
    pub const ALL: [EdgeWeightType; 4] = [
        EdgeWeightType::Euc2d,
        EdgeWeightType::Floor2d,
        EdgeWeightType::Exact2d,
        EdgeWeightType::Explicit,
    ];

    /// Tag as written in instance files
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeWeightType::Euc2d => "EUC_2D",
            EdgeWeightType::Floor2d => "FLOOR_2D",
            EdgeWeightType::Exact2d => "EXACT_2D",
            EdgeWeightType::Explicit => "EXPLICIT",
        }
    }

    /// Post-processing for the coordinate-based types, `None` for `EXPLICIT`
    pub fn rounding(self) -> Option<Rounding> {
        match self {
            EdgeWeightType::Euc2d => Some(Rounding::None),
            EdgeWeightType::Floor2d => Some(Rounding::Floor),
            EdgeWeightType::Exact2d => Some(Rounding::Exact),
            EdgeWeightType::Explicit => None,
        }
    }

    fn tags() -> [&'static str; 4] {
        Self::ALL.map(Self::as_str)
    }
}

impl FromStr for EdgeWeightType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::unsupported_type(s, &Self::tags()))
    }
}

impl fmt::Display for EdgeWeightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported `EDGE_WEIGHT_FORMAT` values for `EXPLICIT` instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeWeightFormat {
    LowerRow,
    FullMatrix,
}

impl EdgeWeightFormat {
    pub const ALL: [EdgeWeightFormat; 2] = [EdgeWeightFormat::LowerRow, EdgeWeightFormat::FullMatrix];

    /// Tag as written in instance files
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeWeightFormat::LowerRow => "LOWER_ROW",
            EdgeWeightFormat::FullMatrix => "FULL_MATRIX",
        }
    }

    fn tags() -> [&'static str; 2] {
        Self::ALL.map(Self::as_str)
    }
}

impl FromStr for EdgeWeightFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| Error::unsupported_format(Some(s), &Self::tags()))
    }
}

impl fmt::Display for EdgeWeightFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reconstruction strategy selected by an [`EdgeWeightSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Pairwise distances from node coordinates, then post-processing
    Euclidean(Rounding),
    /// Payload already is the dense matrix
    FullMatrix,
    /// Row-major lower triangle without diagonal
    LowerRow,
    /// Lower triangle stored column-wise but labelled `LOWER_ROW`
    EilonLowerRow,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Euclidean(Rounding::None) => write!(f, "euclidean"),
            Strategy::Euclidean(Rounding::Floor) => write!(f, "euclidean (floored)"),
            Strategy::Euclidean(Rounding::Exact) => write!(f, "euclidean (x1000, rounded)"),
            Strategy::FullMatrix => write!(f, "full matrix passthrough"),
            Strategy::LowerRow => write!(f, "lower-row expansion"),
            Strategy::EilonLowerRow => write!(f, "Eilon column-wise expansion"),
        }
    }
}

/// The edge weight tags of one instance plus its free-text comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeWeightSpec {
    pub edge_weight_type: EdgeWeightType,
    pub edge_weight_format: Option<EdgeWeightFormat>,
    pub comment: Option<String>,
}

impl EdgeWeightSpec {
    pub fn new(edge_weight_type: EdgeWeightType) -> Self {
        Self {
            edge_weight_type,
            edge_weight_format: None,
            comment: None,
        }
    }

    pub fn with_format(mut self, format: EdgeWeightFormat) -> Self {
        self.edge_weight_format = Some(format);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Builds a spec from raw header values
    ///
    /// The format is only interpreted for `EXPLICIT`; coordinate-based types ignore it,
    /// whatever its value.
    pub fn parse(edge_weight_type: &str, edge_weight_format: Option<&str>, comment: Option<&str>) -> Result<Self> {
        let edge_weight_type: EdgeWeightType = edge_weight_type.parse()?;

        let edge_weight_format = match edge_weight_type {
            EdgeWeightType::Explicit => match edge_weight_format {
                Some(format) => Some(format.parse()?),
                None => return Err(Error::unsupported_format(None, &EdgeWeightFormat::tags())),
            },
            EdgeWeightType::Euc2d | EdgeWeightType::Floor2d | EdgeWeightType::Exact2d => None,
        };

        Ok(Self {
            edge_weight_type,
            edge_weight_format,
            comment: comment.map(str::to_string),
        })
    }

    /// Whether the comment marks an Eilon instance
    pub fn is_eilon(&self) -> bool {
        self.comment
            .as_deref()
            .is_some_and(|comment| comment.contains(EILON_MARKER))
    }

    /// Selects the reconstruction strategy without touching any payload
    pub fn strategy(&self) -> Result<Strategy> {
        if let Some(rounding) = self.edge_weight_type.rounding() {
            return Ok(Strategy::Euclidean(rounding));
        }

        match self.edge_weight_format {
            Some(EdgeWeightFormat::FullMatrix) => Ok(Strategy::FullMatrix),
            Some(EdgeWeightFormat::LowerRow) if self.is_eilon() => Ok(Strategy::EilonLowerRow),
            Some(EdgeWeightFormat::LowerRow) => Ok(Strategy::LowerRow),
            None => Err(Error::unsupported_format(None, &EdgeWeightFormat::tags())),
        }
    }
}
