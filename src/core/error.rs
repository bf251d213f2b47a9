//! Error types for vrplib-distances
//!
//! Provides the library error enum and fuzzy matching for misspelled edge weight tags.

use strsim::{jaro_winkler, normalized_levenshtein};
use thiserror::Error;

/// Minimum blended similarity for a tag suggestion to be offered.
///
/// Tags are short upper-case identifiers, so the bar sits higher than for free text:
/// "EUC2D" (0.92 against "EUC_2D") passes, "BOGUS" (< 0.4 against every tag) does not.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Main error type for distance reconstruction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Unknown or unsupported `EDGE_WEIGHT_TYPE` / `EDGE_WEIGHT_FORMAT` combination
    #[error("Unsupported {field} '{value}'{}", suggestion_hint(.suggestion))]
    UnsupportedSpec {
        /// Which tag was rejected
        field: &'static str,
        /// The rejected value as supplied by the caller
        value: String,
        /// Closest valid value, when the input looks like a typo
        suggestion: Option<String>,
    },

    /// Auxiliary input required by the selected edge weight type is absent
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// Payload shape is inconsistent with any valid matrix dimension
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl Error {
    /// Rejects an edge weight type, attaching a suggestion when one is close enough
    pub fn unsupported_type(value: &str, candidates: &[&str]) -> Self {
        Error::UnsupportedSpec {
            field: "EDGE_WEIGHT_TYPE",
            value: value.to_string(),
            suggestion: suggest_correction(value, candidates),
        }
    }

    /// Rejects an edge weight format; a missing format is reported as `(none)`
    pub fn unsupported_format(value: Option<&str>, candidates: &[&str]) -> Self {
        Error::UnsupportedSpec {
            field: "EDGE_WEIGHT_FORMAT",
            value: value.unwrap_or("(none)").to_string(),
            suggestion: value.and_then(|v| suggest_correction(v, candidates)),
        }
    }
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(", did you mean '{s}'?"),
        None => String::new(),
    }
}

/// Find the best fuzzy match using Jaro-Winkler (70%) blended with normalized Levenshtein (30%)
///
/// Comparison is case-insensitive and ignores `_`/`-` separators for the prefix bonus,
/// since the common slips on tags are dropped underscores ("EUC2D") and lower case.
fn find_best_fuzzy_match<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let input_upper = input.trim().to_uppercase();
    let input_compact: String = input_upper.chars().filter(|c| c.is_ascii_alphanumeric()).collect();

    let mut best_match = None;
    let mut best_score = 0.0f64;

    for &candidate in candidates {
        let jw_score = jaro_winkler(&input_upper, candidate);
        let lev_score = normalized_levenshtein(&input_upper, candidate);
        let mut score = (jw_score * 0.7) + (lev_score * 0.3);

        // Separator-only differences ("EUC2D", "FULL-MATRIX") are as good as exact
        let candidate_compact: String = candidate.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        if !input_compact.is_empty() && input_compact == candidate_compact {
            score = score.max(0.99);
        }

        if score >= SUGGESTION_THRESHOLD && score > best_score {
            best_score = score;
            best_match = Some(candidate);
        }
    }

    best_match
}

/// Suggest a correction for a potentially misspelled tag
///
/// Returns `None` when the input already is one of the candidates or nothing is close.
pub fn suggest_correction(input: &str, candidates: &[&str]) -> Option<String> {
    if candidates.contains(&input) {
        return None;
    }

    find_best_fuzzy_match(input, candidates).map(str::to_string)
}

/// Convenience result type for distance reconstruction
pub type Result<T> = std::result::Result<T, Error>;
