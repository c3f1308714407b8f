//! Error types for the sounding-indices crate.
use crate::keys::IndexKey;
use metfor::{HectoPascal, Quantity};
use std::{error::Error, fmt::Display};

/// Error type for the crate.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisError {
    /// A field (surface value, pass-through value, etc) that is required is not available or is
    /// not numeric.
    MissingField(String),
    /// A pressure level required for the analysis was not present in the profile.
    MissingLevel(HectoPascal),
    /// Not enough data available for analysis.
    NotEnoughData,
    /// A calculation produced a NaN or infinite value.
    NonFiniteValue(IndexKey),
    /// Bad or invalid input.
    InvalidInput,
}

impl Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::AnalysisError::*;

        match self {
            MissingField(key) => write!(f, "missing value required for analysis: {}", key),
            MissingLevel(p) => write!(f, "missing {:.0} hPa level required for analysis", p.unpack()),
            NotEnoughData => write!(f, "not enough data available for analysis"),
            NonFiniteValue(key) => write!(f, "calculation of {} was not finite", key),
            InvalidInput => write!(f, "invalid input"),
        }
    }
}

impl Error for AnalysisError {}

/// Shorthand for results.
pub type Result<T> = std::result::Result<T, AnalysisError>;
