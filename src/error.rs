//! Errors that may rise while parsing or exploiting an [OEM](crate::OEM)
use hifitime::Epoch;
use thiserror::Error;

use crate::keys::Keyword;

/// Errors returned by the Time & Frame service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("unknown or non supported time system \"{0}\"")]
    UnknownTimeScale(String),
    #[error("unknown or non supported reference frame \"{0}\"")]
    UnknownFrame(String),
    #[error("invalid epoch \"{0}\"")]
    InvalidEpoch(String),
}

/// Detail of a structurally invalid line
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParsingError {
    #[error("missing mandatory {0} keyword")]
    MissingKeyword(Keyword),
    #[error("{0} is defined twice in this block")]
    DuplicateKeyword(Keyword),
    #[error("{0} is not expected here")]
    UnexpectedKeyword(String),
    #[error("empty value for {0}")]
    EmptyValue(Keyword),
    #[error("failed to parse interpolation degree from \"{0}\"")]
    InterpolationDegree(String),
    #[error("failed to parse coordinates from \"{0}\"")]
    Coordinates(String),
    #[error("failed to parse covariance term from \"{0}\"")]
    CovarianceTerm(String),
    #[error("covariance matrix should have 21 terms, got {0}")]
    CovarianceSize(usize),
    #[error("covariance terms are not preceded by an EPOCH")]
    CovarianceEpoch,
    #[error("ephemeris line should have 7 or 10 fields, got {0}")]
    DataFields(usize),
    #[error("acceleration should be provided on every line of a segment, or none")]
    DerivativesMismatch,
    #[error("epochs are not strictly increasing")]
    NonMonotonicEpoch,
    #[error("epoch lies outside of START_TIME / STOP_TIME")]
    OutsideDeclaredSpan,
    #[error("STOP_TIME precedes START_TIME")]
    InvalidSpan,
    #[error("useable window is not covered by START_TIME / STOP_TIME and the ephemeris data")]
    UseableWindow,
    #[error("ephemeris data found outside of a data block")]
    DataOutsideBlock,
    #[error("segment does not contain any ephemeris data")]
    EmptySegment,
    #[error("block is not terminated")]
    UnterminatedBlock,
    #[error("file does not contain any segment")]
    NoSegment,
    #[error("gravitational parameter of \"{0}\" is unknown")]
    UnknownMu(String),
    #[error("time & frame service error")]
    Service(#[from] ServiceError),
}

/// [OEM](crate::OEM) parsing and exploitation errors
#[derive(Debug, Error)]
pub enum Error {
    /// Structurally invalid line. Fatal to the whole parsing process.
    #[error("line {line_number}: {detail} (\"{content}\")")]
    Validation {
        /// 1-based line number
        line_number: usize,
        /// Line content, after correction
        content: String,
        detail: ParsingError,
    },
    /// Requested satellite is not described by this file
    #[error("unknown satellite \"{0}\"")]
    Lookup(String),
    /// Epoch lies outside of the interpolation range
    #[error("{epoch} is outside of [{start} ; {stop}]")]
    OutOfBounds {
        epoch: Epoch,
        start: Epoch,
        stop: Epoch,
    },
    /// Cartesian to geodetic conversion has no foot-point
    #[error("no geodetic foot-point for this position")]
    DegenerateGeometry,
    #[error("time & frame service error")]
    Service(#[from] ServiceError),
    #[error("file i/o error")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns line number for errors that are tied to a line
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::Validation { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }
}
