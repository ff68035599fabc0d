//! Error types for setup loading and grid construction.
//!
//! The profile evaluator itself is infallible: pathological parameters turn
//! into NaN/Inf values that [`crate::check_finite`] can detect afterwards.

use std::path::PathBuf;

use thiserror::Error;

use crate::fields::Field;

/// Errors raised while reading or validating a setup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Parameter file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `.par` line could not be parsed.
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    /// JSON setup could not be decoded.
    #[error("Invalid JSON setup: {0}")]
    Json(#[from] serde_json::Error),

    /// A parameter holds a value the profiles cannot use.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A parameter required by the selected profile is absent.
    #[error("Missing parameter {0}")]
    MissingParameter(&'static str),

    /// Power-law and ring parameter groups were both given.
    #[error("Conflicting parameter groups: {0}")]
    Conflict(String),

    /// Profile name not recognised.
    #[error("Unknown profile '{0}'")]
    UnknownProfile(String),

    /// Equation of state name not recognised.
    #[error("Unknown equation of state '{0}'")]
    UnknownEquationOfState(String),

    /// Initial-condition triple with no matching profile.
    #[error("Unsupported initial condition ({density}, {vx}, {vy})")]
    UnsupportedInitialCondition {
        density: String,
        vx: String,
        vy: String,
    },

    /// Grid construction failed.
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl ConfigError {
    /// Create an invalid-parameter error.
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Errors raised while building a radial grid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Zero active cells along an axis.
    #[error("Grid needs at least one active cell along {0}")]
    Empty(&'static str),

    /// Radial extent is not a positive, increasing interval.
    #[error("Invalid radial extent [{ymin}, {ymax}]")]
    InvalidExtent { ymin: f64, ymax: f64 },

    /// Azimuthal extent is empty, inverted or not finite.
    #[error("Invalid azimuthal extent [{xmin}, {xmax}]")]
    InvalidAzimuth { xmin: f64, xmax: f64 },

    /// Ghost cells would place a cell centre at or below r = 0.
    #[error("Ghost row {row} reaches r = {radius}, radii must stay positive")]
    NonPositiveRadius { row: usize, radius: f64 },
}

/// A cell holding NaN or Inf after initialisation.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field:?} is not finite at (i={i}, j={j}): {value}")]
pub struct NonFiniteField {
    pub field: Field,
    pub i: usize,
    pub j: usize,
    pub value: f64,
}
