//! Equation of state mode.
//!
//! Decides what the fourth field slot holds: the sound speed itself
//! (isothermal) or the specific internal energy density (adiabatic).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Equation of state, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EquationOfState {
    /// The energy slot holds c_s.
    #[default]
    Isothermal,
    /// The energy slot holds e = c_s² ρ / (γ - 1).
    Adiabatic,
}

impl EquationOfState {
    /// Value stored in the energy slot for a cell with sound speed `cs`
    /// and density `rho`.
    pub fn thermal_value(self, cs: f64, rho: f64, gamma: f64) -> f64 {
        match self {
            Self::Isothermal => cs,
            Self::Adiabatic => cs * cs * rho / (gamma - 1.0),
        }
    }
}

impl FromStr for EquationOfState {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ISOTHERMAL" => Ok(Self::Isothermal),
            "ADIABATIC" => Ok(Self::Adiabatic),
            _ => Err(ConfigError::UnknownEquationOfState(s.to_string())),
        }
    }
}

impl fmt::Display for EquationOfState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Isothermal => write!(f, "isothermal"),
            Self::Adiabatic => write!(f, "adiabatic"),
        }
    }
}
