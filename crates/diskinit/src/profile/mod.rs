//! Analytic disk profiles.
//!
//! Each profile maps a cell-centre radius to density, azimuthal velocity,
//! radial velocity and the thermal slot (sound speed or internal energy).
//! Profiles are axisymmetric and stateless: the only inputs are the radius,
//! the run parameters and the deviates drawn for that cell.
//!
//! | Profile | Density | Azimuthal velocity | Radial velocity | Draws |
//! |---------|---------|--------------------|-----------------|-------|
//! | `PowerLawDisk` | Σ_0 (r/R_0)^(-p), noisy | pressure-supported Keplerian, noisy | α-disk drift + noise | 3 |
//! | `GaussianRingPlain` | Gaussian ring | Keplerian | viscous ring drift | 0 |
//! | `GaussianRingNoisy` | Gaussian ring, noisy | Keplerian, noisy | viscous ring drift | 2 |
//! | `StaticRing` | Gaussian ring, noisy | hydrostatic balance, noisy | noise only | 3 |
//!
//! The two Gaussian ring variants are kept apart on purpose: they differ in
//! where noise enters and in how the drift is written.

mod gaussian_ring;
mod power_law;
mod ring;
mod static_ring;

#[cfg(test)]
mod profile_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::eos::EquationOfState;
use crate::error::ConfigError;
use crate::noise::UniformDeviates;
use crate::params::PhysicalParameters;

/// Field values for a single cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellState {
    /// Surface density
    pub density: f64,
    /// Azimuthal velocity in the rotating frame
    pub v_azimuthal: f64,
    /// Radial velocity
    pub v_radial: f64,
    /// Sound speed (isothermal) or internal energy (adiabatic)
    pub thermal: f64,
}

/// Named initial-condition profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Profile {
    /// Power-law surface density with pressure-supported rotation.
    #[default]
    PowerLawDisk,
    /// Gaussian ring spreading viscously, no perturbations.
    GaussianRingPlain,
    /// Gaussian ring spreading viscously, perturbed density and rotation.
    GaussianRingNoisy,
    /// Gaussian ring in hydrostatic equilibrium, no mean drift.
    StaticRing,
}

impl Profile {
    /// All profiles, in declaration order.
    pub const ALL: [Profile; 4] = [
        Profile::PowerLawDisk,
        Profile::GaussianRingPlain,
        Profile::GaussianRingNoisy,
        Profile::StaticRing,
    ];

    /// Evaluate the profile at radius `r`.
    ///
    /// `r` must be strictly positive. Deviates are drawn in the order
    /// density, azimuthal velocity, radial velocity, skipping the terms a
    /// profile does not perturb (see [`Profile::draws_per_cell`]).
    pub fn evaluate<D: UniformDeviates + ?Sized>(
        self,
        r: f64,
        params: &PhysicalParameters,
        eos: EquationOfState,
        deviates: &mut D,
    ) -> CellState {
        match self {
            Self::PowerLawDisk => power_law::evaluate(r, params, eos, deviates),
            Self::GaussianRingPlain => gaussian_ring::evaluate_plain(r, params, eos),
            Self::GaussianRingNoisy => gaussian_ring::evaluate_noisy(r, params, eos, deviates),
            Self::StaticRing => static_ring::evaluate(r, params, eos, deviates),
        }
    }

    /// Number of deviates consumed per cell.
    pub fn draws_per_cell(self) -> usize {
        match self {
            Self::PowerLawDisk => 3,
            Self::GaussianRingPlain => 0,
            Self::GaussianRingNoisy => 2,
            Self::StaticRing => 3,
        }
    }

    /// Whether the profile uses `ring_center` and `ring_width`.
    pub fn is_ring(self) -> bool {
        !matches!(self, Self::PowerLawDisk)
    }

    /// Map the setup-tool initial-condition keywords to a profile.
    ///
    /// Only the three combinations the setups ship with are accepted:
    ///
    /// | DensityInitial | VxInitial | VyInitial | Profile |
    /// |----------------|-----------|-----------|---------|
    /// | POWERLAW2DDENS | STATICPOWERLAW2DVAZIM | STATICVY | `PowerLawDisk` |
    /// | RING2DDENS | KEPLERIAN2DVAZIM | KEPLERIANRINGVY | `GaussianRingPlain` |
    /// | RING2DDENS | STATICRING2DVAZIM | STATICVY | `StaticRing` |
    pub fn from_initial_condition(density: &str, vx: &str, vy: &str) -> Result<Self, ConfigError> {
        let key = (
            density.trim().to_ascii_uppercase(),
            vx.trim().to_ascii_uppercase(),
            vy.trim().to_ascii_uppercase(),
        );
        match (key.0.as_str(), key.1.as_str(), key.2.as_str()) {
            ("POWERLAW2DDENS", "STATICPOWERLAW2DVAZIM", "STATICVY") => Ok(Self::PowerLawDisk),
            ("RING2DDENS", "KEPLERIAN2DVAZIM", "KEPLERIANRINGVY") => Ok(Self::GaussianRingPlain),
            ("RING2DDENS", "STATICRING2DVAZIM", "STATICVY") => Ok(Self::StaticRing),
            _ => Err(ConfigError::UnsupportedInitialCondition {
                density: density.to_string(),
                vx: vx.to_string(),
                vy: vy.to_string(),
            }),
        }
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::PowerLawDisk => "PowerLawDisk",
            Self::GaussianRingPlain => "GaussianRingPlain",
            Self::GaussianRingNoisy => "GaussianRingNoisy",
            Self::StaticRing => "StaticRing",
        }
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    /// Case-insensitive, ignoring `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|p| p.name().to_ascii_lowercase() == key)
            .ok_or_else(|| ConfigError::UnknownProfile(s.to_string()))
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
