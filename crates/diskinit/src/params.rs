//! Physical parameters of the disk, in code units.
//!
//! Loaded once at setup and read-only for the rest of the run. All per-radius
//! quantities the profiles share (Keplerian frequency, local sound speed,
//! squared aspect ratio) are derived here.
//!
//! # Physics
//!
//! - Keplerian frequency: Ω_K = √(G M_* / r³)
//! - Sound speed: c_s = h_0 (r/R_0)^f Ω_K r
//! - Squared aspect ratio: h² = h_0² (r/R_0)^(2f)

use serde::{Deserialize, Serialize};

use crate::eos::EquationOfState;
use crate::error::ConfigError;
use crate::profile::Profile;

/// Immutable run configuration for the disk profiles.
///
/// Field names follow the usual disk notation; the setup file keys they map
/// to are listed in [`crate::setup`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicalParameters {
    /// Gravitational constant
    pub g: f64,
    /// Central stellar mass
    pub stellar_mass: f64,
    /// Reference radius for all power laws
    pub r0: f64,

    /// Surface density at r0 (power-law disk) or background level (rings)
    pub sigma0: f64,
    /// Surface density exponent, Σ ∝ r^(-sigma_slope)
    pub sigma_slope: f64,

    /// Disk aspect ratio h/r at r0
    pub aspect_ratio: f64,
    /// Flaring index, h/r ∝ r^flaring_index
    pub flaring_index: f64,
    /// Adiabatic index
    pub gamma: f64,

    /// Kinematic viscosity (ring profiles)
    pub nu: f64,
    /// Shakura-Sunyaev viscosity parameter (power-law disk)
    pub alpha: f64,

    /// Angular velocity of the rotating frame
    pub omega_frame: f64,
    /// Relative amplitude of the random perturbations
    pub noise: f64,

    /// Radius of the ring centre
    pub ring_center: f64,
    /// Gaussian width of the ring
    pub ring_width: f64,
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self {
            g: 1.0,
            stellar_mass: 1.0,
            r0: 1.0,
            sigma0: 6.3662e-4,
            sigma_slope: 0.0,
            aspect_ratio: 0.05,
            flaring_index: 0.0,
            gamma: 1.4,
            nu: 1e-5,
            alpha: 0.0,
            omega_frame: 0.0,
            noise: 0.0,
            ring_center: 1.0,
            ring_width: 0.1,
        }
    }
}

impl PhysicalParameters {
    // =========================================================================
    // Derived quantities
    // =========================================================================

    /// Keplerian orbital frequency at radius r.
    /// Ω_K = √(G M_* / r³)
    pub fn orbital_frequency(&self, r: f64) -> f64 {
        (self.g * self.stellar_mass / (r * r * r)).sqrt()
    }

    /// Keplerian orbital velocity at radius r.
    /// v_K = Ω_K r
    pub fn keplerian_velocity(&self, r: f64) -> f64 {
        self.orbital_frequency(r) * r
    }

    /// Local isothermal sound speed at radius r.
    /// c_s = h_0 (r/R_0)^f Ω_K r
    pub fn sound_speed(&self, r: f64) -> f64 {
        self.aspect_ratio * (r / self.r0).powf(self.flaring_index) * self.keplerian_velocity(r)
    }

    /// Squared local aspect ratio at radius r.
    /// h² = h_0² (r/R_0)^(2f)
    pub fn aspect_ratio_squared(&self, r: f64) -> f64 {
        self.aspect_ratio * self.aspect_ratio * (r / self.r0).powf(2.0 * self.flaring_index)
    }

    /// Azimuthal velocity of the rotating frame at radius r.
    pub fn frame_velocity(&self, r: f64) -> f64 {
        self.omega_frame * r
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check that the parameters make sense for `profile` under `eos`.
    ///
    /// This belongs to the configuration layer; the profiles themselves never
    /// validate and will happily return NaN for bad input.
    pub fn validate(&self, profile: Profile, eos: EquationOfState) -> Result<(), ConfigError> {
        let named = [
            ("G", self.g),
            ("MSTAR", self.stellar_mass),
            ("R0", self.r0),
            ("SIGMA0", self.sigma0),
            ("SIGMASLOPE", self.sigma_slope),
            ("ASPECTRATIO", self.aspect_ratio),
            ("FLARINGINDEX", self.flaring_index),
            ("GAMMA", self.gamma),
            ("NU", self.nu),
            ("ALPHA", self.alpha),
            ("OMEGAFRAME", self.omega_frame),
            ("NOISE", self.noise),
            ("RINGCENTER", self.ring_center),
            ("RINGWIDTH", self.ring_width),
        ];
        if let Some(&(name, value)) = named.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::invalid(name, value, "must be finite"));
        }

        if self.r0 <= 0.0 {
            return Err(ConfigError::invalid("R0", self.r0, "must be positive"));
        }
        if self.g * self.stellar_mass <= 0.0 {
            return Err(ConfigError::invalid(
                "MSTAR",
                self.stellar_mass,
                "G * MSTAR must be positive",
            ));
        }
        if self.sigma0 <= 0.0 {
            return Err(ConfigError::invalid("SIGMA0", self.sigma0, "must be positive"));
        }
        if self.noise < 0.0 {
            return Err(ConfigError::invalid("NOISE", self.noise, "must be non-negative"));
        }
        if profile.is_ring() && self.ring_width <= 0.0 {
            return Err(ConfigError::invalid(
                "RINGWIDTH",
                self.ring_width,
                "must be positive",
            ));
        }
        if eos == EquationOfState::Adiabatic && self.gamma <= 1.0 {
            return Err(ConfigError::invalid(
                "GAMMA",
                self.gamma,
                "must exceed 1 for an adiabatic gas",
            ));
        }

        Ok(())
    }
}
