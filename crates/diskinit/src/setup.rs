//! Setup loading.
//!
//! A [`Setup`] bundles everything one initialisation needs: parameters, grid,
//! equation of state, profile and an optional seed. It can be read from JSON
//! or from a FARGO-style `.par` file:
//!
//! ```text
//! # Disk
//! Sigma0          1.0
//! AspectRatio     0.05
//! RingCenter      1.0
//! RingWidth       0.1
//! DensityInitial  RING2DDENS
//! VxInitial       STATICRING2DVAZIM
//! VyInitial       STATICVY
//! Nx  384
//! Ny  128
//! Ymin 0.4
//! Ymax 2.5
//! ```
//!
//! Keys are case-insensitive and separated from their value by whitespace;
//! `#` starts a comment. Unrecognised keys are ignored. Exactly one parameter
//! group must be present: `SigmaSlope` for the power-law disk, or both
//! `RingCenter` and `RingWidth` for the ring profiles.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::PI;
use crate::eos::EquationOfState;
use crate::error::{ConfigError, GridError};
use crate::grid::{GridGeometry, RadialGrid, Spacing};
use crate::params::PhysicalParameters;
use crate::profile::Profile;

/// Grid section of a setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    pub nx: usize,
    pub ny: usize,
    #[serde(default = "default_ghosts")]
    pub nghx: usize,
    #[serde(default = "default_ghosts")]
    pub nghy: usize,
    pub ymin: f64,
    pub ymax: f64,
    #[serde(default = "default_xmin")]
    pub xmin: f64,
    #[serde(default = "default_xmax")]
    pub xmax: f64,
    #[serde(default)]
    pub spacing: Spacing,
}

fn default_ghosts() -> usize {
    3
}

fn default_xmin() -> f64 {
    -PI
}

fn default_xmax() -> f64 {
    PI
}

impl GridConfig {
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.nx, self.ny, self.nghx, self.nghy)
    }

    /// Build the polar grid this section describes.
    pub fn build(&self) -> Result<RadialGrid, GridError> {
        RadialGrid::new(self.geometry(), self.ymin, self.ymax, self.spacing)?
            .with_azimuth(self.xmin, self.xmax)
    }
}

/// Everything needed to initialise one gas fluid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setup {
    #[serde(default)]
    pub parameters: PhysicalParameters,
    pub grid: GridConfig,
    #[serde(default)]
    pub eos: EquationOfState,
    #[serde(default)]
    pub profile: Profile,
    /// Seed for reproducible perturbations
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Setup {
    /// Decode a JSON setup.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a `.par` file.
    pub fn from_par_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_par_str(&text)
    }

    /// Parse `.par` text.
    pub fn from_par_str(text: &str) -> Result<Self, ConfigError> {
        let mut reader = ParReader::default();

        for (n, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let (Some(key), Some(value)) = (tokens.next(), tokens.next()) else {
                return Err(ConfigError::Parse {
                    line: n + 1,
                    message: format!("expected 'key value', found '{}'", line),
                });
            };

            reader.apply(key, value, n + 1)?;
        }

        reader.finish()
    }

    /// Grid described by this setup.
    pub fn radial_grid(&self) -> Result<RadialGrid, ConfigError> {
        Ok(self.grid.build()?)
    }

    /// Check parameters and grid before initialisation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parameters.validate(self.profile, self.eos)?;
        self.radial_grid()?;
        Ok(())
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Accumulates `.par` keys before profile resolution.
#[derive(Default)]
struct ParReader {
    params: PhysicalParameters,
    nx: Option<usize>,
    ny: Option<usize>,
    nghx: Option<usize>,
    nghy: Option<usize>,
    ymin: Option<f64>,
    ymax: Option<f64>,
    xmin: Option<f64>,
    xmax: Option<f64>,
    spacing: Spacing,
    eos: EquationOfState,
    seed: Option<u64>,
    profile: Option<Profile>,
    density_initial: Option<String>,
    vx_initial: Option<String>,
    vy_initial: Option<String>,
    sigma_slope_given: bool,
    ring_center_given: bool,
    ring_width_given: bool,
}

impl ParReader {
    fn apply(&mut self, key: &str, value: &str, line: usize) -> Result<(), ConfigError> {
        let real = || parse_value::<f64>(value, line);
        let count = || parse_value::<usize>(value, line);

        match key.to_ascii_lowercase().as_str() {
            "sigma0" => self.params.sigma0 = real()?,
            "sigmaslope" => {
                self.params.sigma_slope = real()?;
                self.sigma_slope_given = true;
            }
            "aspectratio" => self.params.aspect_ratio = real()?,
            "flaringindex" => self.params.flaring_index = real()?,
            "alpha" => self.params.alpha = real()?,
            "nu" => self.params.nu = real()?,
            "omegaframe" => self.params.omega_frame = real()?,
            "noise" => self.params.noise = real()?,
            "ringcenter" => {
                self.params.ring_center = real()?;
                self.ring_center_given = true;
            }
            "ringwidth" => {
                self.params.ring_width = real()?;
                self.ring_width_given = true;
            }
            "gamma" => self.params.gamma = real()?,
            "r0" => self.params.r0 = real()?,
            "mstar" => self.params.stellar_mass = real()?,
            "g" => self.params.g = real()?,
            "nx" => self.nx = Some(count()?),
            "ny" => self.ny = Some(count()?),
            "nghx" => self.nghx = Some(count()?),
            "nghy" => self.nghy = Some(count()?),
            "ymin" => self.ymin = Some(real()?),
            "ymax" => self.ymax = Some(real()?),
            "xmin" => self.xmin = Some(real()?),
            "xmax" => self.xmax = Some(real()?),
            "spacing" => self.spacing = parse_spacing(value, line)?,
            "eos" => self.eos = value.parse()?,
            "seed" => self.seed = Some(parse_value::<u64>(value, line)?),
            "profile" => self.profile = Some(value.parse()?),
            "densityinitial" => self.density_initial = Some(value.to_string()),
            "vxinitial" => self.vx_initial = Some(value.to_string()),
            "vyinitial" => self.vy_initial = Some(value.to_string()),
            _ => log::debug!("Ignoring parameter {} on line {}", key, line),
        }

        Ok(())
    }

    fn finish(self) -> Result<Setup, ConfigError> {
        let profile = self.resolve_profile()?;

        let grid = GridConfig {
            nx: self.nx.ok_or(ConfigError::MissingParameter("Nx"))?,
            ny: self.ny.ok_or(ConfigError::MissingParameter("Ny"))?,
            nghx: self.nghx.unwrap_or_else(default_ghosts),
            nghy: self.nghy.unwrap_or_else(default_ghosts),
            ymin: self.ymin.ok_or(ConfigError::MissingParameter("Ymin"))?,
            ymax: self.ymax.ok_or(ConfigError::MissingParameter("Ymax"))?,
            xmin: self.xmin.unwrap_or_else(default_xmin),
            xmax: self.xmax.unwrap_or_else(default_xmax),
            spacing: self.spacing,
        };
        self.check_groups(profile)?;

        log::debug!("Resolved profile {} ({} equation of state)", profile, self.eos);

        Ok(Setup {
            parameters: self.params,
            grid,
            eos: self.eos,
            profile,
            seed: self.seed,
        })
    }

    /// Explicit `Profile` wins; otherwise the initial-condition triple.
    fn resolve_profile(&self) -> Result<Profile, ConfigError> {
        if let Some(profile) = self.profile {
            return Ok(profile);
        }

        match (&self.density_initial, &self.vx_initial, &self.vy_initial) {
            (None, None, None) => Ok(Profile::default()),
            (Some(density), Some(vx), Some(vy)) => Profile::from_initial_condition(density, vx, vy),
            (None, _, _) => Err(ConfigError::MissingParameter("DensityInitial")),
            (_, None, _) => Err(ConfigError::MissingParameter("VxInitial")),
            (_, _, None) => Err(ConfigError::MissingParameter("VyInitial")),
        }
    }

    /// Power-law and ring parameters are mutually exclusive, and the group
    /// matching the profile is required.
    fn check_groups(&self, profile: Profile) -> Result<(), ConfigError> {
        let ring_given = self.ring_center_given || self.ring_width_given;

        if self.sigma_slope_given && ring_given {
            return Err(ConfigError::Conflict(
                "SigmaSlope cannot be combined with RingCenter/RingWidth".to_string(),
            ));
        }
        if profile.is_ring() {
            if self.sigma_slope_given {
                return Err(ConfigError::Conflict(format!(
                    "SigmaSlope given for ring profile {}",
                    profile
                )));
            }
            if !self.ring_center_given {
                return Err(ConfigError::MissingParameter("RingCenter"));
            }
            if !self.ring_width_given {
                return Err(ConfigError::MissingParameter("RingWidth"));
            }
        } else if ring_given {
            return Err(ConfigError::Conflict(format!(
                "RingCenter/RingWidth given for profile {}",
                profile
            )));
        } else if !self.sigma_slope_given {
            return Err(ConfigError::MissingParameter("SigmaSlope"));
        }

        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(value: &str, line: usize) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Parse {
        line,
        message: format!("cannot parse '{}'", value),
    })
}

fn parse_spacing(value: &str, line: usize) -> Result<Spacing, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "lin" | "linear" | "arithmetic" => Ok(Spacing::Arithmetic),
        "log" | "logarithmic" => Ok(Spacing::Logarithmic),
        _ => Err(ConfigError::Parse {
            line,
            message: format!("unknown spacing '{}'", value),
        }),
    }
}
