//! Power-law disk.
//!
//! Σ = Σ_0 (r/R_0)^(-p), rotation reduced below Keplerian by the radial
//! pressure gradient, and a slow inward α-disk drift.

use crate::eos::EquationOfState;
use crate::noise::{UniformDeviates, perturbation};
use crate::params::PhysicalParameters;
use crate::profile::CellState;

pub(super) fn evaluate<D: UniformDeviates + ?Sized>(
    r: f64,
    params: &PhysicalParameters,
    eos: EquationOfState,
    deviates: &mut D,
) -> CellState {
    let soundspeed = params.sound_speed(r);
    let h2 = params.aspect_ratio_squared(r);

    let density = params.sigma0
        * (r / params.r0).powf(-params.sigma_slope)
        * (1.0 + perturbation(params.noise, deviates.uniform()));

    // v_φ = v_K √(1 - h²/2)
    let mut v_azimuthal = (1.0 - 0.5 * h2).sqrt() * params.keplerian_velocity(r);
    v_azimuthal -= params.frame_velocity(r);
    v_azimuthal *= 1.0 + params.aspect_ratio * perturbation(params.noise, deviates.uniform());

    // v_r = -3ν/(2r) with ν = α h² in code units
    let mut v_radial = -1.5 * params.alpha * h2 * (params.r0 / r).sqrt();
    v_radial += soundspeed * perturbation(params.noise, deviates.uniform());

    CellState {
        density,
        v_azimuthal,
        v_radial,
        thermal: eos.thermal_value(soundspeed, density, params.gamma),
    }
}
