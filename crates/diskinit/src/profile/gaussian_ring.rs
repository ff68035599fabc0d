//! Viscously spreading Gaussian ring.
//!
//! Two variants share the density shape and Keplerian rotation:
//!
//! - **plain**: no perturbations; the drift is evaluated on exp(+x²/2)
//! - **noisy**: density and rotation perturbed; the drift reuses the
//!   exp(-x²/2) factor computed for the density

use crate::eos::EquationOfState;
use crate::noise::{UniformDeviates, perturbation};
use crate::params::PhysicalParameters;
use crate::profile::CellState;
use crate::profile::ring::Ring;

pub(super) fn evaluate_plain(
    r: f64,
    params: &PhysicalParameters,
    eos: EquationOfState,
) -> CellState {
    let ring = Ring::from_params(params);
    let soundspeed = params.sound_speed(r);

    let density = ring.density(params.sigma0, ring.inverse_exp_part(r));
    let v_azimuthal = params.keplerian_velocity(r) - params.frame_velocity(r);
    let v_radial = ring.viscous_drift(params.nu, r);

    CellState {
        density,
        v_azimuthal,
        v_radial,
        thermal: eos.thermal_value(soundspeed, density, params.gamma),
    }
}

pub(super) fn evaluate_noisy<D: UniformDeviates + ?Sized>(
    r: f64,
    params: &PhysicalParameters,
    eos: EquationOfState,
    deviates: &mut D,
) -> CellState {
    let ring = Ring::from_params(params);
    let soundspeed = params.sound_speed(r);
    let inverse_exp_part = ring.inverse_exp_part(r);

    let density = ring.density(params.sigma0, inverse_exp_part)
        * (1.0 + perturbation(params.noise, deviates.uniform()));

    let mut v_azimuthal = params.keplerian_velocity(r) - params.frame_velocity(r);
    v_azimuthal *= 1.0 + params.aspect_ratio * perturbation(params.noise, deviates.uniform());

    let v_radial = ring.viscous_drift_from(params.nu, r, inverse_exp_part);

    CellState {
        density,
        v_azimuthal,
        v_radial,
        thermal: eos.thermal_value(soundspeed, density, params.gamma),
    }
}
