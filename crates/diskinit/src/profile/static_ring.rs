//! Gaussian ring in hydrostatic equilibrium.
//!
//! Rotation balances gravity and the pressure gradient of the ring:
//!
//! v_φ² = (G M_* / r) [1 + h² (2f - 1 + d ln Σ / d ln r)]
//!
//! Far from the ring d ln Σ / d ln r → 0 and this reduces to the flared
//! Keplerian disk. The radial velocity carries noise only.

use crate::eos::EquationOfState;
use crate::noise::{UniformDeviates, perturbation};
use crate::params::PhysicalParameters;
use crate::profile::CellState;
use crate::profile::ring::Ring;

pub(super) fn evaluate<D: UniformDeviates + ?Sized>(
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

    let h2 = params.aspect_ratio_squared(r);
    let pressure_term = -1.0
        + 2.0 * params.flaring_index
        + ring.log_density_slope(r, inverse_exp_part);

    // NaN when the pressure term outweighs gravity
    let mut v_azimuthal = (params.g * params.stellar_mass / r * (1.0 + h2 * pressure_term)).sqrt();
    v_azimuthal -= params.frame_velocity(r);
    v_azimuthal *= 1.0 + params.aspect_ratio * perturbation(params.noise, deviates.uniform());

    let v_radial = soundspeed * perturbation(params.noise, deviates.uniform());

    CellState {
        density,
        v_azimuthal,
        v_radial,
        thermal: eos.thermal_value(soundspeed, density, params.gamma),
    }
}
