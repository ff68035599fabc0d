//! Gaussian ring shape shared by the ring profiles.
//!
//! Σ(r) = Σ_0 [1 + exp(-x²/2) / (w √(2π))],  x = (r - r_c) / w
//!
//! The ring adds unit mass per unit Σ_0 on top of the uniform background.

use crate::constants::SQRT_TWO_PI;
use crate::params::PhysicalParameters;

#[derive(Debug, Clone, Copy)]
pub(super) struct Ring {
    center: f64,
    width: f64,
}

impl Ring {
    pub(super) fn from_params(params: &PhysicalParameters) -> Self {
        Self {
            center: params.ring_center,
            width: params.ring_width,
        }
    }

    /// exp(-x²/2), the factor every ring quantity is built from.
    pub(super) fn inverse_exp_part(&self, r: f64) -> f64 {
        let x = (r - self.center) / self.width;
        (-0.5 * x * x).exp()
    }

    /// exp(+x²/2). Overflows to +inf far from the ring, which the callers
    /// only ever divide by.
    pub(super) fn exp_part(&self, r: f64) -> f64 {
        let x = (r - self.center) / self.width;
        (0.5 * x * x).exp()
    }

    /// Unperturbed surface density from a precomputed `inverse_exp_part`.
    pub(super) fn density(&self, sigma0: f64, inverse_exp_part: f64) -> f64 {
        sigma0 * (1.0 + inverse_exp_part / (self.width * SQRT_TWO_PI))
    }

    /// d ln Σ / d ln r from a precomputed `inverse_exp_part`.
    pub(super) fn log_density_slope(&self, r: f64, inverse_exp_part: f64) -> f64 {
        -r * (r - self.center) / (self.width * self.width) * inverse_exp_part
            / (inverse_exp_part + self.width * SQRT_TWO_PI)
    }

    /// Steady viscous drift v_r = -3ν/(Σ√r) ∂(Σ√r)/∂r, written with the
    /// growing exponential as the closed-form ring solution.
    pub(super) fn viscous_drift(&self, nu: f64, r: f64) -> f64 {
        let w2 = self.width * self.width;
        let denominator = w2 * (1.0 + self.width * SQRT_TWO_PI * self.exp_part(r));
        3.0 * nu * ((r - self.center) / denominator - 0.5 / r)
    }

    /// Same drift rewritten on the decaying exponential, reusing the factor
    /// already computed for the density.
    pub(super) fn viscous_drift_from(&self, nu: f64, r: f64, inverse_exp_part: f64) -> f64 {
        let w2 = self.width * self.width;
        let denominator = w2 * (inverse_exp_part + self.width * SQRT_TWO_PI);
        3.0 * nu * ((r - self.center) * inverse_exp_part / denominator - 0.5 / r)
    }
}
