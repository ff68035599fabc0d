//! Post-initialisation checks.
//!
//! The profiles never report errors; bad parameter combinations show up as
//! NaN or Inf in the fields. These helpers catch that after the fact and
//! provide the radial integrals used to sanity-check ring normalisation.

use crate::error::NonFiniteField;
use crate::fields::{Field, FieldSet};
use crate::params::PhysicalParameters;

/// Return the first non-finite cell, scanning fields in declaration order.
pub fn check_finite(fields: &FieldSet) -> Result<(), NonFiniteField> {
    let geometry = fields.geometry();

    for field in Field::ALL {
        if let Some((l, &value)) = fields
            .field(field)
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            let (i, j) = geometry.coordinates(l);
            log::warn!("{:?} is not finite at (i={}, j={}): {}", field, i, j, value);
            return Err(NonFiniteField { field, i, j, value });
        }
    }

    Ok(())
}

/// Values of `field` along column `i`, one per radial row.
pub fn radial_profile(fields: &FieldSet, field: Field, i: usize) -> Vec<f64> {
    let geometry = fields.geometry();
    (0..geometry.rows())
        .map(|j| fields.at(field, i, j))
        .collect()
}

/// Trapezoidal ∫ f dr over sampled radii.
pub fn radial_trapezoid(radii: &[f64], values: &[f64]) -> f64 {
    assert_eq!(
        radii.len(),
        values.len(),
        "radii and values must have same length"
    );

    radii
        .windows(2)
        .zip(values.windows(2))
        .map(|(r, v)| 0.5 * (v[0] + v[1]) * (r[1] - r[0]))
        .sum()
}

/// Line density the ring adds on top of the Σ_0 background.
///
/// The Gaussian is normalised by 1/(w √(2π)), so this is Σ_0 for any width.
pub fn ring_excess_mass(params: &PhysicalParameters) -> f64 {
    params.sigma0
}
