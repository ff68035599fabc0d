use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::eos::EquationOfState::{Adiabatic, Isothermal};
use crate::fields::{Field, FieldSet};
use crate::grid::{GridGeometry, RadialGrid, Spacing};
use crate::init::{cond_init, initialize, initialize_parallel, initialize_seeded};
use crate::noise::NoiseStream;
use crate::params::PhysicalParameters;
use crate::profile::Profile;
use crate::setup::{GridConfig, Setup};

fn grid() -> RadialGrid {
    RadialGrid::new(GridGeometry::new(12, 20, 0, 3), 0.5, 2.0, Spacing::Logarithmic).unwrap()
}

fn noisy() -> PhysicalParameters {
    PhysicalParameters {
        noise: 0.05,
        alpha: 1e-3,
        ..PhysicalParameters::default()
    }
}

#[test]
fn every_cell_matches_profile_at_its_radius() {
    let grid = grid();
    let geometry = grid.geometry();
    let params = PhysicalParameters::default();
    let noise = NoiseStream::from_seed(1);

    for profile in Profile::ALL {
        let mut fields = FieldSet::new(geometry);
        initialize_seeded(&mut fields, &grid, &params, Adiabatic, profile, &noise);

        for j in 0..geometry.rows() {
            for i in 0..geometry.columns() {
                let l = geometry.index(i, j);
                let cell = profile.evaluate(
                    grid.ymed(j),
                    &params,
                    Adiabatic,
                    &mut noise.cell(l),
                );
                assert_eq!(fields.density[l], cell.density);
                assert_eq!(fields.v_azimuthal[l], cell.v_azimuthal);
                assert_eq!(fields.v_radial[l], cell.v_radial);
                assert_eq!(fields.energy[l], cell.thermal);
            }
        }
    }
}

#[test]
fn parallel_matches_sequential_bit_for_bit() {
    let grid = grid();
    let params = noisy();

    for profile in Profile::ALL {
        for seed in [0, 42, 9001] {
            let noise = NoiseStream::from_seed(seed);
            let mut sequential = FieldSet::new(grid.geometry());
            let mut parallel = FieldSet::new(grid.geometry());

            initialize_seeded(&mut sequential, &grid, &params, Adiabatic, profile, &noise);
            initialize_parallel(&mut parallel, &grid, &params, Adiabatic, profile, &noise);

            assert_eq!(sequential, parallel, "{} seed {}", profile, seed);
        }
    }
}

#[test]
fn shared_stream_is_reproducible_for_fixed_seed() {
    let grid = grid();
    let params = noisy();

    let mut a = FieldSet::new(grid.geometry());
    let mut b = FieldSet::new(grid.geometry());
    let profile = Profile::StaticRing;
    initialize(&mut a, &grid, &params, Isothermal, profile, &mut ChaChaRng::seed_from_u64(3));
    initialize(&mut b, &grid, &params, Isothermal, profile, &mut ChaChaRng::seed_from_u64(3));

    assert_eq!(a, b);
}

#[test]
fn noise_breaks_axisymmetry() {
    let grid = grid();
    let geometry = grid.geometry();
    let mut fields = FieldSet::new(geometry);

    initialize_seeded(
        &mut fields,
        &grid,
        &noisy(),
        Isothermal,
        Profile::PowerLawDisk,
        &NoiseStream::from_seed(8),
    );

    let j = 5;
    let first = fields.at(Field::Density, 0, j);
    assert!((1..geometry.columns()).any(|i| fields.at(Field::Density, i, j) != first));
}

#[test]
fn rows_are_axisymmetric_without_noise() {
    let grid = grid();
    let geometry = grid.geometry();
    let params = PhysicalParameters::default();

    for profile in Profile::ALL {
        let mut fields = FieldSet::new(geometry);
        initialize(&mut fields, &grid, &params, Adiabatic, profile, &mut rand::rng());

        for field in Field::ALL {
            for j in 0..geometry.rows() {
                let first = fields.at(field, 0, j);
                for i in 1..geometry.columns() {
                    assert_eq!(fields.at(field, i, j), first, "{} {:?} row {}", profile, field, j);
                }
            }
        }
    }
}

#[test]
fn zero_noise_fields_do_not_depend_on_seed() {
    let grid = grid();
    let params = PhysicalParameters::default();

    for profile in Profile::ALL {
        let mut a = FieldSet::new(grid.geometry());
        let mut b = FieldSet::new(grid.geometry());
        let (one, two) = (NoiseStream::from_seed(1), NoiseStream::from_seed(2));
        initialize_seeded(&mut a, &grid, &params, Isothermal, profile, &one);
        initialize_parallel(&mut b, &grid, &params, Isothermal, profile, &two);

        assert_eq!(a, b, "{}", profile);
    }
}

#[test]
fn energy_slot_follows_equation_of_state() {
    let grid = grid();
    let geometry = grid.geometry();
    let params = noisy();
    let noise = NoiseStream::from_seed(12);

    let mut iso = FieldSet::new(geometry);
    let mut adi = FieldSet::new(geometry);
    initialize_seeded(&mut iso, &grid, &params, Isothermal, Profile::GaussianRingNoisy, &noise);
    initialize_seeded(&mut adi, &grid, &params, Adiabatic, Profile::GaussianRingNoisy, &noise);

    for j in 0..geometry.rows() {
        let cs = params.sound_speed(grid.ymed(j));
        for i in 0..geometry.columns() {
            let l = geometry.index(i, j);
            assert_eq!(iso.energy[l], cs);
            assert_eq!(adi.energy[l], cs * cs * adi.density[l] / (params.gamma - 1.0));
        }
    }
}

#[test]
fn marks_all_four_fields_for_output() {
    let grid = grid();
    let mut fields = FieldSet::new(grid.geometry());

    initialize_seeded(
        &mut fields,
        &grid,
        &PhysicalParameters::default(),
        Isothermal,
        Profile::PowerLawDisk,
        &NoiseStream::from_seed(0),
    );

    assert_eq!(
        fields.outputs(),
        &[Field::Density, Field::Energy, Field::Vx, Field::Vy]
    );
}

#[test]
#[should_panic(expected = "fields and grid must share geometry")]
fn rejects_mismatched_fields() {
    let grid = grid();
    let mut fields = FieldSet::new(GridGeometry::new(3, 3, 0, 0));

    initialize_seeded(
        &mut fields,
        &grid,
        &PhysicalParameters::default(),
        Isothermal,
        Profile::PowerLawDisk,
        &NoiseStream::from_seed(0),
    );
}

#[test]
fn cond_init_creates_selected_gas() {
    let setup = Setup {
        parameters: noisy(),
        grid: GridConfig {
            nx: 8,
            ny: 8,
            nghx: 0,
            nghy: 3,
            ymin: 0.5,
            ymax: 1.5,
            xmin: -1.0,
            xmax: 1.0,
            spacing: Spacing::Arithmetic,
        },
        eos: Adiabatic,
        profile: Profile::StaticRing,
        seed: Some(99),
    };

    let fluids = cond_init(&setup).unwrap();
    let gas = fluids.selected().unwrap();

    assert_eq!(fluids.len(), 1);
    assert_eq!(gas.name, "gas");
    assert!(gas.fields.density.iter().all(|&rho| rho > 0.0));

    // Same seed, same fields
    let again = cond_init(&setup).unwrap();
    assert_eq!(again.selected().unwrap().fields, gas.fields);
}

#[test]
fn cond_init_rejects_invalid_setup() {
    let setup = Setup {
        parameters: PhysicalParameters {
            ring_width: -0.1,
            ..PhysicalParameters::default()
        },
        grid: GridConfig {
            nx: 8,
            ny: 8,
            nghx: 0,
            nghy: 0,
            ymin: 0.5,
            ymax: 1.5,
            xmin: -1.0,
            xmax: 1.0,
            spacing: Spacing::Arithmetic,
        },
        eos: Isothermal,
        profile: Profile::GaussianRingPlain,
        seed: None,
    };

    assert!(cond_init(&setup).is_err());
}
