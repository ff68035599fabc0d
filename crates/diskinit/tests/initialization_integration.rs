//! End-to-end initialisation from setup text to populated fields.

use approx::assert_relative_eq;

use diskinit::{
    EquationOfState, Field, Profile, Setup, check_finite, cond_init, radial_profile,
    radial_trapezoid, ring_excess_mass,
};

const POWER_LAW_SETUP: &str = "
# Reference power-law disk
G               1.0
MStar           1.0
R0              1.0
Sigma0          1.0
SigmaSlope      1.0
AspectRatio     0.05
FlaringIndex    0.0
Gamma           1.4
Noise           0.0
OmegaFrame      0.0
Eos             ADIABATIC
DensityInitial  POWERLAW2DDENS
VxInitial       STATICPOWERLAW2DVAZIM
VyInitial       STATICVY
Nx              16
Ny              100
Nghy            0
Ymin            1.5
Ymax            2.5
Seed            7
";

#[test]
fn power_law_reference_disk() {
    let setup = Setup::from_par_str(POWER_LAW_SETUP).unwrap();
    assert_eq!(setup.profile, Profile::PowerLawDisk);
    assert_eq!(setup.eos, EquationOfState::Adiabatic);

    let grid = setup.radial_grid().unwrap();
    let fluids = cond_init(&setup).unwrap();
    let gas = fluids.selected().unwrap();

    assert!(check_finite(&gas.fields).is_ok());
    assert_eq!(gas.fields.outputs().len(), 4);

    // Row 50 sits at r = 2.005
    let j = 50;
    let r = grid.ymed(j);
    assert_relative_eq!(r, 2.005, max_relative = 1e-12);

    let rho = gas.fields.at(Field::Density, 3, j);
    let v_phi = gas.fields.at(Field::Vx, 3, j);
    let e = gas.fields.at(Field::Energy, 3, j);

    let omega = r.powf(-1.5);
    let cs = 0.05 * omega * r;
    assert_relative_eq!(rho, 1.0 / r, max_relative = 1e-12);
    assert_relative_eq!(v_phi, omega * r * (1.0 - 0.5 * 0.0025_f64).sqrt(), max_relative = 1e-12);
    assert_relative_eq!(e, cs * cs * rho / 0.4, max_relative = 1e-12);

    println!("r = {:.4}: rho = {:.5}, v_phi = {:.5}, e = {:.3e}", r, rho, v_phi, e);
}

#[test]
fn static_ring_with_noise() {
    let setup = Setup::from_par_str(
        "
        Profile     StaticRing
        Sigma0      1.0
        RingCenter  1.0
        RingWidth   0.05
        AspectRatio 0.05
        Noise       0.01
        Nx          32
        Ny          256
        Ymin        0.5
        Ymax        1.5
        Spacing     Log
        Seed        2024
        ",
    )
    .unwrap();

    let fluids = cond_init(&setup).unwrap();
    let gas = fluids.selected().unwrap();
    assert!(check_finite(&gas.fields).is_ok());

    // Noise is centred, so the azimuthal mean of v_r stays near zero
    let geometry = gas.fields.geometry();
    let j = geometry.rows() / 2;
    let mean_vr: f64 = (0..geometry.columns())
        .map(|i| gas.fields.at(Field::Vy, i, j))
        .sum::<f64>()
        / geometry.columns() as f64;
    let cs = setup.parameters.sound_speed(setup.radial_grid().unwrap().ymed(j));
    assert!(mean_vr.abs() < 0.0025 * cs);
}

#[test]
fn ring_mass_budget() {
    let setup = Setup::from_par_str(
        "
        Profile     GaussianRingPlain
        Sigma0      0.5
        RingCenter  2.0
        RingWidth   0.08
        Nu          1e-5
        Nx          4
        Ny          600
        Nghy        0
        Ymin        1.0
        Ymax        3.0
        ",
    )
    .unwrap();

    let grid = setup.radial_grid().unwrap();
    let fluids = cond_init(&setup).unwrap();
    let gas = fluids.selected().unwrap();

    let radii = grid.radii();
    let sigma = radial_profile(&gas.fields, Field::Density, 0);
    let mass = radial_trapezoid(&radii, &sigma);
    let expected = 0.5 * (radii[radii.len() - 1] - radii[0]) + ring_excess_mass(&setup.parameters);

    assert_relative_eq!(mass, expected, max_relative = 0.05);
}
