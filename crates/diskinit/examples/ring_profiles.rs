//! Print the radial structure of every profile around a ring.
//!
//! Usage: RUST_LOG=info cargo run -p diskinit --example ring_profiles

use diskinit::{
    EquationOfState, Field, FieldSet, GridGeometry, NoiseStream, PhysicalParameters, Profile,
    RadialGrid, Spacing, check_finite, initialize_parallel, radial_profile,
};

fn main() {
    env_logger::init();

    let params = PhysicalParameters {
        sigma0: 1.0,
        ring_center: 1.0,
        ring_width: 0.1,
        aspect_ratio: 0.05,
        nu: 1e-5,
        alpha: 1e-3,
        ..PhysicalParameters::default()
    };
    let geometry = GridGeometry::new(8, 24, 0, 0);
    let grid = RadialGrid::new(geometry, 0.6, 1.4, Spacing::Arithmetic).unwrap();
    let noise = NoiseStream::from_seed(42);

    for profile in Profile::ALL {
        let mut fields = FieldSet::new(grid.geometry());
        initialize_parallel(
            &mut fields,
            &grid,
            &params,
            EquationOfState::Isothermal,
            profile,
            &noise,
        );

        if let Err(e) = check_finite(&fields) {
            eprintln!("{}: {}", profile, e);
            continue;
        }

        println!("\n=== {} ===", profile);
        println!("{:>8} {:>12} {:>12} {:>12}", "r", "sigma", "v_phi", "v_r");

        let sigma = radial_profile(&fields, Field::Density, 0);
        let v_phi = radial_profile(&fields, Field::Vx, 0);
        let v_r = radial_profile(&fields, Field::Vy, 0);
        for (j, r) in grid.radii().iter().enumerate() {
            println!(
                "{:>8.4} {:>12.5e} {:>12.5e} {:>12.5e}",
                r, sigma[j], v_phi[j], v_r[j]
            );
        }
    }
}
