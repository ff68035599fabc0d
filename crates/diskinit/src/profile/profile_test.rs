use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::eos::EquationOfState;
use crate::error::ConfigError;
use crate::noise::{ConstantDeviate, UniformDeviates};
use crate::params::PhysicalParameters;
use crate::profile::Profile;

#[test]
fn zero_noise_is_reproducible_for_every_profile() {
    let params = PhysicalParameters::default();

    for profile in Profile::ALL {
        for eos in [EquationOfState::Isothermal, EquationOfState::Adiabatic] {
            let mut a = ChaChaRng::seed_from_u64(1);
            let mut b = ChaChaRng::seed_from_u64(2);

            for r in [0.4, 0.9, 1.0, 1.3, 2.5] {
                let x = profile.evaluate(r, &params, eos, &mut a);
                let y = profile.evaluate(r, &params, eos, &mut b);
                assert_eq!(x, y, "{} differs at r = {}", profile, r);
            }
        }
    }
}

#[test]
fn adiabatic_energy_uses_cell_density() {
    let params = PhysicalParameters {
        noise: 0.3,
        ..PhysicalParameters::default()
    };
    let mut rng = ChaChaRng::seed_from_u64(77);

    for profile in Profile::ALL {
        let r = 1.1;
        let cell = profile.evaluate(r, &params, EquationOfState::Adiabatic, &mut rng);
        let cs = params.sound_speed(r);
        assert_eq!(cell.thermal, cs * cs * cell.density / (params.gamma - 1.0));
    }
}

#[test]
fn draw_counts_match_consumption() {
    let params = PhysicalParameters {
        noise: 0.1,
        ..PhysicalParameters::default()
    };

    for profile in Profile::ALL {
        let mut used = ChaChaRng::seed_from_u64(5);
        let mut reference = ChaChaRng::seed_from_u64(5);

        profile.evaluate(1.0, &params, EquationOfState::Isothermal, &mut used);
        for _ in 0..profile.draws_per_cell() {
            reference.uniform();
        }

        assert_eq!(used.uniform(), reference.uniform(), "{}", profile);
    }
}

#[test]
fn unit_keplerian_frequency_at_reference_radius() {
    let params = PhysicalParameters::default();
    assert_eq!(params.orbital_frequency(1.0), 1.0);
    assert_eq!(params.keplerian_velocity(1.0), 1.0);
}

#[test]
fn centred_deviate_matches_zero_noise() {
    let quiet = PhysicalParameters::default();
    let loud = PhysicalParameters {
        noise: 0.8,
        ..quiet
    };

    for profile in Profile::ALL {
        let eos = EquationOfState::Adiabatic;
        let a = profile.evaluate(1.2, &quiet, eos, &mut ConstantDeviate(0.9));
        let b = profile.evaluate(1.2, &loud, eos, &mut ConstantDeviate(0.5));
        assert_eq!(a, b, "{}", profile);
    }
}

#[test]
fn parses_names_loosely() {
    assert_eq!("PowerLawDisk".parse::<Profile>().unwrap(), Profile::PowerLawDisk);
    assert_eq!("gaussian_ring_plain".parse::<Profile>().unwrap(), Profile::GaussianRingPlain);
    assert_eq!("Gaussian-Ring-Noisy".parse::<Profile>().unwrap(), Profile::GaussianRingNoisy);
    assert_eq!("STATICRING".parse::<Profile>().unwrap(), Profile::StaticRing);
    assert!(matches!(
        "ring".parse::<Profile>(),
        Err(ConfigError::UnknownProfile(_))
    ));
}

#[test]
fn display_round_trips() {
    for profile in Profile::ALL {
        assert_eq!(profile.to_string().parse::<Profile>().unwrap(), profile);
    }
}

#[test]
fn initial_condition_triples() {
    assert_eq!(
        Profile::from_initial_condition("POWERLAW2DDENS", "STATICPOWERLAW2DVAZIM", "STATICVY")
            .unwrap(),
        Profile::PowerLawDisk
    );
    assert_eq!(
        Profile::from_initial_condition("RING2DDENS", "KEPLERIAN2DVAZIM", "KEPLERIANRINGVY")
            .unwrap(),
        Profile::GaussianRingPlain
    );
    assert_eq!(
        Profile::from_initial_condition("ring2ddens", "staticring2dvazim", "staticvy").unwrap(),
        Profile::StaticRing
    );
    assert!(matches!(
        Profile::from_initial_condition("RING2DDENS", "STATICPOWERLAW2DVAZIM", "STATICVY"),
        Err(ConfigError::UnsupportedInitialCondition { .. })
    ));
}

#[test]
fn only_power_law_is_not_a_ring() {
    assert!(!Profile::PowerLawDisk.is_ring());
    assert!(Profile::GaussianRingPlain.is_ring());
    assert!(Profile::GaussianRingNoisy.is_ring());
    assert!(Profile::StaticRing.is_ring());
}
