//! Initialise a disk from a `.par` file and print a summary.
//!
//! Usage: cargo run -p diskinit --example from_par -- setup.par

use diskinit::{Field, Setup, check_finite, cond_init};

fn main() {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: from_par <setup.par>");
        std::process::exit(2);
    };

    let setup = match Setup::from_par_file(&path) {
        Ok(setup) => setup,
        Err(e) => {
            eprintln!("❌ {}: {}", path, e);
            std::process::exit(1);
        }
    };

    println!("Profile: {}", setup.profile);
    println!("EOS: {}", setup.eos);
    println!("Grid: {} x {}", setup.grid.nx, setup.grid.ny);

    let fluids = match cond_init(&setup) {
        Ok(fluids) => fluids,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let Some(gas) = fluids.selected() else {
        eprintln!("❌ no fluid selected");
        std::process::exit(1);
    };

    match check_finite(&gas.fields) {
        Ok(()) => println!("✓ all fields finite"),
        Err(e) => println!("⚠ {}", e),
    }

    for field in Field::ALL {
        let values = gas.fields.field(field);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        println!("{:>8?}: [{:.5e}, {:.5e}]", field, min, max);
    }
}
