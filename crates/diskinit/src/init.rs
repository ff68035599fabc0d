//! Grid initialisation.
//!
//! Walks every cell of the grid (ghosts included), evaluates the selected
//! profile at the cell-centre radius and stores the result in place. No cell
//! depends on another, so the walk order only matters for which deviates a
//! cell receives:
//!
//! - [`initialize`] draws from one shared stream in row-major order
//! - [`initialize_seeded`] gives each cell its own stream keyed by its index
//! - [`initialize_parallel`] does the same as `initialize_seeded` on rayon
//!   row tasks and produces identical fields

use rayon::prelude::*;

use crate::eos::EquationOfState;
use crate::error::ConfigError;
use crate::fields::{Field, FieldSet, FluidKind, Fluids};
use crate::grid::RadialGrid;
use crate::noise::{NoiseStream, UniformDeviates};
use crate::params::PhysicalParameters;
use crate::profile::{CellState, Profile};
use crate::setup::Setup;

/// Fill `fields` drawing all deviates from a single stream.
///
/// Cells are visited row by row (radius outer, azimuth inner), so the field
/// depends on the traversal order as well as on the stream.
pub fn initialize<D: UniformDeviates + ?Sized>(
    fields: &mut FieldSet,
    grid: &RadialGrid,
    params: &PhysicalParameters,
    eos: EquationOfState,
    profile: Profile,
    deviates: &mut D,
) {
    prepare(fields, grid, eos, profile);
    let geometry = grid.geometry();

    for j in 0..geometry.rows() {
        let r = grid.ymed(j);
        for i in 0..geometry.columns() {
            let cell = profile.evaluate(r, params, eos, deviates);
            store(fields, geometry.index(i, j), cell);
        }
    }
}

/// Fill `fields` with one deviate stream per cell.
pub fn initialize_seeded(
    fields: &mut FieldSet,
    grid: &RadialGrid,
    params: &PhysicalParameters,
    eos: EquationOfState,
    profile: Profile,
    noise: &NoiseStream,
) {
    prepare(fields, grid, eos, profile);
    let geometry = grid.geometry();

    for j in 0..geometry.rows() {
        let r = grid.ymed(j);
        for i in 0..geometry.columns() {
            let l = geometry.index(i, j);
            let cell = profile.evaluate(r, params, eos, &mut noise.cell(l));
            store(fields, l, cell);
        }
    }
}

/// Row-parallel [`initialize_seeded`].
pub fn initialize_parallel(
    fields: &mut FieldSet,
    grid: &RadialGrid,
    params: &PhysicalParameters,
    eos: EquationOfState,
    profile: Profile,
    noise: &NoiseStream,
) {
    prepare(fields, grid, eos, profile);
    let columns = grid.geometry().columns();

    fields
        .density
        .par_chunks_mut(columns)
        .zip(fields.v_azimuthal.par_chunks_mut(columns))
        .zip(fields.v_radial.par_chunks_mut(columns))
        .zip(fields.energy.par_chunks_mut(columns))
        .enumerate()
        .for_each(|(j, (((density, v_azimuthal), v_radial), energy))| {
            let r = grid.ymed(j);
            for i in 0..columns {
                let cell = profile.evaluate(r, params, eos, &mut noise.cell(j * columns + i));
                density[i] = cell.density;
                v_azimuthal[i] = cell.v_azimuthal;
                v_radial[i] = cell.v_radial;
                energy[i] = cell.thermal;
            }
        });
}

/// Create the gas fluid, select it and fill it as described by `setup`.
///
/// With a seed the fill is reproducible and runs in parallel; without one
/// the deviates come from the thread-local generator.
pub fn cond_init(setup: &Setup) -> Result<Fluids, ConfigError> {
    setup.validate()?;
    let grid = setup.radial_grid()?;

    let mut fluids = Fluids::new(grid.geometry());
    let index = fluids.create("gas", FluidKind::Gas);

    if let Some(gas) = fluids.select(index) {
        let fields = &mut gas.fields;
        match setup.seed {
            Some(seed) => initialize_parallel(
                fields,
                &grid,
                &setup.parameters,
                setup.eos,
                setup.profile,
                &NoiseStream::from_seed(seed),
            ),
            None => initialize(
                fields,
                &grid,
                &setup.parameters,
                setup.eos,
                setup.profile,
                &mut rand::rng(),
            ),
        }
    }

    Ok(fluids)
}

fn prepare(fields: &mut FieldSet, grid: &RadialGrid, eos: EquationOfState, profile: Profile) {
    assert_eq!(
        fields.geometry(),
        grid.geometry(),
        "fields and grid must share geometry"
    );

    for field in Field::ALL {
        fields.mark_output(field);
    }

    log::info!(
        "Initializing {} cells ({} x {}) with {} profile, {} gas",
        fields.geometry().len(),
        fields.geometry().columns(),
        fields.geometry().rows(),
        profile,
        eos
    );
}

fn store(fields: &mut FieldSet, l: usize, cell: CellState) {
    fields.density[l] = cell.density;
    fields.v_azimuthal[l] = cell.v_azimuthal;
    fields.v_radial[l] = cell.v_radial;
    fields.energy[l] = cell.thermal;
}
