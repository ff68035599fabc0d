//! Field storage and fluid registration.
//!
//! A [`FieldSet`] holds the four primitive fields of one fluid, each a flat
//! array over the full grid (ghosts included) addressed by
//! [`GridGeometry::index`]. Arrays are allocated once and never resized.

use serde::{Deserialize, Serialize};

use crate::grid::GridGeometry;

/// Primitive fields, named after the setup-tool labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Surface density
    Density,
    /// Sound speed (isothermal) or internal energy (adiabatic)
    Energy,
    /// Azimuthal velocity
    Vx,
    /// Radial velocity
    Vy,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Density, Field::Energy, Field::Vx, Field::Vy];
}

/// The four field arrays of one fluid.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSet {
    geometry: GridGeometry,

    pub density: Vec<f64>,
    pub v_azimuthal: Vec<f64>,
    pub v_radial: Vec<f64>,
    pub energy: Vec<f64>,

    /// Fields written out with the first snapshot
    outputs: Vec<Field>,
}

impl FieldSet {
    /// Allocate zero-filled fields for `geometry`.
    pub fn new(geometry: GridGeometry) -> Self {
        let n = geometry.len();
        Self {
            geometry,
            density: vec![0.0; n],
            v_azimuthal: vec![0.0; n],
            v_radial: vec![0.0; n],
            energy: vec![0.0; n],
            outputs: Vec::new(),
        }
    }

    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    /// Read-only view of one field.
    pub fn field(&self, field: Field) -> &[f64] {
        match field {
            Field::Density => &self.density,
            Field::Energy => &self.energy,
            Field::Vx => &self.v_azimuthal,
            Field::Vy => &self.v_radial,
        }
    }

    /// Value of `field` at cell (i, j).
    pub fn at(&self, field: Field, i: usize, j: usize) -> f64 {
        self.field(field)[self.geometry.index(i, j)]
    }

    /// Declare `field` as part of the first output.
    pub fn mark_output(&mut self, field: Field) {
        if !self.outputs.contains(&field) {
            self.outputs.push(field);
        }
    }

    /// Fields declared for output, in declaration order.
    pub fn outputs(&self) -> &[Field] {
        &self.outputs
    }
}

/// Kind of fluid species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FluidKind {
    Gas,
    Dust,
}

/// A named fluid species and its fields.
#[derive(Debug, Clone)]
pub struct Fluid {
    pub name: String,
    pub kind: FluidKind,
    pub fields: FieldSet,
}

impl Fluid {
    pub fn new(name: impl Into<String>, kind: FluidKind, geometry: GridGeometry) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: FieldSet::new(geometry),
        }
    }

    /// The gas species every setup starts from.
    pub fn gas(geometry: GridGeometry) -> Self {
        Self::new("gas", FluidKind::Gas, geometry)
    }
}

/// Registry of fluid species with one active selection.
#[derive(Debug, Clone)]
pub struct Fluids {
    geometry: GridGeometry,
    fluids: Vec<Fluid>,
    selected: Option<usize>,
}

impl Fluids {
    pub fn new(geometry: GridGeometry) -> Self {
        Self {
            geometry,
            fluids: Vec::new(),
            selected: None,
        }
    }

    /// Register a new fluid and return its index.
    pub fn create(&mut self, name: impl Into<String>, kind: FluidKind) -> usize {
        self.fluids.push(Fluid::new(name, kind, self.geometry));
        self.fluids.len() - 1
    }

    /// Mark fluid `index` as active. Returns `None` if it does not exist.
    pub fn select(&mut self, index: usize) -> Option<&mut Fluid> {
        if index >= self.fluids.len() {
            return None;
        }
        self.selected = Some(index);
        self.fluids.get_mut(index)
    }

    /// The active fluid, if any.
    pub fn selected(&self) -> Option<&Fluid> {
        self.selected.and_then(|i| self.fluids.get(i))
    }

    pub fn selected_mut(&mut self) -> Option<&mut Fluid> {
        self.selected.and_then(|i| self.fluids.get_mut(i))
    }

    pub fn get(&self, index: usize) -> Option<&Fluid> {
        self.fluids.get(index)
    }

    /// Look up a fluid by name.
    pub fn by_name(&self, name: &str) -> Option<&Fluid> {
        self.fluids.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fluids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fluids.is_empty()
    }
}
