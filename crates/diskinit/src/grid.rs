//! Grid geometry and radial coordinates.
//!
//! Cells are stored row-major: one row per radial index `j`, one column per
//! azimuthal index `i`, ghost layers included on both sides of each axis.
//! The linear index is `l = j * columns + i`.

use serde::{Deserialize, Serialize};

use crate::constants::PI;
use crate::error::GridError;

/// Active cell counts and ghost layer widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridGeometry {
    /// Active azimuthal cells
    pub nx: usize,
    /// Active radial cells
    pub ny: usize,
    /// Ghost cells per azimuthal boundary
    pub nghx: usize,
    /// Ghost cells per radial boundary
    pub nghy: usize,
}

impl GridGeometry {
    pub fn new(nx: usize, ny: usize, nghx: usize, nghy: usize) -> Self {
        Self { nx, ny, nghx, nghy }
    }

    /// Radial rows including ghosts: ny + 2 nghy.
    pub fn rows(&self) -> usize {
        self.ny + 2 * self.nghy
    }

    /// Azimuthal columns including ghosts: nx + 2 nghx.
    pub fn columns(&self) -> usize {
        self.nx + 2 * self.nghx
    }

    /// Total number of cells in every field.
    pub fn len(&self) -> usize {
        self.rows() * self.columns()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Linear index of cell (i, j).
    pub fn index(&self, i: usize, j: usize) -> usize {
        j * self.columns() + i
    }

    /// Inverse of [`GridGeometry::index`].
    pub fn coordinates(&self, l: usize) -> (usize, usize) {
        (l % self.columns(), l / self.columns())
    }
}

/// Radial cell spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Spacing {
    /// Uniform in r.
    #[default]
    Arithmetic,
    /// Uniform in ln r.
    Logarithmic,
}

/// Cell edges and centres of a polar grid.
///
/// Ghost rows continue the active spacing past both radial boundaries.
#[derive(Debug, Clone)]
pub struct RadialGrid {
    geometry: GridGeometry,
    spacing: Spacing,

    /// Radial cell edges, rows + 1 values
    edges: Vec<f64>,

    /// Azimuthal extent of the active cells
    xmin: f64,
    xmax: f64,
}

impl RadialGrid {
    /// Build the radial edges for active cells spanning `[ymin, ymax]`.
    ///
    /// The azimuthal extent defaults to `[-π, π)`.
    pub fn new(
        geometry: GridGeometry,
        ymin: f64,
        ymax: f64,
        spacing: Spacing,
    ) -> Result<Self, GridError> {
        if geometry.nx == 0 {
            return Err(GridError::Empty("azimuth"));
        }
        if geometry.ny == 0 {
            return Err(GridError::Empty("radius"));
        }
        if !(ymin > 0.0 && ymax > ymin && ymax.is_finite()) {
            return Err(GridError::InvalidExtent { ymin, ymax });
        }

        let ny = geometry.ny as f64;
        let edges: Vec<f64> = (0..=geometry.rows())
            .map(|j| {
                let k = j as f64 - geometry.nghy as f64;
                match spacing {
                    Spacing::Arithmetic => ymin + k * (ymax - ymin) / ny,
                    Spacing::Logarithmic => (ymin.ln() + k * (ymax / ymin).ln() / ny).exp(),
                }
            })
            .collect();

        let grid = Self {
            geometry,
            spacing,
            edges,
            xmin: -PI,
            xmax: PI,
        };

        // Only arithmetic ghosts can cross the origin
        let inner = grid.ymed(0);
        if inner <= 0.0 {
            return Err(GridError::NonPositiveRadius {
                row: 0,
                radius: inner,
            });
        }

        Ok(grid)
    }

    /// Set the azimuthal extent of the active cells.
    pub fn with_azimuth(mut self, xmin: f64, xmax: f64) -> Result<Self, GridError> {
        if !(xmax > xmin && xmin.is_finite() && xmax.is_finite()) {
            return Err(GridError::InvalidAzimuth { xmin, xmax });
        }
        self.xmin = xmin;
        self.xmax = xmax;
        Ok(self)
    }

    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Lower radial edge of row `j`.
    pub fn ymin(&self, j: usize) -> f64 {
        self.edges[j]
    }

    /// Cell-centre radius of row `j`.
    pub fn ymed(&self, j: usize) -> f64 {
        0.5 * (self.edges[j] + self.edges[j + 1])
    }

    /// Cell-centre radii of all rows, ghosts included.
    pub fn radii(&self) -> Vec<f64> {
        (0..self.geometry.rows()).map(|j| self.ymed(j)).collect()
    }

    /// Cell-centre azimuth of column `i`.
    pub fn xmed(&self, i: usize) -> f64 {
        let dx = (self.xmax - self.xmin) / self.geometry.nx as f64;
        self.xmin + (i as f64 - self.geometry.nghx as f64 + 0.5) * dx
    }

    /// Radial extent of the active cells.
    pub fn active_extent(&self) -> (f64, f64) {
        let nghy = self.geometry.nghy;
        (self.edges[nghy], self.edges[nghy + self.geometry.ny])
    }
}
