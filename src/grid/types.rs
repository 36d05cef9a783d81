//! Core types for the one-dimensional grid.

use std::fmt;

use crate::SPEED_OF_LIGHT;

/// Default number of cells per minimum wavelength.
pub const DEFAULT_CELLS_PER_WAVELENGTH: f64 = 20.0;

/// A fixed one-dimensional grid of `width` cells.
///
/// Immutable for the run. The electric field lives on the `width` cell
/// centres, the magnetic field on the `width - 1` faces between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Number of cells
    pub width: usize,
    /// Cell size in metres
    pub cell_size: f64,
}

impl Grid {
    /// Create a grid with an explicit cell size.
    pub fn new(width: usize, cell_size: f64) -> Self {
        Self { width, cell_size }
    }

    /// Create a grid resolving `lambda_min` with `cells_per_wavelength` cells.
    pub fn from_wavelength(width: usize, lambda_min: f64, cells_per_wavelength: f64) -> Self {
        Self::new(width, lambda_min / cells_per_wavelength)
    }

    /// Time step for the given Courant factor.
    ///
    /// `dt = cfl * dx / c0`, which is `dx / (2 c0)` at the usual factor of 0.5.
    pub fn time_step(&self, cfl_factor: f64) -> f64 {
        cfl_factor * self.cell_size / SPEED_OF_LIGHT
    }

    /// Number of magnetic field samples (one per cell face).
    pub fn face_count(&self) -> usize {
        self.width.saturating_sub(1)
    }

    /// Index of the last cell.
    pub fn last_cell(&self) -> usize {
        self.width.saturating_sub(1)
    }

    /// Check if `cell` is one of the two edge cells driven by the boundary.
    pub fn is_edge(&self, cell: usize) -> bool {
        cell == 0 || cell == self.last_cell()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cells x {:.3e} m", self.width, self.cell_size)
    }
}
